//! Interactive session driving a calculator from lines of key input.
//!
//! Input lines and timer expiries are handled one at a time on the same
//! task, so the calculator never sees overlapping transitions. Timers run
//! as spawned sleeps that report back over a channel.

use crate::effects::{Calculator, DisplayAdapter, DisplayError, Scheduled};
use crate::keys;
use stillwater::effect::Effect;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read input: {0}")]
    Input(#[from] std::io::Error),

    #[error(transparent)]
    Display(#[from] DisplayError),
}

/// Drive `calculator` from `reader` until the input ends.
///
/// After the last line, timers that are still outstanding are awaited, so
/// a piped `10/0=` still shows the delayed reset. Returns the calculator so
/// callers can inspect its final state and history.
pub async fn run_session<R, Env>(
    reader: R,
    display: Env,
    mut calculator: Calculator,
) -> Result<Calculator, SessionError>
where
    R: AsyncRead + Unpin,
    Env: DisplayAdapter + Clone + Send + Sync + 'static,
{
    let mut lines = BufReader::new(reader).lines();
    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel::<Scheduled>();
    let mut outstanding = 0usize;
    let mut reading = true;

    display.render_display(calculator.current_state().current_operand().as_str())?;

    loop {
        tokio::select! {
            line = lines.next_line(), if reading => {
                let Some(line) = line? else {
                    debug!(outstanding, "Input closed");
                    reading = false;
                    continue;
                };
                for key in keys::parse_line(&line) {
                    let input = match key {
                        Ok(input) => input,
                        Err(error) => {
                            warn!(%error, "Skipping key");
                            continue;
                        }
                    };
                    let stepped = calculator.step::<Env>(input).run(&display).await?;
                    for scheduled in calculator.apply_result(stepped) {
                        outstanding += 1;
                        schedule(scheduled, timer_tx.clone());
                    }
                }
            }
            Some(fired) = timer_rx.recv(), if outstanding > 0 => {
                outstanding -= 1;
                match fired {
                    Scheduled::ResetAfterError { generation, .. } => {
                        let stepped = calculator.expire::<Env>(generation).run(&display).await?;
                        calculator.apply_result(stepped);
                    }
                    Scheduled::DismissWarning { sequence, .. } => {
                        calculator.dismiss_warning::<Env>(sequence).run(&display).await?;
                    }
                }
            }
            else => break,
        }
    }

    info!(
        transitions = calculator.history().transitions().len(),
        "Session finished"
    );
    Ok(calculator)
}

fn schedule(scheduled: Scheduled, tx: mpsc::UnboundedSender<Scheduled>) {
    tokio::spawn(async move {
        tokio::time::sleep(scheduled.after()).await;
        // The session may have ended already; nothing is waiting then.
        let _ = tx.send(scheduled);
    });
}
