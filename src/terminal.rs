//! Line-oriented terminal display.

use crate::effects::{DisplayAdapter, DisplayError, DisplayEvent};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::trace;

/// How display calls are written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `display: 16`, `warning: ...`, with an active warning repeated
    /// after each value.
    #[default]
    Plain,
    /// One JSON [`DisplayEvent`] per line.
    Json,
}

struct Surface<W> {
    out: W,
    warning: Option<String>,
}

/// A [`DisplayAdapter`] writing to any [`Write`] sink.
///
/// Clones share the same sink.
pub struct TerminalDisplay<W> {
    surface: Arc<Mutex<Surface<W>>>,
    format: OutputFormat,
}

impl<W> Clone for TerminalDisplay<W> {
    fn clone(&self) -> Self {
        Self {
            surface: Arc::clone(&self.surface),
            format: self.format,
        }
    }
}

impl TerminalDisplay<std::io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            surface: Arc::new(Mutex::new(Surface { out, warning: None })),
            format,
        }
    }

    /// Run `f` on the sink, e.g. to inspect a buffer in tests.
    pub fn with_output<R>(&self, f: impl FnOnce(&W) -> R) -> Result<R, DisplayError> {
        let surface = self.surface.lock().map_err(|_| DisplayError::Unavailable)?;
        Ok(f(&surface.out))
    }

    fn write_event(&self, event: &DisplayEvent) -> Result<(), DisplayError> {
        trace!(?event, "Terminal display");
        let mut surface = self.surface.lock().map_err(|_| DisplayError::Unavailable)?;
        match event {
            DisplayEvent::Warning { message } => surface.warning = Some(message.clone()),
            DisplayEvent::DismissWarning => surface.warning = None,
            DisplayEvent::Render { .. } => {}
        }

        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut surface.out, event)?;
                writeln!(surface.out)?;
            }
            OutputFormat::Plain => match event {
                DisplayEvent::Render { text } => match surface.warning.clone() {
                    Some(warning) => writeln!(surface.out, "display: {text}  [{warning}]")?,
                    None => writeln!(surface.out, "display: {text}")?,
                },
                DisplayEvent::Warning { message } => writeln!(surface.out, "warning: {message}")?,
                // Plain output has nothing to erase; the warning simply stops
                // being repeated.
                DisplayEvent::DismissWarning => {}
            },
        }
        surface.out.flush()?;
        Ok(())
    }
}

impl<W: Write> DisplayAdapter for TerminalDisplay<W> {
    fn render_display(&self, text: &str) -> Result<(), DisplayError> {
        self.write_event(&DisplayEvent::Render {
            text: text.to_string(),
        })
    }

    fn notify_warning(&self, message: &str) -> Result<(), DisplayError> {
        self.write_event(&DisplayEvent::Warning {
            message: message.to_string(),
        })
    }

    fn dismiss_warning(&self) -> Result<(), DisplayError> {
        self.write_event(&DisplayEvent::DismissWarning)
    }
}
