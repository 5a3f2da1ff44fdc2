//! Calculator shell that executes transitions against a display.

use crate::config::Settings;
use crate::core::transition::{self, Directive, DisplayText, Outcome};
use crate::core::{CalculatorState, Input, State, StateHistory, StateTransition, Trigger};
use crate::effects::display::{DisplayAdapter, DisplayError};
use chrono::Utc;
use std::time::Duration;
use stillwater::effect::{BoxedEffect, Effect};
use stillwater::prelude::*;
use tracing::{debug, trace, warn};

/// Result of running one step, to be handed to
/// [`Calculator::apply_result`].
#[derive(Clone, Debug, PartialEq)]
pub struct Stepped {
    pub trigger: Trigger,
    pub from: CalculatorState,
    pub outcome: Outcome,
}

/// Follow-up work a step asks the caller to schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheduled {
    /// Call [`Calculator::expire`] with `generation` after `after`.
    ResetAfterError { after: Duration, generation: u64 },
    /// Call [`Calculator::dismiss_warning`] with `sequence` after `after`.
    DismissWarning { after: Duration, sequence: u64 },
}

impl Scheduled {
    pub fn after(&self) -> Duration {
        match self {
            Self::ResetAfterError { after, .. } | Self::DismissWarning { after, .. } => *after,
        }
    }
}

/// The calculator state machine plus its bookkeeping.
///
/// Each input goes through two phases, as with any effectful machine here:
/// [`step`](Self::step) builds an effect that renders the transition against
/// a display environment, and [`apply_result`](Self::apply_result) commits
/// the new state once the effect has run.
pub struct Calculator {
    current: CalculatorState,
    history: StateHistory<CalculatorState>,
    settings: Settings,
    /// Bumped on every reset; delayed resets from older generations are stale.
    generation: u64,
    /// Bumped on every warning and early dismissal; only the latest
    /// warning is dismissed by its timer.
    warning_sequence: u64,
}

impl Calculator {
    pub fn new(settings: Settings) -> Self {
        Self {
            current: CalculatorState::new(),
            history: StateHistory::new(),
            settings,
            generation: 0,
            warning_sequence: 0,
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &CalculatorState {
        &self.current
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<CalculatorState> {
        &self.history
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn warning_sequence(&self) -> u64 {
        self.warning_sequence
    }

    /// Process one input.
    /// After running the effect, call apply_result() to commit the state.
    pub fn step<Env>(
        &self,
        input: Input,
    ) -> impl Effect<Output = Stepped, Error = DisplayError, Env = Env>
    where
        Env: DisplayAdapter + Clone + Send + Sync + 'static,
    {
        let stepped = Stepped {
            trigger: Trigger::Input(input),
            from: self.current.clone(),
            outcome: transition::apply(&self.current, input),
        };
        perform(stepped, self.settings.error_marker().to_string())
    }

    /// Run the delayed reset scheduled by a division by zero.
    ///
    /// It clears the calculator like [`Input::Clear`], warning included. A reset whose generation is stale (the calculator was reset since it
    /// was scheduled) does nothing.
    pub fn expire<Env>(
        &self,
        generation: u64,
    ) -> impl Effect<Output = Stepped, Error = DisplayError, Env = Env>
    where
        Env: DisplayAdapter + Clone + Send + Sync + 'static,
    {
        if generation != self.generation {
            debug!(generation, current = self.generation, "Ignoring stale reset");
            let stepped = Stepped {
                trigger: Trigger::ErrorReset,
                from: self.current.clone(),
                outcome: Outcome {
                    state: self.current.clone(),
                    directives: Vec::new(),
                    reset: false,
                },
            };
            return pure(stepped).boxed();
        }

        let stepped = Stepped {
            trigger: Trigger::ErrorReset,
            from: self.current.clone(),
            outcome: transition::clear(),
        };
        perform(stepped, self.settings.error_marker().to_string())
    }

    /// Hide the warning numbered `sequence` unless a newer one replaced it.
    pub fn dismiss_warning<Env>(
        &self,
        sequence: u64,
    ) -> impl Effect<Output = (), Error = DisplayError, Env = Env>
    where
        Env: DisplayAdapter + Clone + Send + Sync + 'static,
    {
        if sequence != self.warning_sequence {
            return pure(()).boxed();
        }
        from_fn(|env: &Env| env.dismiss_warning()).boxed()
    }

    /// Commit the result of a step and return the work it scheduled.
    pub fn apply_result(&mut self, stepped: Stepped) -> Vec<Scheduled> {
        let Stepped {
            trigger,
            from,
            outcome,
        } = stepped;

        if outcome.reset {
            self.generation += 1;
        }

        let mut scheduled = Vec::new();
        for directive in &outcome.directives {
            match directive {
                Directive::ScheduleReset => scheduled.push(Scheduled::ResetAfterError {
                    after: self.settings.error_reset_delay(),
                    generation: self.generation,
                }),
                Directive::Warn(error) => {
                    warn!(%trigger, %error, "Calculator error");
                    self.warning_sequence += 1;
                    scheduled.push(Scheduled::DismissWarning {
                        after: self.settings.warning_display(),
                        sequence: self.warning_sequence,
                    });
                }
                // Dismissed early, so its timer has nothing left to hide.
                Directive::DismissWarning => self.warning_sequence += 1,
                Directive::Render(_) => {}
            }
        }

        if outcome.state != from {
            debug!(
                %trigger,
                from = from.name(),
                to = outcome.state.name(),
                pending = outcome.state.pending_operation().map(|op| op.name()),
                operand = %outcome.state.current_operand(),
                "Transition applied"
            );
            let record = StateTransition {
                from,
                to: outcome.state.clone(),
                trigger,
                timestamp: Utc::now(),
            };
            self.history = self
                .history
                .record(record)
                .retain_last(self.settings.history_limit());
        }

        self.current = outcome.state;
        scheduled
    }
}

/// Carry out a step's display directives against the environment.
fn perform<Env>(
    stepped: Stepped,
    error_marker: String,
) -> BoxedEffect<Stepped, DisplayError, Env>
where
    Env: DisplayAdapter + Clone + Send + Sync + 'static,
{
    from_fn(move |env: &Env| {
        for directive in &stepped.outcome.directives {
            match directive {
                Directive::Render(DisplayText::Operand(operand)) => {
                    trace!(text = %operand, "Render");
                    env.render_display(operand.as_str())?;
                }
                Directive::Render(DisplayText::ErrorMarker) => {
                    trace!(text = %error_marker, "Render");
                    env.render_display(&error_marker)?;
                }
                Directive::Warn(error) => env.notify_warning(&error.to_string())?,
                Directive::DismissWarning => env.dismiss_warning()?,
                Directive::ScheduleReset => {}
            }
        }
        Ok::<_, DisplayError>(stepped.clone())
    })
    .boxed()
}
