//! State transition history tracking.
//!
//! Provides immutable tracking of state changes over the lifetime of a
//! calculator, following functional programming principles.

use super::input::Trigger;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
///
/// # Example
///
/// ```rust
/// use keypad::core::{CalculatorState, Input, StateTransition, Trigger};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: CalculatorState::new(),
///     to: CalculatorState::new(),
///     trigger: Trigger::Input(Input::Clear),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.trigger.to_string(), "Clear");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The input or timer that caused the change
    pub trigger: Trigger,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition added.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - the existing history is left unchanged.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Keep only the most recent `limit` transitions.
    pub fn retain_last(&self, limit: usize) -> Self {
        let skip = self.transitions.len().saturating_sub(limit);
        Self {
            transitions: self.transitions[skip..].to_vec(),
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the
    /// first transition, then the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time elapsed from the first to the last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalculatorState, Digit, Input, Operand};

    fn showing(value: f64) -> CalculatorState {
        CalculatorState {
            current_operand: Operand::from_value(value),
            ..CalculatorState::new()
        }
    }

    fn typed(from: f64, to: f64, digit: u8) -> StateTransition<CalculatorState> {
        StateTransition {
            from: showing(from),
            to: showing(to),
            trigger: Trigger::Input(Input::Digit(Digit::new(digit).unwrap())),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<CalculatorState> = StateHistory::new();
        assert_eq!(history.transitions().len(), 0);
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(typed(0.0, 1.0, 1));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(typed(0.0, 1.0, 1))
            .record(typed(1.0, 12.0, 2));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &showing(0.0));
        assert_eq!(path[1], &showing(1.0));
        assert_eq!(path[2], &showing(12.0));
    }

    #[test]
    fn retain_last_drops_oldest() {
        let history = StateHistory::new()
            .record(typed(0.0, 1.0, 1))
            .record(typed(1.0, 12.0, 2))
            .record(typed(12.0, 123.0, 3));

        let trimmed = history.retain_last(2);
        assert_eq!(trimmed.transitions().len(), 2);
        assert_eq!(trimmed.get_path()[0], &showing(1.0));
        assert_eq!(history.retain_last(10).transitions().len(), 3);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = StateHistory::new().record(typed(0.0, 1.0, 1));
        std::thread::sleep(Duration::from_millis(10));
        let history = history.record(typed(1.0, 12.0, 2));

        assert!(history.duration().unwrap() >= Duration::from_millis(10));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(StateTransition {
            from: showing(7.0),
            to: CalculatorState::new(),
            trigger: Trigger::ErrorReset,
            timestamp: Utc::now(),
        });

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<CalculatorState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.transitions().len(), 1);
        assert_eq!(deserialized.transitions()[0].trigger, Trigger::ErrorReset);
        assert_eq!(deserialized.transitions()[0].from, showing(7.0));
    }
}
