//! Calculator state.
//!
//! States are immutable values. Transition functions never mutate a state in
//! place; they return the next one.

use super::operand::Operand;
use super::operation::Operation;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values tracked in a [`StateHistory`](super::StateHistory).
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records
/// - `PartialEq`: no-op transitions are detected by comparison
/// - `Debug`: for diagnostics
/// - `Serialize` + `Deserialize`: histories can be exported as JSON
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the mode the state is in, for display and logging.
    fn name(&self) -> &str;
}

/// The four fields of a running calculation.
///
/// There is no mode enum. The machine is *entering the first operand* while
/// no operation is pending and *entering the second operand* once one is.
///
/// # Example
///
/// ```rust
/// use keypad::core::{CalculatorState, State};
///
/// let state = CalculatorState::new();
/// assert_eq!(state.current_operand().as_str(), "0");
/// assert!(state.pending_operation().is_none());
/// assert_eq!(state.name(), "EnteringFirstOperand");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) current_operand: Operand,
    pub(crate) pending_operand: Option<Operand>,
    pub(crate) pending_operation: Option<Operation>,
    pub(crate) awaiting_fresh_entry: bool,
}

impl CalculatorState {
    /// The startup state: `"0"`, nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_operand(&self) -> &Operand {
        &self.current_operand
    }

    pub fn pending_operand(&self) -> Option<&Operand> {
        self.pending_operand.as_ref()
    }

    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending_operation
    }

    /// Whether the next digit starts a new operand.
    pub fn awaiting_fresh_entry(&self) -> bool {
        self.awaiting_fresh_entry
    }

    /// True when the state equals the startup state.
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}

impl State for CalculatorState {
    fn name(&self) -> &str {
        if self.pending_operation.is_some() {
            "EnteringSecondOperand"
        } else {
            "EnteringFirstOperand"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn second_operand_state() -> CalculatorState {
        CalculatorState {
            current_operand: Operand::from_value(3.0),
            pending_operand: Some(Operand::from_value(5.0)),
            pending_operation: Some(Operation::Add),
            awaiting_fresh_entry: false,
        }
    }

    #[test]
    fn new_state_is_initial() {
        let state = CalculatorState::new();
        assert!(state.is_initial());
        assert!(state.current_operand().is_zero());
        assert!(state.pending_operand().is_none());
        assert!(!state.awaiting_fresh_entry());
    }

    #[test]
    fn name_reflects_pending_operation() {
        assert_eq!(CalculatorState::new().name(), "EnteringFirstOperand");
        assert_eq!(second_operand_state().name(), "EnteringSecondOperand");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = second_operand_state();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(second_operand_state(), second_operand_state());
        assert_ne!(second_operand_state(), CalculatorState::new());
        assert!(!second_operand_state().is_initial());
    }
}
