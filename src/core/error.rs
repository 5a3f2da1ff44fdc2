//! Calculator errors.
//!
//! None of these escape the state machine. Each one is turned into a
//! warning directive plus a state transition by the transition functions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures detected while choosing an operation or computing a result.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcError {
    /// An operation was chosen with no usable current number.
    #[error("Enter a number before choosing an operation")]
    InvalidOperand,

    /// An operand could not be read as a finite number at compute time.
    #[error("Invalid numeric values")]
    InvalidNumber,

    #[error("Division by zero is not possible")]
    DivisionByZero,

    /// The result is infinite or not a number.
    #[error("Result is too large")]
    Overflow,
}

impl CalcError {
    /// Whether the error resets the calculator as soon as it is reported.
    ///
    /// Division by zero is the exception: the error marker stays on screen
    /// and the reset is scheduled instead.
    pub fn resets_immediately(&self) -> bool {
        matches!(self, Self::InvalidNumber | Self::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            CalcError::InvalidOperand.to_string(),
            "Enter a number before choosing an operation"
        );
        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "Division by zero is not possible"
        );
        assert_eq!(CalcError::Overflow.to_string(), "Result is too large");
    }

    #[test]
    fn only_number_and_overflow_reset_immediately() {
        assert!(CalcError::InvalidNumber.resets_immediately());
        assert!(CalcError::Overflow.resets_immediately());
        assert!(!CalcError::DivisionByZero.resets_immediately());
        assert!(!CalcError::InvalidOperand.resets_immediately());
    }
}
