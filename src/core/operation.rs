//! Binary arithmetic operations.

use super::error::CalcError;
use serde::{Deserialize, Serialize};

/// The operator waiting for a second operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operation to `pending` (left) and `current` (right).
    ///
    /// Quotients that are not whole are rounded to hundredths, half away
    /// from zero. No other result is rounded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keypad::core::{CalcError, Operation};
    ///
    /// assert_eq!(Operation::Subtract.apply(10.0, 4.0), Ok(6.0));
    /// assert_eq!(Operation::Divide.apply(10.0, 3.0), Ok(3.33));
    /// assert_eq!(Operation::Divide.apply(1.0, 0.0), Err(CalcError::DivisionByZero));
    /// ```
    pub fn apply(&self, pending: f64, current: f64) -> Result<f64, CalcError> {
        let result = match self {
            Self::Add => pending + current,
            Self::Subtract => pending - current,
            Self::Multiply => pending * current,
            Self::Divide => {
                if current == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                round_quotient(pending / current)
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

fn round_quotient(quotient: f64) -> f64 {
    if quotient.fract() == 0.0 {
        quotient
    } else {
        (quotient * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_left_to_right() {
        assert_eq!(Operation::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(Operation::Subtract.apply(3.0, 5.0), Ok(-2.0));
        assert_eq!(Operation::Multiply.apply(8.0, 2.0), Ok(16.0));
        assert_eq!(Operation::Divide.apply(10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn only_division_is_rounded() {
        assert_eq!(Operation::Divide.apply(10.0, 3.0), Ok(3.33));
        assert_eq!(Operation::Divide.apply(2.0, 3.0), Ok(0.67));
        assert_eq!(Operation::Add.apply(0.1, 0.2), Ok(0.1 + 0.2));
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(Operation::Divide.apply(1.0, 8.0), Ok(0.13));
        assert_eq!(Operation::Divide.apply(-1.0, 8.0), Ok(-0.13));
    }

    #[test]
    fn whole_quotients_are_untouched() {
        assert_eq!(Operation::Divide.apply(9.0, 3.0), Ok(3.0));
        assert_eq!(Operation::Divide.apply(1e300, 1e-5), Ok(1e300 / 1e-5));
    }

    #[test]
    fn negative_zero_divisor_is_division_by_zero() {
        assert_eq!(
            Operation::Divide.apply(4.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn non_finite_results_overflow() {
        assert_eq!(
            Operation::Multiply.apply(f64::MAX, 2.0),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            Operation::Add.apply(f64::MAX, f64::MAX),
            Err(CalcError::Overflow)
        );
        assert_eq!(
            Operation::Divide.apply(1e300, 1e-10),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn symbols_and_names() {
        assert_eq!(Operation::Divide.symbol(), '/');
        assert_eq!(Operation::Multiply.name(), "Multiply");
    }
}
