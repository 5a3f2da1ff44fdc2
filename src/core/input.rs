//! Input tokens consumed by the state machine.
//!
//! Mapping physical keys or buttons onto these tokens is the adapter's job
//! (see [`crate::keys`]).

use super::operand::Entry;
use super::operation::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .map(Self)
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("{value} is not a decimal digit"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// One user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Digit(Digit),
    Point,
    Operation(Operation),
    Clear,
    Backspace,
    ToggleSign,
    Compute,
}

impl Input {
    /// The operand entry this input performs, if it is a digit or point.
    pub fn entry(&self) -> Option<Entry> {
        match self {
            Self::Digit(digit) => Some(Entry::Digit(digit.as_char())),
            Self::Point => Some(Entry::Point),
            _ => None,
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{}", digit.as_char()),
            Self::Point => f.write_str("."),
            Self::Operation(op) => write!(f, "{}", op.symbol()),
            Self::Clear => f.write_str("Clear"),
            Self::Backspace => f.write_str("Backspace"),
            Self::ToggleSign => f.write_str("ToggleSign"),
            Self::Compute => f.write_str("="),
        }
    }
}

/// What caused a recorded state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    /// A user input.
    Input(Input),
    /// The delayed reset after a division by zero fired.
    ErrorReset,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(input) => write!(f, "{input}"),
            Self::ErrorReset => f.write_str("ErrorReset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_accepts_only_decimal_digits() {
        assert!(Digit::new(9).is_some());
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::from_char('4').map(Digit::as_char), Some('4'));
        assert!(Digit::from_char('a').is_none());
    }

    #[test]
    fn digit_deserialization_is_checked() {
        let digit: Digit = serde_json::from_str("7").unwrap();
        assert_eq!(digit.as_char(), '7');
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }

    #[test]
    fn entries_come_from_digits_and_point() {
        let five = Input::Digit(Digit::new(5).unwrap());
        assert_eq!(five.entry(), Some(Entry::Digit('5')));
        assert_eq!(Input::Point.entry(), Some(Entry::Point));
        assert_eq!(Input::Compute.entry(), None);
    }

    #[test]
    fn inputs_display_as_keys() {
        assert_eq!(Input::Operation(Operation::Multiply).to_string(), "*");
        assert_eq!(Input::Compute.to_string(), "=");
        assert_eq!(Trigger::ErrorReset.to_string(), "ErrorReset");
    }
}
