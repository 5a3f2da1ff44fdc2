//! String-encoded operands.
//!
//! The calculator keeps numbers as the text the user typed (or the text of
//! the last result) and only converts to `f64` at compute time. All editing
//! operations here are pure and return new values.

use super::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

const ZERO: &str = "0";

/// Keys that extend an operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    Digit(char),
    Point,
}

/// A number being entered or held pending, in its display form.
///
/// Never empty: every edit that would leave it empty falls back to `"0"`.
///
/// # Example
///
/// ```rust
/// use keypad::core::{Entry, Operand};
///
/// let operand = Operand::zero()
///     .with_entry(Entry::Digit('3'), false)
///     .and_then(|o| o.with_entry(Entry::Point, false))
///     .and_then(|o| o.with_entry(Entry::Digit('5'), false))
///     .unwrap();
///
/// assert_eq!(operand.as_str(), "3.5");
/// assert!(operand.with_entry(Entry::Point, false).is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operand(pub(crate) String);

impl Default for Operand {
    fn default() -> Self {
        Self::zero()
    }
}

impl Operand {
    pub fn zero() -> Self {
        Self(ZERO.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True only for the literal `"0"`, not for `"0."` or `"-0"`.
    pub fn is_zero(&self) -> bool {
        self.0 == ZERO
    }

    pub fn has_point(&self) -> bool {
        self.0.contains('.')
    }

    /// True when there is nothing an operation could be applied to.
    pub fn is_unusable(&self) -> bool {
        self.0.is_empty() || self.0 == "-"
    }

    /// Extend the operand with a digit or decimal point.
    ///
    /// Returns `None` when the key is a second decimal point. When `fresh`
    /// is set, or the operand is `"0"`, the entry replaces the operand.
    pub fn with_entry(&self, entry: Entry, fresh: bool) -> Option<Self> {
        if entry == Entry::Point && self.has_point() {
            return None;
        }

        let replaced = fresh || self.is_zero();
        let text = match (entry, replaced) {
            (Entry::Point, true) => "0.".to_string(),
            (Entry::Digit(d), true) => d.to_string(),
            (Entry::Point, false) => format!("{}.", self.0),
            (Entry::Digit(d), false) => format!("{}{d}", self.0),
        };
        Some(Self(text))
    }

    /// Flip the leading sign. `"0"` has no sign and yields `None`.
    ///
    /// A bare `"-"` loses its sign and becomes `"0"`.
    pub fn negated(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let negated = match self.0.strip_prefix('-') {
            Some("") => Self::zero(),
            Some(rest) => Self(rest.to_string()),
            None => Self(format!("-{}", self.0)),
        };
        Some(negated)
    }

    /// Drop the last character, falling back to `"0"`.
    pub fn without_last(&self) -> Self {
        let mut text = self.0.clone();
        text.pop();
        if text.is_empty() {
            Self::zero()
        } else {
            Self(text)
        }
    }

    /// Read the operand as a finite number.
    ///
    /// Like a browser's `parseFloat`, the longest numeric prefix is used,
    /// so `"12."` reads as 12 and `"1e+"` as 1.
    pub fn value(&self) -> Result<f64, CalcError> {
        let prefix = &self.0[..numeric_prefix_len(&self.0)];
        match prefix.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(CalcError::InvalidNumber),
        }
    }

    /// Format a computed result the way `Number#toString` does.
    ///
    /// Plain notation is used for decimal exponents in `-7 < e < 21`,
    /// exponent notation (`1e+21`, `1.5e-7`) otherwise. Negative zero
    /// prints as `"0"`.
    pub fn from_value(value: f64) -> Self {
        if value == 0.0 {
            return Self::zero();
        }
        let magnitude = format_magnitude(value.abs());
        if value.is_sign_negative() {
            Self(format!("-{magnitude}"))
        } else {
            Self(magnitude)
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Length of the longest prefix of `text` shaped like a decimal literal.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0;
    }

    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    end
}

/// Shortest round-trip digits of a positive finite number, laid out in
/// plain or exponent notation.
fn format_magnitude(magnitude: f64) -> String {
    let scientific = format!("{magnitude:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return magnitude.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return magnitude.to_string();
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let count = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    if count <= point && point <= 21 {
        let zeros = usize::try_from(point - count).unwrap_or(0);
        format!("{digits}{}", "0".repeat(zeros))
    } else if 0 < point && point <= 21 {
        let split = usize::try_from(point).unwrap_or(0);
        format!("{}.{}", &digits[..split], &digits[split..])
    } else if -6 < point && point <= 0 {
        let zeros = usize::try_from(-point).unwrap_or(0);
        format!("0.{}{digits}", "0".repeat(zeros))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{}", exponent.abs())
    }
}
