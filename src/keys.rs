//! Key mapping for keyboard-driven adapters.
//!
//! Single characters follow the browser key names (`0`-`9`, `.`, `+`, `-`,
//! `*`, `/`, `=`, `c`/`C`). Longer words name the remaining keys and the
//! on-screen buttons that have no key of their own.

use crate::core::{Digit, Input, Operation};
use thiserror::Error;

/// A token that maps to no calculator input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unrecognized key '{0}'")]
pub struct KeyError(pub String);

/// Map a key name to an input.
///
/// # Example
///
/// ```rust
/// use keypad::core::{Input, Operation};
/// use keypad::keys::input_for_key;
///
/// assert_eq!(input_for_key("Enter"), Some(Input::Compute));
/// assert_eq!(input_for_key("*"), Some(Input::Operation(Operation::Multiply)));
/// assert_eq!(input_for_key("x"), None);
/// ```
pub fn input_for_key(key: &str) -> Option<Input> {
    let input = match key {
        "." => Input::Point,
        "+" => Input::Operation(Operation::Add),
        "-" => Input::Operation(Operation::Subtract),
        "*" => Input::Operation(Operation::Multiply),
        "/" => Input::Operation(Operation::Divide),
        "=" | "Enter" => Input::Compute,
        "c" | "C" | "Escape" | "clear" => Input::Clear,
        "Backspace" | "back" => Input::Backspace,
        "n" | "neg" | "\u{b1}" => Input::ToggleSign,
        _ => {
            let mut chars = key.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Digit::from_char(c).map(Input::Digit),
                _ => None,
            };
        }
    };
    Some(input)
}

/// Split a line of terminal input into inputs.
///
/// Whitespace separates words. A word that names a key as a whole is one
/// input; any other word is read one character at a time, so `12+3=` is
/// five inputs.
pub fn parse_line(line: &str) -> Vec<Result<Input, KeyError>> {
    let mut inputs = Vec::new();
    for word in line.split_whitespace() {
        if let Some(input) = input_for_key(word) {
            inputs.push(Ok(input));
            continue;
        }
        for c in word.chars() {
            let key = c.to_string();
            inputs.push(input_for_key(&key).ok_or(KeyError(key)));
        }
    }
    inputs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Input {
        Input::Digit(Digit::new(d).unwrap())
    }

    #[test]
    fn browser_keys_map_like_the_keypad() {
        assert_eq!(input_for_key("7"), Some(digit(7)));
        assert_eq!(input_for_key("."), Some(Input::Point));
        assert_eq!(input_for_key("-"), Some(Input::Operation(Operation::Subtract)));
        assert_eq!(input_for_key("/"), Some(Input::Operation(Operation::Divide)));
        assert_eq!(input_for_key("="), Some(Input::Compute));
        assert_eq!(input_for_key("Escape"), Some(Input::Clear));
        assert_eq!(input_for_key("C"), Some(Input::Clear));
        assert_eq!(input_for_key("Backspace"), Some(Input::Backspace));
    }

    #[test]
    fn button_words_cover_sign_toggle() {
        assert_eq!(input_for_key("neg"), Some(Input::ToggleSign));
        assert_eq!(input_for_key("\u{b1}"), Some(Input::ToggleSign));
    }

    #[test]
    fn unknown_keys_map_to_nothing() {
        assert_eq!(input_for_key("x"), None);
        assert_eq!(input_for_key("12"), None);
        assert_eq!(input_for_key(""), None);
    }

    #[test]
    fn lines_expand_character_by_character() {
        let inputs: Vec<Input> = parse_line("12+3=").into_iter().map(Result::unwrap).collect();
        assert_eq!(
            inputs,
            vec![
                digit(1),
                digit(2),
                Input::Operation(Operation::Add),
                digit(3),
                Input::Compute,
            ]
        );
    }

    #[test]
    fn named_keys_are_whole_words() {
        let inputs: Vec<Input> = parse_line("5 neg back clear")
            .into_iter()
            .map(Result::unwrap)
            .collect();
        assert_eq!(
            inputs,
            vec![digit(5), Input::ToggleSign, Input::Backspace, Input::Clear]
        );
    }

    #[test]
    fn unknown_characters_are_reported_in_place() {
        let inputs = parse_line("1x2");
        assert_eq!(inputs[0], Ok(digit(1)));
        assert_eq!(inputs[1], Err(KeyError("x".to_string())));
        assert_eq!(inputs[2], Ok(digit(2)));
    }
}
