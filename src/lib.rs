//! Keypad: a pure functional calculator state machine
//!
//! Keypad follows Stillwater's "pure core, imperative shell" philosophy.
//! The calculator itself is a handful of pure transition functions over a
//! four-field state, while rendering and timers live in Effects run against
//! a display environment.
//!
//! # Core Concepts
//!
//! - **State**: the current operand, pending operand, pending operation and
//!   fresh-entry flag, as an immutable `CalculatorState`
//! - **Transitions**: pure functions from a state and an `Input` to an
//!   `Outcome` carrying the next state and display directives
//! - **Calculator**: the shell that runs outcomes against a `DisplayAdapter`
//!   and schedules delayed resets
//! - **History**: immutable tracking of state changes over time
//!
//! # Example
//!
//! ```rust
//! use keypad::core::{transition, CalculatorState, Digit, Input, Operation};
//!
//! let mut state = CalculatorState::new();
//! for input in [
//!     Input::Digit(Digit::new(5).unwrap()),
//!     Input::Operation(Operation::Add),
//!     Input::Digit(Digit::new(3).unwrap()),
//!     Input::Operation(Operation::Multiply),
//!     Input::Digit(Digit::new(2).unwrap()),
//!     Input::Compute,
//! ] {
//!     state = transition::apply(&state, input).state;
//! }
//!
//! assert_eq!(state.current_operand().as_str(), "16");
//! ```

pub mod config;
pub mod core;
pub mod effects;
pub mod keys;
pub mod session;
pub mod terminal;

// Re-export commonly used types
pub use config::Settings;
pub use crate::core::{CalcError, CalculatorState, Input, Operation, State, StateHistory};
pub use effects::{Calculator, DisplayAdapter, DisplayError};
