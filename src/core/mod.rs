//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Operands, operations and input tokens
//! - The `CalculatorState` value and the `State` trait
//! - Transition functions producing an `Outcome` per input
//! - Immutable history tracking
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod error;
mod history;
mod input;
mod operand;
mod operation;
mod state;
pub mod transition;

pub use error::CalcError;
pub use history::{StateHistory, StateTransition};
pub use input::{Digit, Input, Trigger};
pub use operand::{Entry, Operand};
pub use operation::Operation;
pub use state::{CalculatorState, State};
pub use transition::{Directive, DisplayText, Outcome};
