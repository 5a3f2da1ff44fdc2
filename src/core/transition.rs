//! Pure transition functions.
//!
//! Each function takes the current [`CalculatorState`] and returns an
//! [`Outcome`]: the next state plus the directives the display adapter has
//! to carry out. Nothing here performs I/O or reads the clock.

use super::error::CalcError;
use super::input::Input;
use super::operand::{Entry, Operand};
use super::operation::Operation;
use super::state::CalculatorState;

/// What the display should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayText {
    Operand(Operand),
    /// Shown while a division-by-zero reset is pending.
    ErrorMarker,
}

/// Instructions for the imperative shell, in the order they apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    Render(DisplayText),
    Warn(CalcError),
    DismissWarning,
    /// Reset the calculator after the error display delay.
    ScheduleReset,
}

/// Result of a transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub state: CalculatorState,
    pub directives: Vec<Directive>,
    /// Set when `state` is the product of a reset.
    pub reset: bool,
}

impl Outcome {
    fn unchanged(state: &CalculatorState) -> Self {
        Self {
            state: state.clone(),
            directives: Vec::new(),
            reset: false,
        }
    }

    fn rendered(state: CalculatorState) -> Self {
        let text = DisplayText::Operand(state.current_operand.clone());
        Self {
            state,
            directives: vec![Directive::Render(text)],
            reset: false,
        }
    }

    /// True when the transition neither changed state nor asked for output.
    pub fn is_noop(&self) -> bool {
        self.directives.is_empty() && !self.reset
    }

    /// The error raised by this transition, if any.
    pub fn warning(&self) -> Option<CalcError> {
        self.directives.iter().find_map(|d| match d {
            Directive::Warn(error) => Some(*error),
            _ => None,
        })
    }
}

/// Apply one input to a state.
///
/// # Example
///
/// ```rust
/// use keypad::core::{transition, CalculatorState, Digit, Input, Operation};
///
/// let inputs = [
///     Input::Digit(Digit::new(5).unwrap()),
///     Input::Operation(Operation::Add),
///     Input::Digit(Digit::new(3).unwrap()),
///     Input::Compute,
/// ];
/// let state = inputs
///     .into_iter()
///     .fold(CalculatorState::new(), |state, input| transition::apply(&state, input).state);
///
/// assert_eq!(state.current_operand().as_str(), "8");
/// ```
pub fn apply(state: &CalculatorState, input: Input) -> Outcome {
    match input {
        Input::Digit(_) | Input::Point => match input.entry() {
            Some(entry) => append_digit_or_point(state, entry),
            None => Outcome::unchanged(state),
        },
        Input::Operation(op) => choose_operation(state, op),
        Input::Clear => clear(),
        Input::Backspace => backspace(state),
        Input::ToggleSign => toggle_sign(state),
        Input::Compute => compute(state),
    }
}

pub fn append_digit_or_point(state: &CalculatorState, entry: Entry) -> Outcome {
    let Some(operand) = state
        .current_operand
        .with_entry(entry, state.awaiting_fresh_entry)
    else {
        return Outcome::unchanged(state);
    };

    Outcome::rendered(CalculatorState {
        current_operand: operand,
        awaiting_fresh_entry: false,
        ..state.clone()
    })
}

pub fn toggle_sign(state: &CalculatorState) -> Outcome {
    match state.current_operand.negated() {
        Some(operand) => Outcome::rendered(CalculatorState {
            current_operand: operand,
            ..state.clone()
        }),
        None => Outcome::unchanged(state),
    }
}

pub fn backspace(state: &CalculatorState) -> Outcome {
    Outcome::rendered(CalculatorState {
        current_operand: state.current_operand.without_last(),
        ..state.clone()
    })
}

/// Select the operator for the next calculation.
///
/// A pending calculation whose second operand has been entered is computed
/// first, so `5 + 3 *` holds `8` as the pending operand. If that compute
/// resets the calculator, the operator is still chosen on the reset state.
/// A division by zero leaves the state alone until its scheduled reset.
pub fn choose_operation(state: &CalculatorState, op: Operation) -> Outcome {
    if state.current_operand.is_unusable() {
        return failure(state, CalcError::InvalidOperand);
    }

    let chains = state.pending_operation.is_some()
        && state.pending_operand.is_some()
        && !state.awaiting_fresh_entry;

    if !chains {
        return Outcome::rendered(with_operation(state.current_operand.clone(), op));
    }

    match evaluate(state) {
        Ok(Some(result)) => Outcome::rendered(with_operation(result, op)),
        Ok(None) => Outcome::rendered(with_operation(state.current_operand.clone(), op)),
        Err(error) if error.resets_immediately() => {
            let mut outcome = failure(state, error);
            outcome.state = with_operation(outcome.state.current_operand, op);
            outcome
        }
        Err(error) => failure(state, error),
    }
}

fn with_operation(current: Operand, op: Operation) -> CalculatorState {
    CalculatorState {
        pending_operand: Some(current.clone()),
        current_operand: current,
        pending_operation: Some(op),
        awaiting_fresh_entry: true,
    }
}

/// Finish the pending calculation.
pub fn compute(state: &CalculatorState) -> Outcome {
    match evaluate(state) {
        Ok(Some(result)) => Outcome::rendered(CalculatorState {
            current_operand: result,
            pending_operand: None,
            pending_operation: None,
            awaiting_fresh_entry: true,
        }),
        Ok(None) => Outcome::unchanged(state),
        Err(error) => failure(state, error),
    }
}

/// Back to the startup state, dismissing any visible warning.
///
/// Also used for the delayed reset after a division by zero.
pub fn clear() -> Outcome {
    let mut outcome = reset();
    outcome.directives.push(Directive::DismissWarning);
    outcome
}

/// The reset that follows an invalid number or an overflow.
///
/// Unlike [`clear`] it leaves the warning on screen; it goes away on its
/// own timer.
pub fn reset() -> Outcome {
    Outcome {
        reset: true,
        ..Outcome::rendered(CalculatorState::new())
    }
}

/// `Ok(None)` when nothing is pending.
fn evaluate(state: &CalculatorState) -> Result<Option<Operand>, CalcError> {
    let (Some(op), Some(pending)) = (state.pending_operation, &state.pending_operand) else {
        return Ok(None);
    };
    let lhs = pending.value()?;
    let rhs = state.current_operand.value()?;
    op.apply(lhs, rhs).map(|value| Some(Operand::from_value(value)))
}

fn failure(state: &CalculatorState, error: CalcError) -> Outcome {
    if error.resets_immediately() {
        let mut outcome = reset();
        outcome.directives.insert(0, Directive::Warn(error));
        return outcome;
    }

    let mut directives = vec![Directive::Warn(error)];
    if error == CalcError::DivisionByZero {
        directives.push(Directive::Render(DisplayText::ErrorMarker));
        directives.push(Directive::ScheduleReset);
    }
    Outcome {
        state: state.clone(),
        directives,
        reset: false,
    }
}
