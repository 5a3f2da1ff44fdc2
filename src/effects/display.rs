//! The display adapter boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a display adapter.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("Display write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Display output could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Display is no longer available")]
    Unavailable,
}

/// Environment capability that renders the calculator.
///
/// Methods take `&self` because effects only borrow their environment;
/// implementations use interior mutability for their output.
pub trait DisplayAdapter {
    /// Show `text` as the calculator's value.
    fn render_display(&self, text: &str) -> Result<(), DisplayError>;

    /// Show a transient warning.
    fn notify_warning(&self, message: &str) -> Result<(), DisplayError>;

    /// Hide the current warning, if any.
    fn dismiss_warning(&self) -> Result<(), DisplayError>;
}

/// One call made against a display adapter.
///
/// Serialized with an `event` tag, e.g. `{"event":"render","text":"16"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DisplayEvent {
    Render { text: String },
    Warning { message: String },
    DismissWarning,
}
