//! Effectful calculator operations using Stillwater 0.11.0.
//!
//! This module provides the "imperative shell" around the pure core:
//! rendering transitions to a display and scheduling delayed work.
//!
//! # Key Concepts
//!
//! - **Display adapter**: the environment every effect runs against
//! - **Calculator**: steps inputs, commits results, tracks history
//! - **Scheduled work**: delayed resets and warning dismissals, tagged so
//!   stale timers do nothing
//!
//! Following Stillwater 0.11.0 conventions, methods return `impl Effect`
//! and use the free-standing constructors `pure()` and `from_fn()`.

mod display;
mod machine;

pub use display::{DisplayAdapter, DisplayError, DisplayEvent};
pub use machine::{Calculator, Scheduled, Stepped};
