//! Actions returned by screen event handlers.

use crate::model::FormValues;

/// An action that a screen handler returns to the [`App`](super::App).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Attempt delivery of the validated form values.
    Submit(FormValues),
    /// Quit the application.
    Quit,
}
