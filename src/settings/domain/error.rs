//! Error types for settings validation.

use thiserror::Error;

/// Errors returned while validating office settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The alert window is outside the accepted range.
    #[error("alert window must be between 1 and {max} days, got {got}")]
    InvalidAlertWindow {
        /// Rejected value.
        got: u32,
        /// Largest accepted value.
        max: u32,
    },
}
