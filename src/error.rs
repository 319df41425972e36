//! Error types for the host-facing layer.
//!
//! The classifier and the canonicalizer are total and never produce errors;
//! everything here comes from clipboard access, configuration, or an explicit
//! paste command that has nothing to paste.

/// Errors raised by clipboard backends.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard not available: {0}")]
    Unavailable(String),

    #[error("Failed to read clipboard text: {0}")]
    Read(String),
}

/// Application-level errors surfaced to the user.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No text in clipboard")]
    ClipboardEmpty,

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error should be shown as a notice rather than a failure.
    pub fn is_notice(&self) -> bool {
        matches!(self, Self::ClipboardEmpty)
    }
}
