//! Clipboard contract.

use crate::error::ClipboardError;

/// A source of plain-text clipboard content.
///
/// # Implementations
///
/// - [`crate::infrastructure::clipboard::SystemClipboard`] - OS clipboard via `arboard`
/// - [`crate::infrastructure::clipboard::StaticClipboard`] - Fixed text, for tests and piping
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSource {
    /// Reads the clipboard as plain text.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(text))` when the clipboard holds text
    /// - `Ok(None)` when it is empty or holds a non-text format
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] when the backend cannot be reached.
    fn read_text(&mut self) -> Result<Option<String>, ClipboardError>;
}
