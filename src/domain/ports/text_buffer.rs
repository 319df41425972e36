//! Editor buffer contract consumed by the classifier and the paste service.

use crate::domain::entities::Position;

/// The slice of a host editor's text API this crate needs.
///
/// # Implementations
///
/// - [`crate::infrastructure::editor::TextDocument`] - In-memory buffer
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait TextBuffer {
    /// Start of the selection, or the caret when nothing is selected.
    ///
    /// This is where pasted text begins, so caret checks run against it.
    fn cursor(&self) -> Position;

    /// Text between two positions on the same or different lines.
    ///
    /// Out-of-range positions are clamped to the document; never fails.
    fn get_range(&self, from: Position, to: Position) -> String;

    /// Currently selected text, empty when nothing is selected.
    fn selection(&self) -> String;

    /// Replaces the selection (or inserts at the caret) with `text`.
    fn replace_selection(&mut self, text: &str);
}
