//! Caret positions and text spans inside an editor buffer.

/// A zero-based `(line, ch)` location in an editor buffer.
///
/// `ch` counts characters (not bytes) from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }

    /// Returns the position `count` characters to the left on the same line.
    ///
    /// Clamps at column zero instead of wrapping to the previous line.
    pub fn back(self, count: usize) -> Self {
        Self {
            line: self.line,
            ch: self.ch.saturating_sub(count),
        }
    }
}

/// A contiguous region of editor text between two positions.
///
/// Read-only for the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpan {
    pub from: Position,
    pub to: Position,
}

impl TextSpan {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Span covering the `count` characters immediately before `caret`.
    pub fn before(caret: Position, count: usize) -> Self {
        Self::new(caret.back(count), caret)
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}
