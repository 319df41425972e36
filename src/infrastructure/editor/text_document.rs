//! In-memory editor buffer.

use crate::domain::entities::Position;
use crate::domain::ports::TextBuffer;

/// A plain-text document with a single selection.
///
/// Stands in for the host editor when running the paste flow outside an
/// editor (the CLI, integration tests). Positions outside the document are
/// clamped, matching how editors treat range reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    lines: Vec<String>,
    anchor: Position,
    head: Position,
}

impl TextDocument {
    /// Creates a document with the caret at the end of `text`.
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let last = lines.len() - 1;
        let end = Position::new(last, lines[last].chars().count());
        Self {
            lines,
            anchor: end,
            head: end,
        }
    }

    /// Selects `anchor..head`. Either order is accepted; the cursor reports
    /// whichever end comes first.
    pub fn with_selection(mut self, anchor: Position, head: Position) -> Self {
        self.anchor = self.clamp(anchor);
        self.head = self.clamp(head);
        self
    }

    /// Moves the caret, collapsing any selection.
    pub fn set_cursor(&mut self, pos: Position) {
        let pos = self.clamp(pos);
        self.anchor = pos;
        self.head = pos;
    }

    /// Full document text.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.lines.len() - 1);
        let ch = pos.ch.min(self.lines[line].chars().count());
        Position::new(line, ch)
    }

    fn ordered(&self, a: Position, b: Position) -> (Position, Position) {
        let (a, b) = (self.clamp(a), self.clamp(b));
        if a <= b { (a, b) } else { (b, a) }
    }

    fn byte_offset(line: &str, ch: usize) -> usize {
        line.char_indices().nth(ch).map_or(line.len(), |(i, _)| i)
    }
}

impl TextBuffer for TextDocument {
    fn cursor(&self) -> Position {
        self.anchor.min(self.head)
    }

    fn get_range(&self, from: Position, to: Position) -> String {
        let (start, end) = self.ordered(from, to);

        if start.line == end.line {
            let line = &self.lines[start.line];
            let a = Self::byte_offset(line, start.ch);
            let b = Self::byte_offset(line, end.ch);
            return line[a..b].to_string();
        }

        let first = &self.lines[start.line];
        let last = &self.lines[end.line];
        let mut parts = Vec::with_capacity(end.line - start.line + 1);
        parts.push(&first[Self::byte_offset(first, start.ch)..]);
        parts.extend(
            self.lines[start.line + 1..end.line]
                .iter()
                .map(String::as_str),
        );
        parts.push(&last[..Self::byte_offset(last, end.ch)]);
        parts.join("\n")
    }

    fn selection(&self) -> String {
        self.get_range(self.anchor, self.head)
    }

    fn replace_selection(&mut self, text: &str) {
        let (start, end) = self.ordered(self.anchor, self.head);

        let prefix = {
            let line = &self.lines[start.line];
            line[..Self::byte_offset(line, start.ch)].to_string()
        };
        let suffix = {
            let line = &self.lines[end.line];
            line[Self::byte_offset(line, end.ch)..].to_string()
        };

        let merged = format!("{prefix}{text}{suffix}");
        let replacement: Vec<String> = merged.split('\n').map(str::to_string).collect();
        self.lines.splice(start.line..=end.line, replacement);

        let inserted_lines = text.matches('\n').count();
        let caret = match text.rsplit_once('\n') {
            Some((_, tail)) => Position::new(start.line + inserted_lines, tail.chars().count()),
            None => Position::new(start.line, start.ch + text.chars().count()),
        };
        self.anchor = caret;
        self.head = caret;
    }
}
