//! Caret-context checks.
//!
//! Both checks look only at the caret's own line. Near the line start the
//! lookback range is clamped, so there is never an error to report.

use crate::domain::entities::{CaretContext, Position, TextSpan};
use crate::domain::ports::TextBuffer;

const LINK_TARGET_OPENER: &str = "](";

fn read_before<B: TextBuffer + ?Sized>(buffer: &B, caret: Position, count: usize) -> String {
    let span = TextSpan::before(caret, count);
    if span.is_empty() {
        return String::new();
    }
    buffer.get_range(span.from, span.to)
}

/// Returns true if the two characters before `caret` are `](`.
///
/// Inserting `[..](url)` here would nest link syntax inside an open target.
pub fn is_already_markdown_link<B: TextBuffer + ?Sized>(buffer: &B, caret: Position) -> bool {
    read_before(buffer, caret, 2) == LINK_TARGET_OPENER
}

/// Returns true if the character before `caret` is `"` or `'`.
///
/// Typical for attribute values like `<a href="|">`, where markdown is invalid.
pub fn is_after_quote_char<B: TextBuffer + ?Sized>(buffer: &B, caret: Position) -> bool {
    matches!(
        read_before(buffer, caret, 1).as_str(),
        "\"" | "'"
    )
}

/// Evaluates both caret predicates at `caret`.
pub fn classify_caret_context<B: TextBuffer + ?Sized>(buffer: &B, caret: Position) -> CaretContext {
    CaretContext {
        in_link_target: is_already_markdown_link(buffer, caret),
        in_quoted_attribute: is_after_quote_char(buffer, caret),
    }
}
