//! Pure text utilities: the classifier and the URL canonicalizer.
//!
//! - [`classifier`] - Whole-string shape checks for clipboard text
//! - [`caret`] - Checks on the characters before the caret
//! - [`video_url`] - Video URL canonicalization

pub mod caret;
pub mod classifier;
pub mod video_url;

pub use caret::{classify_caret_context, is_after_quote_char, is_already_markdown_link};
pub use classifier::{classify_text, is_already_linked_url, is_image, is_url};
pub use video_url::canonicalize as canonicalize_url;
