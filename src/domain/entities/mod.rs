//! Value types passed between the classifier, the canonicalizer and the
//! paste service.
//!
//! Nothing here has identity or a lifecycle beyond a single call.
//!
//! # Entity Types
//!
//! - [`Position`] / [`TextSpan`] - Caret locations and buffer ranges
//! - [`Classification`] / [`TextClassification`] - What clipboard text looks like
//! - [`CaretContext`] - What surrounds the caret
//! - [`PasteMode`] / [`PasteOutcome`] - Paste commands and their effect

pub mod classification;
pub mod paste;
pub mod position;

pub use classification::{CaretContext, Classification, TextClassification};
pub use paste::{PasteMode, PasteOutcome, markdown_image, markdown_link};
pub use position::{Position, TextSpan};
