//! Editor buffer implementations.

mod text_document;

pub use text_document::TextDocument;
