//! # Paste Linker
//!
//! Clipboard paste rewriting for markdown editors: classifies pasted text,
//! turns URLs into markdown links, and canonicalizes YouTube URL variants.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Value types and the editor/clipboard traits
//! - **Utilities** ([`utils`]) - Pure classifier and URL canonicalizer
//! - **Application Layer** ([`application`]) - Paste command handling
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory buffer and clipboards
//!
//! ## Core API
//!
//! ```
//! use paste_linker::domain::entities::Position;
//! use paste_linker::infrastructure::editor::TextDocument;
//! use paste_linker::{canonicalize_url, classify_caret_context, classify_text};
//!
//! let text = classify_text("https://example.com/photo.png");
//! assert!(text.is_url && text.is_image);
//!
//! let doc = TextDocument::new("foo](");
//! assert!(classify_caret_context(&doc, Position::new(0, 5)).in_link_target);
//!
//! assert_eq!(
//!     canonicalize_url("https://m.youtube.com/shorts/dQw4w9WgXcQ", true),
//!     "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
//! );
//! ```
//!
//! ## Configuration
//!
//! Toggles are loaded from environment variables via [`config::Config`] and
//! passed explicitly into [`application::services::PasteService`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::{AppError, ClipboardError};
pub use utils::{canonicalize_url, classify_caret_context, classify_text};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for host
/// integrations and integration tests.
pub mod prelude {
    pub use crate::application::services::PasteService;
    pub use crate::config::PasteSettings;
    pub use crate::domain::entities::{
        CaretContext, Classification, PasteMode, PasteOutcome, Position, TextClassification,
    };
    pub use crate::domain::ports::{ClipboardSource, TextBuffer};
    pub use crate::error::AppError;
    pub use crate::infrastructure::clipboard::{StaticClipboard, SystemClipboard};
    pub use crate::infrastructure::editor::TextDocument;
    pub use crate::{canonicalize_url, classify_caret_context, classify_text};
}
