//! Clipboard sources.
//!
//! Provides two [`ClipboardSource`](crate::domain::ports::ClipboardSource) implementations:
//! - [`SystemClipboard`] - The OS clipboard
//! - [`StaticClipboard`] - Fixed text, for piping and tests

mod static_clipboard;
mod system_clipboard;

pub use static_clipboard::StaticClipboard;
pub use system_clipboard::SystemClipboard;
