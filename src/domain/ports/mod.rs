//! Trait definitions for the host collaborators.
//!
//! The host editor and the OS clipboard are external; this crate only
//! consumes them through these contracts. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod clipboard;
pub mod text_buffer;

pub use clipboard::ClipboardSource;
pub use text_buffer::TextBuffer;

#[cfg(test)]
pub use clipboard::MockClipboardSource;
#[cfg(test)]
pub use text_buffer::MockTextBuffer;
