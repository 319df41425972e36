//! Fixed-content clipboard.

use crate::domain::ports::ClipboardSource;
use crate::error::ClipboardError;
use tracing::debug;

/// A clipboard that always returns the same text.
///
/// # Use Cases
///
/// - Text given on the command line or piped through stdin
/// - Tests that need a clipboard without a display server
#[derive(Debug, Clone, Default)]
pub struct StaticClipboard {
    text: Option<String>,
}

impl StaticClipboard {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        debug!(len = text.len(), "Using StaticClipboard");
        Self { text: Some(text) }
    }

    /// A clipboard with nothing in it.
    pub fn empty() -> Self {
        debug!("Using empty StaticClipboard");
        Self { text: None }
    }
}

impl ClipboardSource for StaticClipboard {
    fn read_text(&mut self) -> Result<Option<String>, ClipboardError> {
        Ok(self.text.clone())
    }
}
