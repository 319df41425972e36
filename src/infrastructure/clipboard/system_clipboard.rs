//! OS clipboard backed by `arboard`.

use crate::domain::ports::ClipboardSource;
use crate::error::ClipboardError;
use arboard::Clipboard;

/// Reads plain text from the system clipboard.
///
/// The connection is opened lazily on first read so that constructing the
/// source never fails, even without a display server.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn connection(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
        };
        Ok(self.clipboard.insert(clipboard))
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<Option<String>, ClipboardError> {
        match self.connection()?.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read system clipboard");
                Err(ClipboardError::Read(e.to_string()))
            }
        }
    }
}
