//! Paste command handling.

use crate::config::PasteSettings;
use crate::domain::entities::{PasteMode, PasteOutcome, markdown_image, markdown_link};
use crate::domain::ports::{ClipboardSource, TextBuffer};
use crate::error::AppError;
use crate::utils::{classify_caret_context, classify_text, canonicalize_url};
use tracing::debug;

/// Turns clipboard text into what gets written to the editor.
///
/// Composes the classifier and the canonicalizer, then writes one of:
/// - the canonical URL on its own,
/// - `[selection](url)`,
/// - `![selection](url)`,
///
/// or leaves the paste to the host.
///
/// The service holds only its [`PasteSettings`]; every call reads the buffer
/// fresh and keeps no state between calls.
#[derive(Debug, Clone, Default)]
pub struct PasteService {
    settings: PasteSettings,
}

fn non_empty(clipboard: Option<&str>) -> Option<&str> {
    clipboard.filter(|text| !text.is_empty())
}

impl PasteService {
    /// Creates a paste service with the given toggles.
    pub fn new(settings: PasteSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PasteSettings {
        &self.settings
    }

    /// Handles the editor's ordinary paste.
    ///
    /// # Flow
    ///
    /// 1. Empty clipboard: let the host paste
    /// 2. Canonicalize if both conversion toggles are on
    /// 3. If auto-linking is on, text is selected, the clipboard holds a
    ///    plain (non-image) URL and the caret is not inside a link target or
    ///    quoted attribute: write `[selection](url)`
    /// 4. Otherwise write the URL only if canonicalization changed it
    /// 5. Otherwise let the host paste
    pub fn handle_default_paste<B: TextBuffer + ?Sized>(
        &self,
        clipboard: Option<&str>,
        buffer: &mut B,
    ) -> PasteOutcome {
        let Some(text) = non_empty(clipboard) else {
            return PasteOutcome::Passthrough;
        };

        let url = canonicalize_url(text, self.settings.convert_on_default());

        if self.settings.auto_link_selection {
            let selection = buffer.selection();
            if !selection.is_empty() {
                let classification = classify_text(text);
                let context = classify_caret_context(buffer, buffer.cursor());
                debug!(kind = ?classification.kind(), ?context, "default paste over selection");

                if classification.is_linkable() && !context.suppresses_link() {
                    return Self::insert(buffer, markdown_link(&selection, &url));
                }
            }
        }

        if url != text {
            return Self::insert(buffer, url);
        }

        PasteOutcome::Passthrough
    }

    /// Handles the "paste as link" command.
    ///
    /// Writes `[selection](url)` (`[](url)` without a selection). Text that is
    /// already a markdown link is written unchanged, and the bare URL is
    /// written when the caret sits in a link target or quoted attribute.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ClipboardEmpty`] if there is no clipboard text.
    pub fn paste_as_link<B: TextBuffer + ?Sized>(
        &self,
        clipboard: Option<&str>,
        buffer: &mut B,
    ) -> Result<PasteOutcome, AppError> {
        self.explicit_paste(clipboard, buffer, markdown_link)
    }

    /// Handles the "paste as image link" command.
    ///
    /// Same rules as [`Self::paste_as_link`], producing `![selection](url)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ClipboardEmpty`] if there is no clipboard text.
    pub fn paste_as_image<B: TextBuffer + ?Sized>(
        &self,
        clipboard: Option<&str>,
        buffer: &mut B,
    ) -> Result<PasteOutcome, AppError> {
        self.explicit_paste(clipboard, buffer, markdown_image)
    }

    /// Dispatches on the paste command.
    ///
    /// # Errors
    ///
    /// See [`Self::paste_as_link`]. The default paste never fails.
    pub fn paste<B: TextBuffer + ?Sized>(
        &self,
        mode: PasteMode,
        clipboard: Option<&str>,
        buffer: &mut B,
    ) -> Result<PasteOutcome, AppError> {
        match mode {
            PasteMode::Default => Ok(self.handle_default_paste(clipboard, buffer)),
            PasteMode::Link => self.paste_as_link(clipboard, buffer),
            PasteMode::Image => self.paste_as_image(clipboard, buffer),
        }
    }

    /// Reads the clipboard, then runs [`Self::paste`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Clipboard`] if the clipboard cannot be read, plus
    /// the errors of [`Self::paste`].
    pub fn paste_from<C, B>(
        &self,
        mode: PasteMode,
        clipboard: &mut C,
        buffer: &mut B,
    ) -> Result<PasteOutcome, AppError>
    where
        C: ClipboardSource + ?Sized,
        B: TextBuffer + ?Sized,
    {
        let text = clipboard.read_text()?;
        self.paste(mode, text.as_deref(), buffer)
    }

    fn explicit_paste<B: TextBuffer + ?Sized>(
        &self,
        clipboard: Option<&str>,
        buffer: &mut B,
        wrap: fn(&str, &str) -> String,
    ) -> Result<PasteOutcome, AppError> {
        let text = non_empty(clipboard).ok_or(AppError::ClipboardEmpty)?;

        let url = canonicalize_url(text, self.settings.convert_video_urls);
        let classification = classify_text(text);
        let context = classify_caret_context(buffer, buffer.cursor());
        debug!(kind = ?classification.kind(), ?context, "explicit paste");

        let output = if classification.is_already_linked_markdown {
            text.to_string()
        } else if context.suppresses_link() {
            url
        } else {
            wrap(&buffer.selection(), &url)
        };

        Ok(Self::insert(buffer, output))
    }

    fn insert<B: TextBuffer + ?Sized>(buffer: &mut B, text: String) -> PasteOutcome {
        buffer.replace_selection(&text);
        PasteOutcome::Inserted(text)
    }
}
