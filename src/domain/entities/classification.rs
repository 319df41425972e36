//! Classification results for clipboard text and caret surroundings.

use serde::Serialize;

/// The single shape a clipboard payload is treated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    PlainText,
    BareUrl,
    ImageUrl,
    AlreadyLinkedUrl,
}

impl Classification {
    /// Short label used in CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "plain_text",
            Self::BareUrl => "bare_url",
            Self::ImageUrl => "image_url",
            Self::AlreadyLinkedUrl => "already_linked_url",
        }
    }
}

/// Independent predicate results for a piece of clipboard text.
///
/// The flags are not exclusive: an image URL is both `is_url` and `is_image`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextClassification {
    pub is_url: bool,
    pub is_image: bool,
    pub is_already_linked_markdown: bool,
}

impl TextClassification {
    /// Collapses the flags into one [`Classification`].
    ///
    /// Precedence: already linked, image URL, bare URL, plain text. A string
    /// that merely ends in an image extension without being a URL is plain text.
    pub fn kind(&self) -> Classification {
        if self.is_already_linked_markdown {
            Classification::AlreadyLinkedUrl
        } else if self.is_url && self.is_image {
            Classification::ImageUrl
        } else if self.is_url {
            Classification::BareUrl
        } else {
            Classification::PlainText
        }
    }

    /// Whether wrapping this text into a `[label](url)` link makes sense.
    pub fn is_linkable(&self) -> bool {
        self.kind() == Classification::BareUrl
    }
}

/// Facts about the characters immediately before the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CaretContext {
    /// Caret follows `](`, i.e. sits in an open markdown link target.
    pub in_link_target: bool,
    /// Caret follows `"` or `'`, e.g. inside an HTML `href` attribute.
    pub in_quoted_attribute: bool,
}

impl CaretContext {
    /// Returns true when inserting markdown link syntax would be wrong here.
    pub fn suppresses_link(&self) -> bool {
        self.in_link_target || self.in_quoted_attribute
    }
}
