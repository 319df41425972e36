//! Paste commands and their results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which paste command the host invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasteMode {
    /// The editor's ordinary paste (Ctrl + V).
    #[default]
    Default,
    /// Explicit "paste as link" command.
    Link,
    /// Explicit "paste as image link" command.
    Image,
}

impl FromStr for PasteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "link" => Ok(Self::Link),
            "image" => Ok(Self::Image),
            other => Err(format!(
                "unknown paste mode '{other}' (expected default, link or image)"
            )),
        }
    }
}

impl fmt::Display for PasteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::Link => "link",
            Self::Image => "image",
        };
        f.write_str(name)
    }
}

/// What a paste command did to the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// The selection was replaced with this text.
    Inserted(String),
    /// Nothing was written; the host should run its own paste.
    Passthrough,
}

impl PasteOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted(_))
    }

    /// The inserted text, if any.
    pub fn inserted(&self) -> Option<&str> {
        match self {
            Self::Inserted(text) => Some(text),
            Self::Passthrough => None,
        }
    }
}

/// Builds `[label](url)`.
pub fn markdown_link(label: &str, url: &str) -> String {
    format!("[{label}]({url})")
}

/// Builds `![alt](url)`.
pub fn markdown_image(alt: &str, url: &str) -> String {
    format!("![{alt}]({url})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paste_mode_parse() {
        assert_eq!("link".parse::<PasteMode>().unwrap(), PasteMode::Link);
        assert_eq!("IMAGE".parse::<PasteMode>().unwrap(), PasteMode::Image);
        assert_eq!("default".parse::<PasteMode>().unwrap(), PasteMode::Default);
        assert!("html".parse::<PasteMode>().is_err());
    }

    #[test]
    fn test_paste_mode_display_round_trips() {
        for mode in [PasteMode::Default, PasteMode::Link, PasteMode::Image] {
            assert_eq!(mode.to_string().parse::<PasteMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_outcome_accessors() {
        let inserted = PasteOutcome::Inserted("[a](b)".to_string());
        assert!(inserted.is_inserted());
        assert_eq!(inserted.inserted(), Some("[a](b)"));

        assert!(!PasteOutcome::Passthrough.is_inserted());
        assert_eq!(PasteOutcome::Passthrough.inserted(), None);
    }

    #[test]
    fn test_markdown_builders() {
        assert_eq!(markdown_link("", "https://a.io"), "[](https://a.io)");
        assert_eq!(markdown_link("docs", "https://a.io"), "[docs](https://a.io)");
        assert_eq!(markdown_image("", "https://a.io/x.png"), "![](https://a.io/x.png)");
    }
}
