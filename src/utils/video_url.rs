//! YouTube URL canonicalization.
//!
//! Shorts, `youtu.be` short links, watch pages and embeds all point at the
//! same video. They are rewritten to one watch URL so that the host's embed
//! renderer sees a single shape.
//!
//! # Rewrite Rules
//!
//! Rules are tried in order and the first match wins:
//!
//! 1. **Shorts**: `http(s)://[www.|m.]youtube.com/shorts/<id>[?query]`
//! 2. **Short link**: `http(s)://[www.]youtu.be/<id>[?query]`
//! 3. **Watch**: `http(s)://[www.|m.]youtube.com/watch?v=<id>[&query]`
//! 4. **Embed**: `http(s)://[www.]youtube.com/embed/<id>[?query]`
//!
//! Output is always `https://www.youtube.com/watch?v=<id>` followed by the
//! query remainder. A `?`-led remainder becomes `&`-led so the result stays a
//! single query string (`?v=id&t=30`, never `?v=id?t=30`). Anything that
//! matches no rule comes back unchanged.

use regex::Regex;
use std::sync::LazyLock;

/// Prefix of every canonical URL; the video id follows directly.
pub const CANONICAL_WATCH_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// The recognized URL shapes, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoUrlShape {
    Shorts,
    ShortLink,
    Watch,
    Embed,
}

struct Rule {
    shape: VideoUrlShape,
    pattern: Regex,
}

/// Ordered rewrite table. Each pattern captures the id and an optional remainder.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    [
        (
            VideoUrlShape::Shorts,
            r"^https?://(?:www\.|m\.)?youtube\.com/shorts/([a-zA-Z0-9_-]+)(\?.*)?$",
        ),
        (
            VideoUrlShape::ShortLink,
            r"^https?://(?:www\.)?youtu\.be/([a-zA-Z0-9_-]+)(\?.*)?$",
        ),
        (
            VideoUrlShape::Watch,
            r"^https?://(?:www\.|m\.)?youtube\.com/watch\?v=([a-zA-Z0-9_-]+)(&.*)?$",
        ),
        (
            VideoUrlShape::Embed,
            r"^https?://(?:www\.)?youtube\.com/embed/([a-zA-Z0-9_-]+)(\?.*)?$",
        ),
    ]
    .into_iter()
    .map(|(shape, pattern)| Rule {
        shape,
        pattern: Regex::new(pattern).unwrap(),
    })
    .collect()
});

/// A recognized video URL broken into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoUrlMatch<'a> {
    pub shape: VideoUrlShape,
    pub video_id: &'a str,
    /// Raw remainder as captured: `?...` or `&...`, empty if absent.
    pub remainder: &'a str,
}

impl VideoUrlMatch<'_> {
    /// Renders the canonical watch URL for this match.
    pub fn to_canonical(&self) -> String {
        format!(
            "{CANONICAL_WATCH_PREFIX}{}{}",
            self.video_id,
            continuation(self.remainder)
        )
    }
}

/// Turns a captured remainder into an `&`-joined continuation of `?v=<id>`.
///
/// `&t=1` stays as is, `?t=1` becomes `&t=1`, and a lone `?` is dropped.
fn continuation(remainder: &str) -> String {
    match remainder.strip_prefix('?') {
        Some("") => String::new(),
        Some(params) => format!("&{params}"),
        None => remainder.to_string(),
    }
}

/// Matches `url` against the rule table and returns the first hit.
pub fn match_video_url(url: &str) -> Option<VideoUrlMatch<'_>> {
    RULES.iter().find_map(|rule| {
        let caps = rule.pattern.captures(url)?;
        Some(VideoUrlMatch {
            shape: rule.shape,
            video_id: caps.get(1)?.as_str(),
            remainder: caps.get(2).map_or("", |m| m.as_str()),
        })
    })
}

/// Rewrites a recognized video URL to its canonical watch form.
///
/// When `enabled` is false, or nothing matches, returns `url` unchanged.
/// Applying it to its own output returns the same string.
///
/// # Examples
///
/// ```
/// use paste_linker::utils::video_url::canonicalize;
///
/// assert_eq!(
///     canonicalize("https://youtu.be/dQw4w9WgXcQ?t=30", true),
///     "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=30"
/// );
/// assert_eq!(canonicalize("https://example.com", true), "https://example.com");
/// ```
pub fn canonicalize(url: &str, enabled: bool) -> String {
    if !enabled {
        return url.to_string();
    }

    match match_video_url(url) {
        Some(found) => {
            let canonical = found.to_canonical();
            tracing::debug!(shape = ?found.shape, video_id = found.video_id, "rewrote video url");
            canonical
        }
        None => url.to_string(),
    }
}
