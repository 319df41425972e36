//! Shape classification of clipboard text.
//!
//! Every check is anchored: the whole payload must match, so a sentence that
//! happens to contain a URL is still plain text.

use crate::domain::entities::TextClassification;
use regex::Regex;
use std::sync::LazyLock;

/// `http://` or `https://` at the very start.
static SCHEME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)^https?://").unwrap());

/// Host label plus dot plus at least two non-space characters (TLD, path, query).
///
/// The label is either alphanumerics bounding interior hyphens, or a plain
/// alphanumeric run. Labels are ASCII-only, so case folding must not admit
/// look-alikes such as U+212A KELVIN SIGN. The tail may be any Unicode
/// non-space except U+FEFF.
static HOST_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?i-u:[a-z0-9][a-z0-9-]+[a-z0-9])\.[^\s\x{FEFF}]{2,}|(?i-u:[a-z0-9]+)\.[^\s\x{FEFF}]{2,})$",
    )
    .unwrap()
});

static IMAGE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)\.(?:gif|jpe?g|tiff?|png|webp|bmp|tga|psd|ai)$").unwrap()
});

/// `[label](target)` with a bracket-free label. The target is checked with [`is_url`].
static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[[^\[\]]*\]\((.+)\)$").unwrap());

const WWW: &str = "www";
const WWW_DOT: &str = "www.";

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

/// Returns true if the entire string is an HTTP(S) URL or a bare `www.` host.
///
/// After the scheme, a host that starts with `www` must start with `www.`:
/// `http://wwwexample.com` is rejected while `http://www.example.com` is not.
///
/// # Examples
///
/// ```
/// use paste_linker::utils::classifier::is_url;
///
/// assert!(is_url("https://example.com/path?q=1"));
/// assert!(is_url("www.example.org"));
/// assert!(!is_url("see https://example.com"));
/// ```
pub fn is_url(text: &str) -> bool {
    if let Some(scheme) = SCHEME_PREFIX.find(text) {
        let rest = &text[scheme.end()..];
        let host = match strip_prefix_ignore_case(rest, WWW_DOT) {
            Some(host) => host,
            None if strip_prefix_ignore_case(rest, WWW).is_some() => return false,
            None => rest,
        };
        return HOST_SHAPE.is_match(host);
    }

    strip_prefix_ignore_case(text, WWW_DOT).is_some_and(|host| HOST_SHAPE.is_match(host))
}

/// Returns true if the string ends in a known image file extension.
pub fn is_image(text: &str) -> bool {
    IMAGE_EXTENSION.is_match(text)
}

/// Returns true if the entire string is already a markdown link to a URL.
pub fn is_already_linked_url(text: &str) -> bool {
    MARKDOWN_LINK
        .captures(text)
        .and_then(|caps| caps.get(1))
        .is_some_and(|target| is_url(target.as_str()))
}

/// Runs every text predicate once.
pub fn classify_text(text: &str) -> TextClassification {
    TextClassification {
        is_url: is_url(text),
        is_image: is_image(text),
        is_already_linked_markdown: is_already_linked_url(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Classification;

    #[test]
    fn test_is_url_https() {
        assert!(is_url("https://example.com"));
        assert!(is_url("https://example.com/path/to/page?x=1&y=2"));
    }

    #[test]
    fn test_is_url_http_with_www() {
        assert!(is_url("http://www.example.com"));
    }

    #[test]
    fn test_is_url_bare_www() {
        assert!(is_url("www.example.com"));
        assert!(is_url("www.my-site.co.uk/page"));
    }

    #[test]
    fn test_is_url_case_insensitive() {
        assert!(is_url("HTTPS://EXAMPLE.COM"));
        assert!(is_url("WWW.Example.com"));
        assert!(is_url("Http://Www.Example.com"));
    }

    #[test]
    fn test_is_url_hyphenated_host() {
        assert!(is_url("https://my-cool-site.io"));
    }

    #[test]
    fn test_is_url_single_char_host() {
        assert!(is_url("https://x.io"));
    }

    #[test]
    fn test_is_url_rejects_www_without_dot() {
        assert!(!is_url("http://wwwexample.com"));
        assert!(!is_url("https://www"));
    }

    #[test]
    fn test_is_url_rejects_leading_or_trailing_hyphen() {
        assert!(!is_url("https://-example.com"));
        assert!(!is_url("https://example-.com"));
    }

    #[test]
    fn test_is_url_requires_two_chars_after_dot() {
        assert!(!is_url("https://example.c"));
        assert!(is_url("https://example.co"));
    }

    #[test]
    fn test_is_url_rejects_surrounding_text() {
        assert!(!is_url("see https://example.com"));
        assert!(!is_url("https://example.com and more"));
        assert!(!is_url(" https://example.com"));
        assert!(!is_url("https://example.com\n"));
    }

    #[test]
    fn test_is_url_rejects_plain_text() {
        assert!(!is_url("not a url at all"));
        assert!(!is_url(""));
        assert!(!is_url("example.com"));
    }

    #[test]
    fn test_is_url_rejects_other_schemes() {
        assert!(!is_url("ftp://example.com"));
        assert!(!is_url("javascript:alert(1)"));
        assert!(!is_url("mailto:me@example.com"));
    }

    #[test]
    fn test_is_url_non_ascii_prefix_does_not_panic() {
        assert!(!is_url("ü"));
        assert!(!is_url("wwü.example.com"));
        assert!(!is_url("https://ww€.example.com"));
    }

    #[test]
    fn test_is_image_extensions() {
        for ext in [
            "gif", "jpg", "jpeg", "tif", "tiff", "png", "webp", "bmp", "tga", "psd", "ai",
        ] {
            let name = format!("https://example.com/file.{ext}");
            assert!(is_image(&name), "{name} should be an image");
        }
    }

    #[test]
    fn test_is_image_case_insensitive() {
        assert!(is_image("https://example.com/PHOTO.PNG"));
        assert!(is_image("picture.JpEg"));
    }

    #[test]
    fn test_is_image_rejects_other_extensions() {
        assert!(!is_image("https://example.com/file.pdf"));
        assert!(!is_image("https://example.com/png"));
        assert!(!is_image("https://example.com/photo.png?size=large"));
        assert!(!is_image("mail.aix"));
    }

    #[test]
    fn test_is_already_linked_url() {
        assert!(is_already_linked_url("[existing](https://example.com)"));
        assert!(is_already_linked_url("[](www.example.com)"));
        assert!(is_already_linked_url("[a (b) c](https://example.com/x)"));
    }

    #[test]
    fn test_is_already_linked_url_rejects_brackets_in_label() {
        assert!(!is_already_linked_url("[a [b] c](https://example.com)"));
    }

    #[test]
    fn test_is_already_linked_url_rejects_non_url_target() {
        assert!(!is_already_linked_url("[label](not a url)"));
        assert!(!is_already_linked_url("[label](#anchor)"));
    }

    #[test]
    fn test_is_already_linked_url_is_anchored() {
        assert!(!is_already_linked_url("see [x](https://example.com)"));
        assert!(!is_already_linked_url("[x](https://example.com) trailing"));
        assert!(!is_already_linked_url("https://example.com"));
    }

    #[test]
    fn test_classify_text_image_url() {
        let c = classify_text("https://example.com/photo.png");
        assert!(c.is_url);
        assert!(c.is_image);
        assert!(!c.is_already_linked_markdown);
        assert_eq!(c.kind(), Classification::ImageUrl);
    }

    #[test]
    fn test_classify_text_kinds() {
        assert_eq!(
            classify_text("https://example.com").kind(),
            Classification::BareUrl
        );
        assert_eq!(
            classify_text("[existing](https://example.com)").kind(),
            Classification::AlreadyLinkedUrl
        );
        assert_eq!(
            classify_text("not a url at all").kind(),
            Classification::PlainText
        );
    }

    #[test]
    fn test_is_url_rejects_unicode_case_folded_host() {
        assert!(!is_url("https://\u{212A}ey.com"));
        assert!(!is_url("https://\u{17F}ite.com"));
        assert!(!is_url("httpſ://example.com"));
        assert!(!is_already_linked_url("[x](https://\u{212A}ey.com)"));
    }

    #[test]
    fn test_is_url_rejects_trailing_byte_order_mark() {
        assert!(!is_url("https://example.com\u{FEFF}"));
        assert!(!is_url("www.example.com\u{FEFF}"));
    }

    #[test]
    fn test_is_url_allows_non_ascii_path() {
        assert!(is_url("https://example.com/café"));
        assert!(is_url("https://ru.wikipedia.org/wiki/Ржавчина"));
    }

    #[test]
    fn test_is_image_extension_is_ascii_only() {
        assert!(is_image("photo.PSD"));
        assert!(!is_image("photo.pſd"));
    }
}
