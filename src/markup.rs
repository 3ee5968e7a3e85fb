//! Conversion of feed HTML bodies into org outline markup: an ordered
//! pipeline of total string rewrites, each independently testable.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ANCHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)<a\s+href="([^"]*)"[^>]*>(.*?)</a>"#).unwrap());

static BLOCKQUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<blockquote>(.*?)</blockquote>").unwrap());

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// Full translation pipeline, in fixed order: bracket strip, anchor
/// conversion, blockquote conversion, tag strip, length cap.
pub fn translate(html: &str, max_chars: usize) -> String {
    let text = strip_brackets(html);
    let text = convert_anchors(&text);
    let text = convert_blockquotes(&text);
    let text = strip_tags(&text);
    truncate(&text, max_chars)
}

/// Source brackets would collide with org link syntax.
pub fn strip_brackets(text: &str) -> String {
    text.chars().filter(|c| *c != '[' && *c != ']').collect()
}

/// `<a href="URL">TEXT</a>` -> `[[URL][TEXT]]`.
pub fn convert_anchors(text: &str) -> String {
    ANCHOR.replace_all(text, "[[${1}][${2}]]").into_owned()
}

/// `<blockquote>BODY</blockquote>` -> an org quote block around BODY.
pub fn convert_blockquotes(text: &str) -> String {
    BLOCKQUOTE
        .replace_all(text, "#+BEGIN_QUOTE\n${1}\n#+END_QUOTE")
        .into_owned()
}

/// Delete every remaining tag. Exactly two forms survive: tags opening with
/// the literal `<a ` and the exact `</a>` closing tag.
pub fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, |caps: &Captures| {
        let tag = &caps[0];
        if tag.starts_with("<a ") || tag == "</a>" {
            tag.to_string()
        } else {
            String::new()
        }
    })
    .into_owned()
}

/// Cap to at most `max_chars` characters, on a char boundary.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
