//! Inline span formatting for block text.
//!
//! Inline spans are never materialized as a tree. Formatting is a fixed
//! sequence of non-greedy, non-recursive pattern substitutions over the whole
//! string: bold, then italic, then link, then code. Running bold before
//! italic is what keeps a literal `**` from being mis-split; a bold span
//! containing a link works only because each pattern runs independently, and
//! a link label containing a literal `]` does not work at all. Authored
//! content conforms to these exact quirks, so the order and the patterns are
//! a contract, not an implementation detail.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Formats a raw text span into HTML with inline spans substituted.
///
/// The text is HTML-escaped first, then the four span patterns are applied
/// in order. Unmatched delimiters pass through as literal text.
pub fn format_inline(text: &str) -> String {
    let escaped = html_escape::encode_text(text);
    let bold = BOLD.replace_all(&escaped, "<strong>$1</strong>");
    let italic = ITALIC.replace_all(&bold, "<em>$1</em>");
    let linked = LINK.replace_all(&italic, |caps: &Captures| {
        // `&`, `<`, and `>` are already escaped by the text pass; the href
        // attribute additionally needs its quotes neutralized.
        let href = caps[2].replace('"', "&quot;");
        format!("<a href=\"{}\">{}</a>", href, &caps[1])
    });
    CODE.replace_all(&linked, "<code>$1</code>").into_owned()
}

/// Strips the four span markers, keeping only visible text.
///
/// Links reduce to their label. Used for heading slugs and table of contents
/// text, where markup would leak into anchors.
pub fn strip_spans(text: &str) -> String {
    let bold = BOLD.replace_all(text, "$1");
    let italic = ITALIC.replace_all(&bold, "$1");
    let linked = LINK.replace_all(&italic, "$1");
    CODE.replace_all(&linked, "$1").into_owned()
}
