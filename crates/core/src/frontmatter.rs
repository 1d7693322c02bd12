//! YAML frontmatter extraction for authored articles.
//!
//! Articles carry their metadata (title, description, date, tags) in a
//! leading `---` fenced YAML block. The fence shares its literal with the
//! horizontal-rule marker, so frontmatter must be stripped before the block
//! scanner ever sees the document.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use thiserror::Error;

/// Typed article metadata parsed from the frontmatter block.
///
/// Unknown keys are preserved in `extra` rather than rejected; authored
/// content occasionally carries ad-hoc fields the pipeline passes through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleMeta {
    /// Article title.
    #[serde(default)]
    pub title: Option<String>,
    /// Short description for listings.
    #[serde(default)]
    pub description: Option<String>,
    /// Publication date as authored (no date parsing is performed).
    #[serde(default)]
    pub date: Option<String>,
    /// Topic tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Any remaining frontmatter keys.
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

/// Result of splitting an article into metadata and body.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleExtraction {
    /// Parsed metadata; defaults when no frontmatter block is present.
    pub meta: ArticleMeta,
    /// Byte offset where the markdown body begins.
    pub body_start: usize,
}

/// Errors emitted while extracting frontmatter.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// Opening fence without a closing `---`.
    #[error("unterminated frontmatter block: expected closing '---'")]
    Unterminated,
    /// YAML failed to parse or was not a mapping at the top level.
    #[error("frontmatter parse error: {0}")]
    Parse(String),
}

/// Extracts YAML frontmatter from the start of a document.
///
/// A UTF-8 BOM and leading blank lines are tolerated before the opening
/// fence. A document without frontmatter yields default metadata and
/// `body_start = 0`.
pub fn extract_frontmatter(input: &str) -> Result<ArticleExtraction, FrontmatterError> {
    let (doc, bom_len) = strip_bom(input);

    let Some((yaml, body_offset)) = find_fenced_block(doc)? else {
        return Ok(ArticleExtraction {
            meta: ArticleMeta::default(),
            body_start: 0,
        });
    };

    let meta = if yaml.trim().is_empty() {
        ArticleMeta::default()
    } else {
        serde_yaml::from_str(yaml).map_err(|err| FrontmatterError::Parse(err.to_string()))?
    };

    Ok(ArticleExtraction {
        meta,
        body_start: bom_len + body_offset,
    })
}

/// Locates the fenced YAML block, returning its contents and the byte
/// offset of the first body line.
fn find_fenced_block(doc: &str) -> Result<Option<(&str, usize)>, FrontmatterError> {
    let mut lines = line_offsets(doc);

    // The first non-blank line must be the opening fence.
    let yaml_start = loop {
        match lines.next() {
            Some((line, _, _)) if line.trim().is_empty() => continue,
            Some((line, _, end)) if is_fence(line) => break end,
            _ => return Ok(None),
        }
    };

    for (line, start, end) in lines {
        if is_fence(line) {
            let yaml = doc[yaml_start..start].trim_end_matches(['\r', '\n']);
            return Ok(Some((yaml, end)));
        }
    }
    Err(FrontmatterError::Unterminated)
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Iterates lines as `(text, start_offset, offset_past_newline)`.
fn line_offsets(doc: &str) -> impl Iterator<Item = (&str, usize, usize)> {
    let mut cursor = 0usize;
    std::iter::from_fn(move || {
        if cursor >= doc.len() {
            return None;
        }
        let start = cursor;
        let rest = &doc[start..];
        let (line, next) = match rest.find('\n') {
            Some(pos) => (&rest[..pos], start + pos + 1),
            None => (rest, doc.len()),
        };
        cursor = next;
        Some((line.strip_suffix('\r').unwrap_or(line), start, next))
    })
}

fn strip_bom(input: &str) -> (&str, usize) {
    match input.strip_prefix('\u{feff}') {
        Some(stripped) => (stripped, '\u{feff}'.len_utf8()),
        None => (input, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_typed_metadata() {
        let input = "---\ntitle: Hello\ndate: 2024-03-01\ntags:\n  - rust\n  - web\n---\nbody";
        let extraction = extract_frontmatter(input).unwrap();
        assert_eq!(extraction.meta.title.as_deref(), Some("Hello"));
        assert_eq!(extraction.meta.date.as_deref(), Some("2024-03-01"));
        assert_eq!(extraction.meta.tags, vec!["rust", "web"]);
        assert_eq!(&input[extraction.body_start..], "body");
    }

    #[test]
    fn unknown_keys_land_in_extra() {
        let input = "---\ntitle: T\nhero_image: /img/a.png\n---\n";
        let extraction = extract_frontmatter(input).unwrap();
        assert_eq!(
            extraction.meta.extra.get("hero_image"),
            Some(&JsonValue::String("/img/a.png".into()))
        );
    }

    #[test]
    fn missing_frontmatter_yields_defaults() {
        let extraction = extract_frontmatter("## Just a doc").unwrap();
        assert_eq!(extraction.meta, ArticleMeta::default());
        assert_eq!(extraction.body_start, 0);
    }

    #[test]
    fn empty_block_yields_defaults() {
        let input = "---\n---\nbody";
        let extraction = extract_frontmatter(input).unwrap();
        assert_eq!(extraction.meta, ArticleMeta::default());
        assert_eq!(&input[extraction.body_start..], "body");
    }

    #[test]
    fn unterminated_fence_is_an_error() {
        let err = extract_frontmatter("---\ntitle: T\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Unterminated));
    }

    #[test]
    fn non_mapping_root_is_a_parse_error() {
        let err = extract_frontmatter("---\n- just\n- a list\n---\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Parse(_)));
    }

    #[test]
    fn leading_blank_lines_and_bom_are_tolerated() {
        let input = "\u{feff}\n\n---\ntitle: T\n---\nbody";
        let extraction = extract_frontmatter(input).unwrap();
        assert_eq!(extraction.meta.title.as_deref(), Some("T"));
        assert_eq!(&input[extraction.body_start..], "body");
    }

    #[test]
    fn crlf_documents_are_handled() {
        let input = "---\r\ntitle: T\r\n---\r\nbody";
        let extraction = extract_frontmatter(input).unwrap();
        assert_eq!(extraction.meta.title.as_deref(), Some("T"));
        assert_eq!(&input[extraction.body_start..], "body");
    }
}
