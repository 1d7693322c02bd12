#![deny(missing_docs)]
//! litemd HTML engine: block rendering, heading slugs, and article assembly.

/// Block-to-HTML rendering.
pub mod render;
/// Heading slug generation.
pub mod slug;

pub use render::{HeadingEntry, HtmlOutput, Options, to_html};
pub use slug::Slugger;

use litemd_core::{ArticleMeta, FrontmatterError, extract_frontmatter, scan_blocks};
use serde::Serialize;

/// A fully rendered article: metadata, HTML body, and heading outline.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ArticleOutput {
    /// Frontmatter metadata (defaults when the article has none).
    pub meta: ArticleMeta,
    /// Rendered body HTML.
    pub html: String,
    /// Headings in document order.
    pub headings: Vec<HeadingEntry>,
}

/// Renders a complete authored article.
///
/// Extracts frontmatter, scans the remaining body into blocks, and renders
/// them to HTML. Only frontmatter extraction can fail; body rendering is
/// total.
pub fn render_article(input: &str, options: &Options) -> Result<ArticleOutput, FrontmatterError> {
    let extraction = extract_frontmatter(input)?;
    let blocks = scan_blocks(&input[extraction.body_start..]);
    let rendered = to_html(&blocks, options);
    Ok(ArticleOutput {
        meta: extraction.meta,
        html: rendered.html,
        headings: rendered.headings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_article_with_frontmatter() {
        let input = "---\ntitle: Careers\n---\n## Open Roles\n- Rust engineer";
        let output = render_article(input, &Options::default()).unwrap();
        assert_eq!(output.meta.title.as_deref(), Some("Careers"));
        assert_eq!(
            output.html,
            "<h2 id=\"open-roles\">Open Roles</h2><ul><li>Rust engineer</li></ul>"
        );
        assert_eq!(output.headings[0].slug, "open-roles");
    }

    #[test]
    fn article_without_frontmatter_renders_whole_input() {
        let output = render_article("plain text", &Options::default()).unwrap();
        assert_eq!(output.meta, ArticleMeta::default());
        assert_eq!(output.html, "<p>plain text</p>");
    }

    #[test]
    fn frontmatter_fence_does_not_leak_a_rule() {
        let input = "---\ntitle: T\n---\nbody";
        let output = render_article(input, &Options::default()).unwrap();
        assert!(!output.html.contains("<hr"));
    }

    #[test]
    fn broken_frontmatter_propagates() {
        assert!(render_article("---\ntitle: T\n", &Options::default()).is_err());
    }
}
