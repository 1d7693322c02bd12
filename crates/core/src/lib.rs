#![deny(missing_docs)]
//! litemd core: block scanning, inline span formatting, and article frontmatter.

/// Block node definitions.
pub mod block;
/// YAML frontmatter extraction helpers.
pub mod frontmatter;
/// Inline span formatting (bold/italic/link/code substitution).
pub mod inline;
/// Single-pass block scanner.
pub mod scanner;

pub use block::Block;
pub use frontmatter::{ArticleExtraction, ArticleMeta, FrontmatterError, extract_frontmatter};
pub use inline::{format_inline, strip_spans};
pub use scanner::scan_blocks;
