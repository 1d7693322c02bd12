//! HTML emission for scanned block sequences.
//!
//! Headings, paragraphs, and list items go through inline span formatting;
//! table cells render as plain escaped text. Malformed input never errors:
//! whatever the scanner produced is rendered best-effort.

use crate::slug::Slugger;
use litemd_core::{Block, format_inline, strip_spans};
use serde::{Deserialize, Serialize};

/// Rendering options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Whether headings receive slug-based `id` attributes.
    #[serde(default = "default_heading_ids")]
    pub enable_heading_ids: bool,
    /// Whether heading content is wrapped in a self-link anchor.
    /// Requires heading ids to be useful, but is honored independently.
    #[serde(default)]
    pub enable_heading_autolinks: bool,
}

fn default_heading_ids() -> bool {
    true
}

impl Default for Options {
    fn default() -> Self {
        Self {
            enable_heading_ids: true,
            enable_heading_autolinks: false,
        }
    }
}

/// Heading metadata collected during rendering, for outlines and anchors.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct HeadingEntry {
    /// Heading level (2 or 3).
    pub level: u8,
    /// Slugified identifier.
    pub slug: String,
    /// Visible heading text with span markers stripped.
    pub text: String,
}

/// Result of rendering a block sequence.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct HtmlOutput {
    /// The rendered HTML.
    pub html: String,
    /// Headings in document order.
    pub headings: Vec<HeadingEntry>,
}

/// Renders a block sequence to HTML.
pub fn to_html(blocks: &[Block], options: &Options) -> HtmlOutput {
    let mut renderer = Renderer::new(options);
    for block in blocks {
        renderer.block(block);
    }
    renderer.finish()
}

struct Renderer<'a> {
    out: String,
    headings: Vec<HeadingEntry>,
    slugger: Slugger,
    options: &'a Options,
}

impl<'a> Renderer<'a> {
    fn new(options: &'a Options) -> Self {
        Self {
            out: String::with_capacity(1024),
            headings: Vec::new(),
            slugger: Slugger::new(),
            options,
        }
    }

    fn push_raw(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn push_text(&mut self, s: &str) {
        self.out.push_str(&html_escape::encode_text(s));
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, text } => self.heading(*level, text),
            Block::Paragraph { text } => {
                self.push_raw("<p>");
                self.push_raw(&format_inline(text));
                self.push_raw("</p>");
            }
            Block::List { ordered, items } => self.list(*ordered, items),
            Block::Table { header, rows } => self.table(header, rows),
            Block::Rule => self.push_raw("<hr />"),
        }
    }

    fn heading(&mut self, level: u8, text: &str) {
        let visible = strip_spans(text);
        let slug = self.slugger.next_slug(&visible);
        self.headings.push(HeadingEntry {
            level,
            slug: slug.clone(),
            text: visible,
        });

        if self.options.enable_heading_ids {
            self.push_raw(&format!("<h{} id=\"{}\">", level, slug));
        } else {
            self.push_raw(&format!("<h{}>", level));
        }

        if self.options.enable_heading_autolinks {
            self.push_raw("<a href=\"#");
            self.push_raw(&slug);
            self.push_raw("\">");
        }

        self.push_raw(&format_inline(text));

        if self.options.enable_heading_autolinks {
            self.push_raw("</a>");
        }
        self.push_raw(&format!("</h{}>", level));
    }

    fn list(&mut self, ordered: bool, items: &[String]) {
        let tag = if ordered { "ol" } else { "ul" };
        self.push_raw(&format!("<{}>", tag));
        for item in items {
            self.push_raw("<li>");
            self.push_raw(&format_inline(item));
            self.push_raw("</li>");
        }
        self.push_raw(&format!("</{}>", tag));
    }

    fn table(&mut self, header: &[String], rows: &[Vec<String>]) {
        self.push_raw("<table><thead><tr>");
        for cell in header {
            self.push_raw("<th>");
            self.push_text(cell);
            self.push_raw("</th>");
        }
        self.push_raw("</tr></thead>");

        if !rows.is_empty() {
            self.push_raw("<tbody>");
            for row in rows {
                if row.len() != header.len() {
                    log::debug!(
                        "table row has {} cells, header has {}; rendering as-is",
                        row.len(),
                        header.len()
                    );
                }
                self.push_raw("<tr>");
                for cell in row {
                    self.push_raw("<td>");
                    self.push_text(cell);
                    self.push_raw("</td>");
                }
                self.push_raw("</tr>");
            }
            self.push_raw("</tbody>");
        }

        self.push_raw("</table>");
    }

    fn finish(self) -> HtmlOutput {
        HtmlOutput {
            html: self.out,
            headings: self.headings,
        }
    }
}
