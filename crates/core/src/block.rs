//! Block node definitions for the constrained markdown subset.

use serde::Serialize;

/// One structural unit of a scanned document.
///
/// Blocks appear in the order their source lines appear; a block carries no
/// identity beyond its position in the sequence. Text fields hold raw source
/// text with block markers stripped; inline span formatting is applied by the
/// rendering layer, never stored here.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    /// A `##` or `###` heading.
    Heading {
        /// Heading level (2 or 3).
        level: u8,
        /// Heading text with the marker stripped.
        text: String,
    },

    /// A plain text line.
    Paragraph {
        /// The full source line.
        text: String,
    },

    /// A run of `-`/`*` or `1.` list items.
    List {
        /// Whether the list was opened by a numbered marker.
        ordered: bool,
        /// Item texts with their markers stripped, in source order.
        items: Vec<String>,
    },

    /// A pipe-delimited table.
    ///
    /// Cell text is rendered as plain text downstream; inline spans are not
    /// applied inside tables.
    Table {
        /// Header cell texts from the first pipe line.
        header: Vec<String>,
        /// Data rows; row widths are not validated against the header.
        rows: Vec<Vec<String>>,
    },

    /// A horizontal rule (`---` on its own line).
    Rule,
}

impl Block {
    /// Creates a heading block.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    /// Creates a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Returns true for the accumulating block kinds (list, table).
    ///
    /// Accumulating blocks are the only ones that can still be open at end of
    /// document and need a final flush.
    pub fn is_accumulating(&self) -> bool {
        matches!(self, Block::List { .. } | Block::Table { .. })
    }
}
