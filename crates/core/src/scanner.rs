//! Single-pass line scanner for the constrained markdown subset.
//!
//! The scanner walks a document line by line and emits [`Block`] nodes in
//! source order. Only lists and tables accumulate across lines; everything
//! else is emitted immediately. The subset is private to the content
//! pipeline and intentionally quirky: the line after a table header is
//! consumed blind as the separator row, and blank lines separate blocks
//! without closing an open list or table.

use crate::block::Block;
use std::mem;

/// Accumulator state carried between lines.
#[derive(Debug, Clone, PartialEq, Default)]
enum ScanState {
    /// No list or table is open.
    #[default]
    Idle,
    /// An open list run.
    List { ordered: bool, items: Vec<String> },
    /// An open table. `separator_pending` is set right after the header row
    /// and makes the next line be consumed without inspection.
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
        separator_pending: bool,
    },
}

/// Scans a document into an ordered sequence of blocks.
///
/// Total over all inputs: malformed constructs degrade to the nearest
/// supported block (usually a paragraph) and never error. The output is a
/// pure function of the input string.
pub fn scan_blocks(input: &str) -> Vec<Block> {
    let mut scanner = Scanner::default();
    for line in input.lines() {
        scanner.line(line);
    }
    scanner.finish()
}

#[derive(Default)]
struct Scanner {
    blocks: Vec<Block>,
    state: ScanState,
}

impl Scanner {
    fn line(&mut self, line: &str) {
        // A freshly opened table owns the following line outright: it is the
        // separator row and is dropped whatever it contains. A header row
        // followed directly by a data row therefore loses that row; authored
        // content relies on the skip, so it stays.
        if let ScanState::Table {
            separator_pending, ..
        } = &mut self.state
            && *separator_pending
        {
            *separator_pending = false;
            return;
        }

        // Blank lines separate blocks but never close an open list or table.
        if line.trim().is_empty() {
            return;
        }

        if line.starts_with('|') {
            self.flush_list();
            match &mut self.state {
                ScanState::Table { rows, .. } => {
                    // Re-skip any stray separator row inside the table body.
                    if !line.contains("---") {
                        rows.push(split_cells(line));
                    }
                }
                _ => {
                    self.state = ScanState::Table {
                        header: split_cells(line),
                        rows: Vec::new(),
                        separator_pending: true,
                    };
                }
            }
            return;
        }

        // A non-pipe line ends an open table, then is handled normally.
        self.flush_table();

        let trimmed = line.trim();
        if let Some(item) = strip_unordered_marker(trimmed) {
            self.push_list_item(false, item);
            return;
        }
        if let Some(item) = strip_ordered_marker(trimmed) {
            self.push_list_item(true, item);
            return;
        }
        self.flush_list();

        if let Some(rest) = line.strip_prefix("## ") {
            self.blocks.push(Block::heading(2, rest));
        } else if let Some(rest) = line.strip_prefix("### ") {
            self.blocks.push(Block::heading(3, rest));
        } else if trimmed == "---" {
            self.blocks.push(Block::Rule);
        } else {
            self.blocks.push(Block::paragraph(line));
        }
    }

    /// Appends an item to a same-kind open list, or flushes and opens a new
    /// run. Switching marker style mid-run closes the first list.
    fn push_list_item(&mut self, ordered: bool, item: &str) {
        if let ScanState::List {
            ordered: open,
            items,
        } = &mut self.state
            && *open == ordered
        {
            items.push(item.to_string());
            return;
        }
        self.flush_list();
        self.state = ScanState::List {
            ordered,
            items: vec![item.to_string()],
        };
    }

    fn flush_list(&mut self) {
        if !matches!(self.state, ScanState::List { .. }) {
            return;
        }
        if let ScanState::List { ordered, items } = mem::take(&mut self.state) {
            self.blocks.push(Block::List { ordered, items });
        }
    }

    fn flush_table(&mut self) {
        if !matches!(self.state, ScanState::Table { .. }) {
            return;
        }
        if let ScanState::Table { header, rows, .. } = mem::take(&mut self.state) {
            self.blocks.push(Block::Table { header, rows });
        }
    }

    /// Flushes whatever is still open at end of document.
    fn finish(mut self) -> Vec<Block> {
        self.flush_table();
        self.flush_list();
        self.blocks
    }
}

/// Splits a pipe line into trimmed cell texts, dropping the empty fragments
/// produced by leading/trailing pipes.
fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_unordered_marker(trimmed: &str) -> Option<&str> {
    trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
}

fn strip_ordered_marker(trimmed: &str) -> Option<&str> {
    let digits = trimmed
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[digits..].strip_prefix(". ")
}
