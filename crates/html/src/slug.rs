//! Heading slug generation.

use std::collections::HashMap;

/// Generates unique, URL-safe heading ids.
///
/// Duplicate heading texts get `-1`, `-2`, ... suffixes in document order,
/// so anchors stay stable as long as the heading order does.
#[derive(Debug, Default)]
pub struct Slugger {
    counts: HashMap<String, usize>,
}

impl Slugger {
    /// Creates a new slugger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unique slug for the given heading text.
    pub fn next_slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.counts.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 {
            base
        } else {
            format!("{}-{}", base, count)
        };
        *count += 1;
        slug
    }
}

/// Lowercases, drops punctuation, and turns spaces into hyphens.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.trim().chars() {
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else if ch == ' ' {
            slug.push('-');
        } else if ch == '-' || ch == '_' {
            slug.push(ch);
        }
    }
    if slug.is_empty() {
        // Punctuation-only headings still need an anchor.
        "section".to_string()
    } else {
        slug
    }
}
