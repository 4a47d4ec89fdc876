use std::fmt;

use crate::sections::{Heading, outer_depth};

/// Indentation added per nesting level below the shallowest heading.
pub const TOC_INDENT: &str = "    ";

/// One line of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub title: String,
    pub anchor: String,
    /// Levels below the shallowest heading.
    pub indent: usize,
}

impl TocEntry {
    pub fn new(heading: &Heading, outer: usize) -> Self {
        Self {
            title: heading.title.clone(),
            anchor: anchor(&heading.title),
            indent: heading.depth.saturating_sub(outer),
        }
    }
}

impl fmt::Display for TocEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}- [{}](#{})",
            TOC_INDENT.repeat(self.indent),
            self.title,
            self.anchor
        )
    }
}

/// GitHub-style link target for a heading title.
///
/// Only lowercases, turns spaces into hyphens and drops question marks; no
/// other characters are escaped.
pub fn anchor(title: &str) -> String {
    title.to_lowercase().replace(' ', "-").replace('?', "")
}

/// Build the table of contents entries for `headings`.
pub fn toc_entries(headings: &[Heading]) -> Vec<TocEntry> {
    let Some(outer) = outer_depth(headings) else {
        return Vec::new();
    };
    headings.iter().map(|h| TocEntry::new(h, outer)).collect()
}

/// Render the table of contents as Markdown list lines.
pub fn make_toc(headings: &[Heading]) -> Vec<String> {
    toc_entries(headings)
        .iter()
        .map(ToString::to_string)
        .collect()
}
