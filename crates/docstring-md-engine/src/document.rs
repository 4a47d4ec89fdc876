use std::fmt;

use crate::{
    body::transform_body,
    sections::{Heading, find_sections, outer_depth},
    toc::make_toc,
    trim::trim,
};

/// Heading level assumed when the docstring has no headings of its own.
pub const DEFAULT_LEVEL: usize = 2;

/// A docstring laid out as a Markdown document.
///
/// The layout is: title heading, blank line, summary line, blank line, table
/// of contents, then the remaining docstring lines with example and shell
/// blocks fenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Heading>,
    lines: Vec<String>,
}

impl Document {
    pub fn new(docstring: Option<&str>, title: &str) -> Self {
        let text = trim(docstring);
        let mut body: Vec<&str> = text.split('\n').collect();

        let sections = find_sections(&body);
        let level = outer_depth(&sections).unwrap_or(DEFAULT_LEVEL);

        // `split` always yields at least one piece, even for empty text.
        let summary = body.remove(0);

        let mut lines = vec![
            format!("{} {title}", "#".repeat(level.saturating_sub(1).max(1))),
            String::new(),
            summary.to_string(),
            String::new(),
        ];
        lines.extend(make_toc(&sections));
        lines.extend(transform_body(&body));

        Self { sections, lines }
    }

    /// Headings found in the docstring, summary line included.
    pub fn sections(&self) -> &[Heading] {
        &self.sections
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Convert a docstring to Markdown text under the given title.
pub fn convert(docstring: Option<&str>, title: &str) -> String {
    Document::new(docstring, title).to_string()
}
