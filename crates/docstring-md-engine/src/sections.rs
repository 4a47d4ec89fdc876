use regex::Regex;
use std::sync::OnceLock;

/// A heading line found in a docstring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Number of leading `#` characters.
    pub depth: usize,
    /// Everything after the space that follows the markers.
    pub title: String,
}

impl Heading {
    /// Parse a single line, returning `None` when it is not a heading.
    pub fn parse(line: &str) -> Option<Self> {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        let heading_regex =
            HEADING_REGEX.get_or_init(|| Regex::new(r"^#+ ").expect("Invalid heading regex"));

        if !heading_regex.is_match(line) {
            return None;
        }
        let (markers, title) = line.split_once(' ')?;
        Some(Self {
            depth: markers.len(),
            title: title.to_string(),
        })
    }
}

/// Collect every heading in `lines`, in order of appearance.
pub fn find_sections<S: AsRef<str>>(lines: &[S]) -> Vec<Heading> {
    lines
        .iter()
        .filter_map(|line| Heading::parse(line.as_ref()))
        .collect()
}

/// Shallowest heading depth, if any heading exists.
pub fn outer_depth(headings: &[Heading]) -> Option<usize> {
    headings.iter().map(|h| h.depth).min()
}
