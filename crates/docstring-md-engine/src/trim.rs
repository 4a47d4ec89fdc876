//! Docstring indentation handling.
//!
//! Follows the usual docstring conventions: the first line sits right after
//! the opening quotes and carries no meaningful indentation, every following
//! line shares the indentation of the surrounding code.

/// Tab stops used when expanding tabs.
pub const TAB_WIDTH: usize = 8;

/// Remove indentation from a docstring.
///
/// The first line is stripped on both sides. Later lines lose the smallest
/// indentation found among them (blank lines don't count) and their trailing
/// whitespace. Blank lines at either end are dropped.
pub fn trim(docstring: Option<&str>) -> String {
    let Some(docstring) = docstring.filter(|s| !s.is_empty()) else {
        return String::new();
    };

    let expanded = expand_tabs(docstring, TAB_WIDTH);
    let lines = split_lines(&expanded);
    let Some((first, rest)) = lines.split_first() else {
        return String::new();
    };

    let mut trimmed = vec![first.trim()];
    if let Some(indent) = common_indent(rest) {
        trimmed.extend(rest.iter().map(|line| drop_chars(line, indent).trim_end()));
    }

    while trimmed.last().is_some_and(|line| line.is_empty()) {
        trimmed.pop();
    }
    let leading = trimmed.iter().take_while(|line| line.is_empty()).count();

    trimmed[leading..].join("\n")
}

/// Remove the indentation shared by all lines of a group.
///
/// Unlike [`trim`], the first line counts like any other and trailing
/// whitespace is left alone. A group without any visible content yields no
/// lines at all.
pub fn unindent<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    match common_indent(lines) {
        Some(indent) => lines
            .iter()
            .map(|line| drop_chars(line.as_ref(), indent).to_string())
            .collect(),
        None => Vec::new(),
    }
}

/// Smallest leading-whitespace width, in characters, over the non-blank lines.
fn common_indent<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    lines
        .iter()
        .filter_map(|line| {
            let line = line.as_ref();
            let stripped = line.trim_start();
            (!stripped.is_empty()).then(|| char_len(line) - char_len(stripped))
        })
        .min()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Slice off the first `n` characters; shorter lines become empty.
fn drop_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}

/// Replace tabs with spaces up to the next multiple of `width`.
///
/// The column restarts after every line break.
fn expand_tabs(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = width - column % width;
                out.extend(std::iter::repeat_n(' ', pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Characters that end a line. `\r\n` counts as a single break.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split at every line break. A final line break does not open an extra
/// empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(idx) = rest.find(LINE_BREAKS) {
        lines.push(&rest[..idx]);
        let tail = &rest[idx..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}
