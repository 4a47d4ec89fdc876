//! Static docstring lookup in Python source text.
//!
//! Nothing is imported or executed: the source is scanned just far enough to
//! find the first statement of the module, or of a top-level `def`/`class`,
//! and to read it when it is a string literal.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No top-level def or class named '{0}'")]
    EntryNotFound(String),
}

/// Docstring of the module itself, if its first statement is a string.
pub fn module_docstring(source: &str) -> Option<String> {
    docstring_at(skip_trivia(strip_bom(source)))
}

/// Docstring of the top-level `def` or `class` called `name`.
///
/// A name defined more than once resolves to its last definition. An entry
/// without a docstring yields `Ok(None)`.
pub fn entry_docstring(source: &str, name: &str) -> Result<Option<String>, ExtractError> {
    let source = strip_bom(source);
    let header_start = *find_definitions(source, name)
        .last()
        .ok_or_else(|| ExtractError::EntryNotFound(name.to_string()))?;

    let Some(header_len) = header_end(&source[header_start..]) else {
        return Ok(None);
    };

    let body = source[header_start + header_len..].trim_start_matches([' ', '\t']);
    let statement = if body.is_empty() || body.starts_with(['\n', '\r', '#']) {
        skip_trivia(body)
    } else {
        body
    };

    Ok(docstring_at(statement))
}

fn strip_bom(source: &str) -> &str {
    source.strip_prefix('\u{feff}').unwrap_or(source)
}

/// Text of the statement at the start of `text` when it is a string.
///
/// Adjacent literals are joined, either on one logical line or inside
/// parentheses.
fn docstring_at(text: &str) -> Option<String> {
    match text.strip_prefix('(') {
        Some(inner) => {
            let (docstring, rest) = literal_run(skip_trivia(inner), skip_trivia)?;
            rest.starts_with(')').then_some(docstring)
        }
        None => literal_run(text, skip_line_space).map(|(docstring, _)| docstring),
    }
}

/// Concatenated text of the string literals at the start of `text`, with
/// `gap` skipping what may separate them. A bytes or f-string piece spoils
/// the whole run.
fn literal_run<'a>(mut text: &'a str, gap: fn(&str) -> &str) -> Option<(String, &'a str)> {
    let mut docstring: Option<String> = None;
    while let Some(literal) = StringLiteral::parse(text) {
        docstring
            .get_or_insert_default()
            .push_str(&literal.docstring()?);
        text = gap(&text[literal.len..]);
    }
    docstring.map(|docstring| (docstring, text))
}

/// A string literal at the very start of some source text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StringLiteral<'a> {
    prefix: &'a str,
    content: &'a str,
    /// Bytes taken up in the source, prefix and quotes included.
    len: usize,
}

impl<'a> StringLiteral<'a> {
    const QUOTES: [&'static str; 4] = ["\"\"\"", "'''", "\"", "'"];

    fn parse(text: &'a str) -> Option<Self> {
        let prefix_len = text
            .bytes()
            .take(2)
            .take_while(|b| b"rRuUbBfF".contains(b))
            .count();
        let (prefix, rest) = text.split_at(prefix_len);
        let quote = Self::QUOTES.into_iter().find(|q| rest.starts_with(*q))?;
        let triple = quote.len() == 3;
        let body = &rest[quote.len()..];

        let mut chars = body.char_indices();
        while let Some((idx, c)) = chars.next() {
            match c {
                '\\' => {
                    chars.next();
                }
                '\n' if !triple => return None,
                _ if body[idx..].starts_with(quote) => {
                    return Some(Self {
                        prefix,
                        content: &body[..idx],
                        len: prefix_len + 2 * quote.len() + idx,
                    });
                }
                _ => {}
            }
        }
        None
    }

    fn is_raw(&self) -> bool {
        self.prefix.contains(['r', 'R'])
    }

    /// The literal's text, or `None` for bytes and f-strings, which never
    /// count as docstrings.
    fn docstring(&self) -> Option<String> {
        if self.prefix.contains(['b', 'B', 'f', 'F']) {
            return None;
        }
        if self.is_raw() {
            Some(self.content.to_string())
        } else {
            Some(unescape(self.content))
        }
    }
}

/// Decode backslash escapes the way the interpreter does for `str` literals.
///
/// Named escapes (`\N{...}`) and invalid escapes are kept as written.
fn unescape(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(idx) = rest.find('\\') {
        out.push_str(&rest[..idx]);
        let escape = &rest[idx + 1..];
        match decode_escape(escape) {
            Some((decoded, used)) => {
                out.extend(decoded);
                rest = &escape[used..];
            }
            None => {
                out.push('\\');
                rest = escape;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decode the escape following a backslash into the character it stands for
/// (`None` for a line continuation) and the bytes it takes up.
fn decode_escape(escape: &str) -> Option<(Option<char>, usize)> {
    let simple = match escape.chars().next()? {
        '\\' => '\\',
        '\'' => '\'',
        '"' => '"',
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0c',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0b',
        '\n' => return Some((None, 1)),
        '\r' if escape[1..].starts_with('\n') => return Some((None, 2)),
        '\r' => return Some((None, 1)),
        'x' => return hex_escape(&escape[1..], 2).map(|c| (Some(c), 3)),
        'u' => return hex_escape(&escape[1..], 4).map(|c| (Some(c), 5)),
        'U' => return hex_escape(&escape[1..], 8).map(|c| (Some(c), 9)),
        '0'..='7' => {
            let digits = escape
                .bytes()
                .take(3)
                .take_while(|b| (b'0'..=b'7').contains(b))
                .count();
            let value = u32::from_str_radix(&escape[..digits], 8).ok()?;
            return char::from_u32(value).map(|c| (Some(c), digits));
        }
        _ => return None,
    };
    Some((Some(simple), 1))
}

/// Exactly `width` hex digits naming a valid character.
fn hex_escape(digits: &str, width: usize) -> Option<char> {
    let digits = digits.get(..width)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
}

/// Skip whitespace, line breaks and comments.
fn skip_trivia(mut text: &str) -> &str {
    loop {
        text = text.trim_start();
        match text.strip_prefix('#') {
            Some(comment) => text = comment.find('\n').map_or("", |end| &comment[end..]),
            None => return text,
        }
    }
}

/// Skip spaces, tabs and backslash line continuations.
fn skip_line_space(mut text: &str) -> &str {
    loop {
        text = text.trim_start_matches([' ', '\t']);
        match text
            .strip_prefix("\\\n")
            .or_else(|| text.strip_prefix("\\\r\n"))
        {
            Some(next) => text = next,
            None => return text,
        }
    }
}

fn definition_regex() -> &'static Regex {
    static DEFINITION_REGEX: OnceLock<Regex> = OnceLock::new();
    DEFINITION_REGEX.get_or_init(|| {
        Regex::new(r"^(?:async[ \t]+)?(?:def|class)[ \t]+([A-Za-z_][A-Za-z0-9_]*)")
            .expect("Invalid definition regex")
    })
}

/// Offsets just past the name of each top-level definition of `name`.
///
/// String literals and comments are skipped so that code quoted inside a
/// docstring is never mistaken for a definition.
fn find_definitions(source: &str, name: &str) -> Vec<usize> {
    let regex = definition_regex();
    let mut found = Vec::new();
    let mut pos = 0;
    let mut line_start = true;

    while let Some(c) = source[pos..].chars().next() {
        let rest = &source[pos..];
        if line_start
            && let Some(caps) = regex.captures(rest)
            && &caps[1] == name
        {
            found.push(pos + caps[0].len());
        }

        match c {
            '#' => {
                pos += rest.find('\n').unwrap_or(rest.len());
                line_start = false;
                continue;
            }
            '"' | '\'' => {
                if let Some(literal) = StringLiteral::parse(rest) {
                    pos += literal.len;
                    line_start = false;
                    continue;
                }
            }
            _ => {}
        }

        line_start = c == '\n';
        pos += c.len_utf8();
    }

    found
}

/// Offset just past the `:` closing a definition header.
fn header_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut pos = 0;

    while let Some(c) = text[pos..].chars().next() {
        let rest = &text[pos..];
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => return Some(pos + 1),
            '#' => {
                pos += rest.find('\n').unwrap_or(rest.len());
                continue;
            }
            '"' | '\'' => {
                if let Some(literal) = StringLiteral::parse(rest) {
                    pos += literal.len;
                    continue;
                }
            }
            _ => {}
        }
        pos += c.len_utf8();
    }

    None
}
