//! Line-by-line classification of a docstring body.
//!
//! [`BodyBuilder`] is a two-state machine: it either passes text lines
//! through or collects the lines of an open code block. A block opens on a
//! prompt line and closes on the first empty line, which is kept after the
//! closing fence. Input that ends inside a block closes it without adding a
//! blank line.

use crate::code_block::{CodeBlock, Language};

#[derive(Debug, Default)]
enum ScanState {
    #[default]
    Text,
    Code {
        language: Language,
        lines: Vec<String>,
    },
}

#[derive(Debug, Default)]
pub struct BodyBuilder {
    state: ScanState,
    out: Vec<String>,
}

impl BodyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: &str) {
        match &mut self.state {
            ScanState::Code { lines, .. } if !line.is_empty() => lines.push(line.to_string()),
            ScanState::Code { .. } => {
                self.flush_code();
                self.out.push(line.to_string());
            }
            ScanState::Text => match Language::detect(line) {
                Some(language) => {
                    self.state = ScanState::Code {
                        language,
                        lines: vec![line.to_string()],
                    };
                }
                None => self.out.push(line.to_string()),
            },
        }
    }

    pub fn finish(mut self) -> Vec<String> {
        // EOF flush
        self.flush_code();
        self.out
    }

    fn flush_code(&mut self) {
        if let ScanState::Code { language, lines } = std::mem::take(&mut self.state) {
            self.out.extend(CodeBlock::new(language, lines).render());
        }
    }
}

/// Run every line through a fresh [`BodyBuilder`].
pub fn transform_body<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut builder = BodyBuilder::new();
    for line in lines {
        builder.push(line.as_ref());
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_lines_pass_through() {
        let lines = ["Some text", "", "  indented", "$HOME is fine"];
        assert_eq!(transform_body(&lines), lines.to_vec());
    }

    #[test]
    fn empty_line_closes_block_and_follows_fence() {
        let lines = [">>> print('hi')", "", "after"];
        assert_eq!(
            transform_body(&lines),
            vec!["```python", "print('hi')", "```", "", "after"]
        );
    }

    #[test]
    fn block_runs_to_end_of_input() {
        let lines = ["$ ls", "file.txt"];
        assert_eq!(
            transform_body(&lines),
            vec!["```bash", "$ ls", "file.txt", "```"]
        );
    }

    #[test]
    fn output_lines_stay_in_the_block() {
        let lines = [">>> 1 + 1", "2"];
        assert_eq!(
            transform_body(&lines),
            vec!["```python", ">>> 1 + 1", "2", "```"]
        );
    }

    #[test]
    fn prompt_inside_block_does_not_reopen() {
        let lines = ["$ echo hi", ">>> not python", ""];
        assert_eq!(
            transform_body(&lines),
            vec!["```bash", "$ echo hi", ">>> not python", "```", ""]
        );
    }

    #[test]
    fn consecutive_blocks() {
        let lines = ["  >>> a = 1", "  ... ", "", "    $ run", "", "done"];
        assert_eq!(
            transform_body(&lines),
            vec![
                "```python",
                "a = 1",
                "",
                "```",
                "",
                "```bash",
                "$ run",
                "```",
                "",
                "done",
            ]
        );
    }

    #[test]
    fn empty_input() {
        assert!(transform_body::<&str>(&[]).is_empty());
    }
}
