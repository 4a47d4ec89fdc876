use crate::trim::unindent;

/// Fence delimiter for code blocks.
pub const FENCE: &str = "```";

/// Prompt opening an interactive example.
pub const EXAMPLE_PROMPT: &str = ">>> ";
/// Prompt continuing an interactive example.
pub const CONTINUATION_PROMPT: &str = "... ";
/// Prompt opening a shell command.
pub const SHELL_PROMPT: &str = "$ ";

/// Language a code block is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Interactive-example transcripts (`>>> `).
    Python,
    /// Shell-command transcripts (`$ `).
    Bash,
}

impl Language {
    /// Detect whether `line` opens a code block, ignoring its indentation.
    pub fn detect(line: &str) -> Option<Self> {
        let trimmed = line.trim_start();
        if trimmed.starts_with(EXAMPLE_PROMPT) {
            Some(Self::Python)
        } else if trimmed.starts_with(SHELL_PROMPT) {
            Some(Self::Bash)
        } else {
            None
        }
    }

    /// Info string placed after the opening fence.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Bash => "bash",
        }
    }
}

/// A run of example or shell lines lifted out of a docstring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: Language,
    pub lines: Vec<String>,
}

impl CodeBlock {
    pub fn new(language: Language, lines: Vec<String>) -> Self {
        Self { language, lines }
    }

    /// True when every line, once unindented, is an example prompt line.
    pub fn is_pure_transcript(&self) -> bool {
        is_pure_transcript(&unindent(&self.lines))
    }

    /// The lines that go between the fences.
    ///
    /// Both languages lose their shared indentation. Python transcripts made
    /// only of prompt lines also lose the prompts, leaving runnable source.
    pub fn body(&self) -> Vec<String> {
        let lines = unindent(&self.lines);
        match self.language {
            Language::Python if is_pure_transcript(&lines) => {
                lines.iter().map(|line| strip_prompt(line).to_string()).collect()
            }
            Language::Python | Language::Bash => lines,
        }
    }

    /// The fenced block, opening and closing fence included.
    pub fn render(&self) -> Vec<String> {
        fence(self.body(), self.language.tag())
    }
}

/// Wrap `lines` in a fence tagged with `language`.
pub fn fence(lines: Vec<String>, language: &str) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(format!("{FENCE}{language}"));
    out.extend(lines);
    out.push(FENCE.to_string());
    out
}

fn is_prompt_line(line: &str) -> bool {
    line.starts_with(EXAMPLE_PROMPT)
        || line.starts_with(CONTINUATION_PROMPT)
        || line == EXAMPLE_PROMPT.trim_end()
        || line == CONTINUATION_PROMPT.trim_end()
}

fn is_pure_transcript<S: AsRef<str>>(lines: &[S]) -> bool {
    lines.iter().all(|line| is_prompt_line(line.as_ref()))
}

/// Drop the four-character prompt; bare `>>>` and `...` become empty.
fn strip_prompt(line: &str) -> &str {
    line.strip_prefix(EXAMPLE_PROMPT)
        .or_else(|| line.strip_prefix(CONTINUATION_PROMPT))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn block(language: Language, lines: &[&str]) -> CodeBlock {
        CodeBlock::new(language, lines.iter().map(ToString::to_string).collect())
    }

    #[rstest]
    #[case(">>> 1 + 1", Some(Language::Python))]
    #[case("    >>> indented", Some(Language::Python))]
    #[case("$ ls", Some(Language::Bash))]
    #[case("\t$ make", Some(Language::Bash))]
    #[case(">>>", None)]
    #[case(">>>no space", None)]
    #[case("$HOME", None)]
    #[case("... continued", None)]
    #[case("text", None)]
    fn detects_block_openers(#[case] line: &str, #[case] expected: Option<Language>) {
        assert_eq!(Language::detect(line), expected);
    }

    #[test]
    fn pure_transcript_loses_prompts() {
        let code = block(
            Language::Python,
            &["  >>> def f(x):", "  ...     return x", "  ...", "  >>> f(1)"],
        );
        assert!(code.is_pure_transcript());
        assert_eq!(
            code.render(),
            vec!["```python", "def f(x):", "    return x", "", "f(1)", "```"]
        );
    }

    #[test]
    fn transcript_with_output_keeps_prompts() {
        let code = block(Language::Python, &[">>> x", "not-a-prompt-line"]);
        assert!(!code.is_pure_transcript());
        assert_eq!(
            code.render(),
            vec!["```python", ">>> x", "not-a-prompt-line", "```"]
        );
    }

    #[test]
    fn shell_prompts_are_kept() {
        let code = block(Language::Bash, &["$ ls", "file.txt"]);
        assert_eq!(code.render(), vec!["```bash", "$ ls", "file.txt", "```"]);
    }

    #[test]
    fn shell_block_is_unindented() {
        let code = block(Language::Bash, &["    $ cargo build", "      Compiling"]);
        assert_eq!(
            code.render(),
            vec!["```bash", "$ cargo build", "  Compiling", "```"]
        );
    }

    #[test]
    fn shell_only_block_is_not_stripped() {
        let code = block(Language::Bash, &["$ make", "$ make install"]);
        assert_eq!(code.body(), vec!["$ make", "$ make install"]);
    }

    #[test]
    fn fence_tags() {
        assert_eq!(Language::Python.tag(), "python");
        assert_eq!(Language::Bash.tag(), "bash");
    }

    #[test]
    fn fence_with_empty_tag() {
        assert_eq!(fence(vec!["x".into()], ""), vec!["```", "x", "```"]);
    }
}
