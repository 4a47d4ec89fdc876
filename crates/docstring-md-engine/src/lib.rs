//! # docstring-md engine
//!
//! Turns a plain-text docstring into GitHub-flavoured Markdown.
//!
//! ## Pipeline
//!
//! 1. **`trim`**: strip the docstring's indentation
//! 2. **`sections`**: find `#` heading lines
//! 3. **`toc`**: build a nested table of contents from the headings
//! 4. **`body`**: classify lines, collecting `>>> ` and `$ ` runs into blocks
//! 5. **`code_block`**: fence the blocks, dropping prompts from pure examples
//! 6. **`document`**: assemble title, summary, contents and body
//!
//! Everything here is a pure function of its input.

pub mod body;
pub mod code_block;
pub mod document;
pub mod sections;
pub mod toc;
pub mod trim;

// Re-export key types for easier usage
pub use body::{BodyBuilder, transform_body};
pub use code_block::{CodeBlock, Language, fence};
pub use document::{Document, convert};
pub use sections::{Heading, find_sections};
pub use toc::{TocEntry, anchor, make_toc};
pub use trim::{trim, unindent};
