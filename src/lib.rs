//! # gongwen
//!
//! Classification and styling engine for official correspondence.
//!
//! This library converts a constrained subset of Markdown into a styled
//! document model that satisfies the national formatting standard for
//! official documents: every line is assigned a structural role (title,
//! heading levels, list item, table, paragraph), inline emphasis is split
//! into runs, and each role is mapped through a static style rule table
//! (font family, size, alignment, indent, line spacing, margins) into a
//! stream of build commands for an external document serializer.
//!
//! ## Quick Start
//!
//! ```
//! use gongwen::{convert_str, RecordingSink};
//!
//! fn main() -> gongwen::Result<()> {
//!     let markdown = "# 关于加强公文格式管理的通知\n\n## 一、总体要求\n\n正文内容。";
//!
//!     let mut sink = RecordingSink::new();
//!     convert_str(markdown, &mut sink)?;
//!
//!     for command in sink.commands() {
//!         println!("{}", serde_json::to_string(command).unwrap());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Supported Markdown subset
//!
//! Four heading levels (`#` becomes the document title once, `##`–`####`
//! the section headings), unordered list markers, bold and italic spans,
//! pipe tables, and horizontal rules. Everything else degrades to a body
//! paragraph; classification never fails on content.
//!
//! ## Scope
//!
//! The library stops at the command stream. Packaging it into a binary
//! document file, upload handling, and UI belong to collaborators that
//! implement [`DocumentSink`].

pub mod builder;
pub mod error;
pub mod model;
pub mod parser;
pub mod style;

// Re-export commonly used types
pub use builder::{
    BuildCommand, DocumentBuilder, DocumentSink, ParagraphCommand, ParagraphFormat, RecordingSink,
    StyledRun, TableCommand, TableRowCommand,
};
pub use error::{Error, Result};
pub use model::{Block, BlockKind, Run, TableData};
pub use parser::{classify_str, BuildState, LineClassifier};
pub use style::{style_for, table_row_style, Alignment, PageMargins, StyleSpec, TableRowKind};

use std::fs;
use std::path::Path;

/// Build a styled document from Markdown text.
///
/// The single entry point of the core contract: classifies the whole
/// input, applies the style rule table, and emits the command stream to
/// `sink`. All-or-nothing — on error the sink's partial content must be
/// discarded.
///
/// # Example
///
/// ```
/// use gongwen::{convert_str, BuildCommand, RecordingSink};
///
/// let mut sink = RecordingSink::new();
/// convert_str("正文内容。", &mut sink).unwrap();
/// assert!(matches!(sink.commands().first(), Some(BuildCommand::BeginDocument { .. })));
/// ```
pub fn convert_str(markdown: &str, sink: &mut dyn DocumentSink) -> Result<()> {
    DocumentBuilder::new().build(markdown, sink)
}

/// Build a styled document from a Markdown file.
///
/// Reads the file as UTF-8 and delegates to [`convert_str`]. An unreadable
/// or non-UTF-8 file yields [`Error::InputRead`].
pub fn convert_file<P: AsRef<Path>>(path: P, sink: &mut dyn DocumentSink) -> Result<()> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| Error::InputRead(format!("{}: {}", path.display(), e)))?;
    convert_str(&text, sink)
}

/// Build the command stream for Markdown text and return it.
///
/// Convenience over [`convert_str`] with a [`RecordingSink`].
///
/// # Example
///
/// ```
/// use gongwen::{build_commands, BuildCommand};
///
/// let commands = build_commands("# 通知\n\n正文。").unwrap();
/// assert!(matches!(commands.last(), Some(BuildCommand::EndDocument)));
/// ```
pub fn build_commands(markdown: &str) -> Result<Vec<BuildCommand>> {
    let mut sink = RecordingSink::new();
    convert_str(markdown, &mut sink)?;
    Ok(sink.into_commands())
}
