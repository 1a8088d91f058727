//! Block and text-run types.

use serde::{Deserialize, Serialize};

use super::TableData;

/// Structural role of one classified input line (or table capture).
///
/// Classification is total: every non-blank, non-consumed line maps to
/// exactly one kind. `Separator` is the blank spacer emitted after the
/// document title; horizontal rules in the input produce no block at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// The document title: the first `# ` line in the input.
    Title,
    /// First-level section heading (`## `).
    Heading2,
    /// Second-level section heading (`### `).
    Heading3,
    /// Third-level section heading (`#### `).
    Heading4,
    /// Unordered list item (`- `, `* `, `+ `, `☑ `).
    ListItem,
    /// Pipe table captured by lookahead.
    Table,
    /// Body text fallback.
    Paragraph,
    /// Blank spacer paragraph after the title.
    Separator,
}

impl BlockKind {
    /// Check if this kind carries inline text runs.
    pub fn has_runs(&self) -> bool {
        !matches!(self, BlockKind::Table | BlockKind::Separator)
    }

    /// Check if this kind is one of the heading roles (including the title).
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            BlockKind::Title | BlockKind::Heading2 | BlockKind::Heading3 | BlockKind::Heading4
        )
    }
}

/// A run of text with consistent emphasis.
///
/// Runs are ordered left to right; concatenating their texts reproduces the
/// source line with the emphasis markers removed. A run is produced by at
/// most one of the bold or italic recognizers, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// The text content.
    pub text: String,

    /// Bold emphasis (`**text**`).
    pub bold: bool,

    /// Italic emphasis (`*text*`).
    pub italic: bool,
}

impl Run {
    /// Create an unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: true,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// One classified structural unit of the input.
///
/// Created by the classifier, consumed once by the builder, not mutated
/// afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// Structural role.
    pub kind: BlockKind,

    /// The trimmed source text the block was classified from.
    pub source_text: String,

    /// Inline runs for text kinds; empty for tables and separators.
    pub runs: Vec<Run>,

    /// Table payload, present only for `BlockKind::Table`.
    pub table: Option<TableData>,
}

impl Block {
    /// Create a text block with a single plain run.
    ///
    /// Used for the heading kinds, whose text is mark-stripped rather than
    /// split into emphasis runs.
    pub fn text(kind: BlockKind, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            kind,
            runs: vec![Run::plain(text.clone())],
            source_text: text,
            table: None,
        }
    }

    /// Create a text block from pre-parsed inline runs.
    pub fn with_runs(kind: BlockKind, source_text: impl Into<String>, runs: Vec<Run>) -> Self {
        Self {
            kind,
            source_text: source_text.into(),
            runs,
            table: None,
        }
    }

    /// Create a table block.
    pub fn table(source_text: impl Into<String>, table: TableData) -> Self {
        Self {
            kind: BlockKind::Table,
            source_text: source_text.into(),
            runs: Vec::new(),
            table: Some(table),
        }
    }

    /// Create the blank spacer block emitted after the title.
    pub fn separator() -> Self {
        Self {
            kind: BlockKind::Separator,
            source_text: String::new(),
            runs: Vec::new(),
            table: None,
        }
    }

    /// Get the plain text of the block: run texts concatenated, or the
    /// tab-joined cells for a table.
    pub fn plain_text(&self) -> String {
        match &self.table {
            Some(table) => table.plain_text(),
            None => self.runs.iter().map(|r| r.text.as_str()).collect(),
        }
    }

    /// Check if the block carries no visible content.
    pub fn is_empty(&self) -> bool {
        match &self.table {
            Some(table) => table.is_empty(),
            None => self.plain_text().trim().is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_plain_text() {
        let block = Block::with_runs(
            BlockKind::Paragraph,
            "正文**重要**内容",
            vec![
                Run::plain("正文"),
                Run::bold("重要"),
                Run::plain("内容"),
            ],
        );
        assert_eq!(block.plain_text(), "正文重要内容");
        assert!(!block.is_empty());
    }

    #[test]
    fn test_separator_block() {
        let sep = Block::separator();
        assert_eq!(sep.kind, BlockKind::Separator);
        assert!(sep.is_empty());
        assert!(sep.runs.is_empty());
    }

    #[test]
    fn test_kind_predicates() {
        assert!(BlockKind::Title.is_heading());
        assert!(BlockKind::Heading4.is_heading());
        assert!(!BlockKind::ListItem.is_heading());

        assert!(BlockKind::Paragraph.has_runs());
        assert!(!BlockKind::Table.has_runs());
        assert!(!BlockKind::Separator.has_runs());
    }

    #[test]
    fn test_run_constructors() {
        let run = Run::bold("重要");
        assert!(run.bold);
        assert!(!run.italic);
        assert!(!run.is_empty());

        assert!(Run::plain("").is_empty());
    }
}
