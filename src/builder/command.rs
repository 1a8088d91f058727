//! Build command types.
//!
//! The command stream is the output contract of the core: an external
//! serializer consumes it in order and packages the result into the final
//! binary document format. Commands are serializable so the stream can be
//! inspected, logged, or shipped across a process boundary.

use serde::Serialize;

use crate::model::{BlockKind, Run};
use crate::style::{Alignment, PageMargins, StyleSpec, TableRowKind};

/// One command in the build stream handed to the document sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum BuildCommand {
    /// Open the document and apply the page margins. Always first.
    BeginDocument {
        /// Page margins, applied once regardless of content.
        margins: PageMargins,
    },

    /// Add a styled paragraph.
    Paragraph(ParagraphCommand),

    /// Add an empty spacer paragraph with default formatting.
    BlankParagraph,

    /// Add a table.
    Table(TableCommand),

    /// Close the document. Always last.
    EndDocument,
}

impl BuildCommand {
    /// Check if this command opens or closes the document.
    pub fn is_document_boundary(&self) -> bool {
        matches!(
            self,
            BuildCommand::BeginDocument { .. } | BuildCommand::EndDocument
        )
    }

    /// Check if this command contributes visible content.
    pub fn is_content(&self) -> bool {
        matches!(self, BuildCommand::Paragraph(_) | BuildCommand::Table(_))
    }
}

/// A styled paragraph: its structural role, fully resolved runs, and
/// paragraph-level formatting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParagraphCommand {
    /// Structural role the paragraph was classified as.
    pub kind: BlockKind,

    /// Runs with the block style already applied; empty-text runs dropped.
    pub runs: Vec<StyledRun>,

    /// Paragraph-level formatting from the rule table.
    pub format: ParagraphFormat,
}

/// One run with its complete character formatting resolved.
///
/// Font family and size always come from the block rule; per-run emphasis
/// only adjusts weight and slant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledRun {
    /// The text content.
    pub text: String,

    /// Font family from the block rule.
    pub font_family: &'static str,

    /// Font size in points from the block rule.
    pub size_points: f32,

    /// Effective bold weight: the block rule's weight, or the run's own
    /// emphasis for body text.
    pub bold: bool,

    /// Italic slant from the run's emphasis.
    pub italic: bool,
}

impl StyledRun {
    /// Resolve a classified run against its block style.
    pub fn resolve(run: &Run, spec: &StyleSpec) -> Self {
        Self {
            text: run.text.clone(),
            font_family: spec.font_family,
            size_points: spec.size_points,
            bold: spec.bold || run.bold,
            italic: run.italic,
        }
    }
}

/// Paragraph-level formatting extracted from a style rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParagraphFormat {
    /// Alignment.
    pub alignment: Alignment,

    /// First line indent in points, if any.
    pub first_line_indent_points: Option<f32>,

    /// Fixed line spacing in points, if any.
    pub line_spacing_points: Option<f32>,

    /// Space before the paragraph in points.
    pub space_before_points: Option<f32>,

    /// Space after the paragraph in points.
    pub space_after_points: Option<f32>,
}

impl From<&StyleSpec> for ParagraphFormat {
    fn from(spec: &StyleSpec) -> Self {
        Self {
            alignment: spec.alignment,
            first_line_indent_points: spec.first_line_indent_points,
            line_spacing_points: spec.line_spacing_points,
            space_before_points: spec.space_before_points,
            space_after_points: spec.space_after_points,
        }
    }
}

/// A complete table request: column count fixed by the header, every row
/// normalized to that width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCommand {
    /// Number of columns.
    pub columns: usize,

    /// Rows in order, header first.
    pub rows: Vec<TableRowCommand>,
}

/// One table row with its cell style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRowCommand {
    /// Header or body role.
    pub kind: TableRowKind,

    /// Cell texts, exactly `columns` of them.
    pub cells: Vec<String>,

    /// Cell paragraph style from the rule table.
    pub style: StyleSpec,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{fonts, style_for};

    #[test]
    fn test_styled_run_resolution() {
        let spec = style_for(BlockKind::Paragraph).unwrap();
        let styled = StyledRun::resolve(&Run::bold("重要"), spec);

        assert_eq!(styled.font_family, fonts::FANGSONG_GB2312);
        assert_eq!(styled.size_points, 16.0);
        assert!(styled.bold);
        assert!(!styled.italic);
    }

    #[test]
    fn test_block_rule_bold_wins_for_title() {
        let spec = style_for(BlockKind::Title).unwrap();
        let styled = StyledRun::resolve(&Run::plain("标题"), spec);
        assert!(styled.bold);
    }

    #[test]
    fn test_command_predicates() {
        let begin = BuildCommand::BeginDocument {
            margins: PageMargins::standard(),
        };
        assert!(begin.is_document_boundary());
        assert!(!begin.is_content());
        assert!(!BuildCommand::BlankParagraph.is_content());
    }

    #[test]
    fn test_command_serializes_with_tag() {
        let json = serde_json::to_string(&BuildCommand::BlankParagraph).unwrap();
        assert_eq!(json, r#"{"command":"blank_paragraph"}"#);
    }
}
