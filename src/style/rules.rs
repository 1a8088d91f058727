//! The static style rule table.
//!
//! One entry per structural role, holding the exact values the formatting
//! standard mandates. The builder looks styles up here instead of branching
//! on block kinds; adding a role is one table row.

use serde::{Deserialize, Serialize};

use super::{fonts, Alignment, StyleSpec};
use crate::model::BlockKind;

/// Title size (二号): 22 points.
pub const SIZE_TITLE: f32 = 22.0;
/// Body and heading size (三号): 16 points.
pub const SIZE_BODY: f32 = 16.0;
/// Fixed line spacing for all text roles: 28.8 points.
pub const LINE_SPACING: f32 = 28.8;
/// First line indent of two characters at body size, approximately 32 points.
pub const FIRST_LINE_INDENT: f32 = 32.0;
/// Spacing above and below table cell paragraphs: 3 points.
pub const TABLE_CELL_SPACING: f32 = 3.0;

const TITLE: StyleSpec = StyleSpec {
    font_family: fonts::XIAOBIAOSONG,
    size_points: SIZE_TITLE,
    bold: true,
    alignment: Alignment::Center,
    first_line_indent_points: None,
    line_spacing_points: Some(LINE_SPACING),
    space_before_points: Some(0.0),
    space_after_points: Some(0.0),
};

const HEADING2: StyleSpec = StyleSpec {
    font_family: fonts::HEITI,
    size_points: SIZE_BODY,
    bold: false,
    alignment: Alignment::JustifyLow,
    first_line_indent_points: Some(FIRST_LINE_INDENT),
    line_spacing_points: Some(LINE_SPACING),
    space_before_points: Some(0.0),
    space_after_points: Some(0.0),
};

const HEADING3: StyleSpec = StyleSpec {
    font_family: fonts::KAITI_GB2312,
    size_points: SIZE_BODY,
    bold: true,
    alignment: Alignment::JustifyLow,
    first_line_indent_points: Some(FIRST_LINE_INDENT),
    line_spacing_points: Some(LINE_SPACING),
    space_before_points: Some(0.0),
    space_after_points: Some(0.0),
};

const HEADING4: StyleSpec = StyleSpec {
    font_family: fonts::KAITI_GB2312,
    size_points: SIZE_BODY,
    bold: false,
    alignment: Alignment::JustifyLow,
    first_line_indent_points: Some(FIRST_LINE_INDENT),
    line_spacing_points: Some(LINE_SPACING),
    space_before_points: Some(0.0),
    space_after_points: Some(0.0),
};

const BODY: StyleSpec = StyleSpec {
    font_family: fonts::FANGSONG_GB2312,
    size_points: SIZE_BODY,
    bold: false,
    alignment: Alignment::JustifyLow,
    first_line_indent_points: Some(FIRST_LINE_INDENT),
    line_spacing_points: Some(LINE_SPACING),
    space_before_points: Some(0.0),
    space_after_points: Some(0.0),
};

const TABLE_HEADER: StyleSpec = StyleSpec {
    font_family: fonts::HEITI,
    size_points: SIZE_BODY,
    bold: true,
    alignment: Alignment::Center,
    first_line_indent_points: None,
    line_spacing_points: None,
    space_before_points: Some(TABLE_CELL_SPACING),
    space_after_points: Some(TABLE_CELL_SPACING),
};

const TABLE_BODY: StyleSpec = StyleSpec {
    font_family: fonts::FANGSONG_GB2312,
    size_points: SIZE_BODY,
    bold: false,
    alignment: Alignment::Center,
    first_line_indent_points: None,
    line_spacing_points: None,
    space_before_points: Some(TABLE_CELL_SPACING),
    space_after_points: Some(TABLE_CELL_SPACING),
};

/// The rule table: structural role to style specification.
static RULES: &[(BlockKind, &StyleSpec)] = &[
    (BlockKind::Title, &TITLE),
    (BlockKind::Heading2, &HEADING2),
    (BlockKind::Heading3, &HEADING3),
    (BlockKind::Heading4, &HEADING4),
    (BlockKind::ListItem, &BODY),
    (BlockKind::Paragraph, &BODY),
];

/// Look up the paragraph style for a block kind.
///
/// Returns `None` for `Table` (styled per row via [`table_row_style`]) and
/// `Separator` (rendered as an unstyled blank paragraph).
pub fn style_for(kind: BlockKind) -> Option<&'static StyleSpec> {
    RULES
        .iter()
        .find(|(rule_kind, _)| *rule_kind == kind)
        .map(|(_, spec)| *spec)
}

/// Role of a row within a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableRowKind {
    /// The header row parsed from the line above the separator.
    Header,
    /// A body row.
    Body,
}

/// Look up the cell style for a table row kind.
pub fn table_row_style(kind: TableRowKind) -> &'static StyleSpec {
    match kind {
        TableRowKind::Header => &TABLE_HEADER,
        TableRowKind::Body => &TABLE_BODY,
    }
}
