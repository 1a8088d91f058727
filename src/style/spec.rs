//! Style specification types.

use serde::{Deserialize, Serialize};

/// Font family names mandated by the target formatting standard.
///
/// The fonts are assumed to be installed at render time; availability is
/// not verified here.
pub mod fonts {
    /// Body face (仿宋): list items, paragraphs, table body cells.
    pub const FANGSONG_GB2312: &str = "仿宋_GB2312";
    /// Script face (楷体): second- and third-level headings.
    pub const KAITI_GB2312: &str = "楷体_GB2312";
    /// Sans/black face (黑体): first-level headings, table header cells.
    pub const HEITI: &str = "黑体";
    /// Display face (小标宋): the document title.
    pub const XIAOBIAOSONG: &str = "方正小标宋简体";
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Left alignment.
    #[default]
    Left,
    /// Center alignment.
    Center,
    /// Justified with the last line left-aligned (the standard body
    /// alignment for official correspondence).
    JustifyLow,
}

/// Complete style specification for one structural role.
///
/// Immutable; looked up from the static rule table by block kind, or by
/// row kind for tables. `None` fields leave the serializer's default in
/// effect (used for the table rows' line spacing). Serialize-only: the
/// family names borrow from the static rule table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleSpec {
    /// Font family name.
    pub font_family: &'static str,

    /// Font size in points.
    pub size_points: f32,

    /// Block-level bold weight. For list items and paragraphs this is
    /// `false` and the per-run emphasis decides.
    pub bold: bool,

    /// Paragraph alignment.
    pub alignment: Alignment,

    /// First line indent in points.
    pub first_line_indent_points: Option<f32>,

    /// Fixed line spacing in points.
    pub line_spacing_points: Option<f32>,

    /// Space before the paragraph in points.
    pub space_before_points: Option<f32>,

    /// Space after the paragraph in points.
    pub space_after_points: Option<f32>,
}

/// Page margins in millimeters, applied once per document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMargins {
    /// Top margin.
    pub top_mm: f32,
    /// Bottom margin.
    pub bottom_mm: f32,
    /// Left margin.
    pub left_mm: f32,
    /// Right margin.
    pub right_mm: f32,
}

impl PageMargins {
    /// The standard official-document margins: 37mm top, 35mm bottom,
    /// 28mm left, 26mm right.
    pub fn standard() -> Self {
        Self {
            top_mm: 37.0,
            bottom_mm: 35.0,
            left_mm: 28.0,
            right_mm: 26.0,
        }
    }
}

impl Default for PageMargins {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_margins() {
        let margins = PageMargins::standard();
        assert_eq!(margins.top_mm, 37.0);
        assert_eq!(margins.bottom_mm, 35.0);
        assert_eq!(margins.left_mm, 28.0);
        assert_eq!(margins.right_mm, 26.0);
    }

    #[test]
    fn test_alignment_default() {
        assert_eq!(Alignment::default(), Alignment::Left);
    }
}
