//! Enumeration marker normalization.

use super::patterns::ENUM_MARKER;

/// Collapse the single space after an enumeration marker prefix.
///
/// `"一、 总体要求"` becomes `"一、总体要求"`, `"1. 字体要求"` becomes
/// `"1.字体要求"`, `"（一） 加强培训"` becomes `"（一）加强培训"`. Text
/// without a marker prefix is returned unchanged. Idempotent: normalized
/// text has no marker-space prefix left to match.
///
/// Applied to list item and paragraph text before inline formatting, never
/// to headings.
pub fn normalize_enumeration(text: &str) -> String {
    ENUM_MARKER.replace(text, "$1").into_owned()
}
