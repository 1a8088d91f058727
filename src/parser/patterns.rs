//! The fixed recognizer set for the supported Markdown subset.
//!
//! Every recognizer matches an entire trimmed line unless noted. The
//! `*_AT` variants are anchored forms used by the inline scanner to test
//! for a match starting exactly at the current position.

use once_cell::sync::Lazy;
use regex::Regex;

/// `# ` title/first-level heading: one hash, spaces, text.
pub static HEADING1: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\s+(.+)$").unwrap());

/// `## ` heading.
pub static HEADING2: Lazy<Regex> = Lazy::new(|| Regex::new(r"^##\s+(.+)$").unwrap());

/// `### ` heading.
pub static HEADING3: Lazy<Regex> = Lazy::new(|| Regex::new(r"^###\s+(.+)$").unwrap());

/// `#### ` heading.
pub static HEADING4: Lazy<Regex> = Lazy::new(|| Regex::new(r"^####\s+(.+)$").unwrap());

/// Unordered list item: optional leading whitespace, a marker, spaces, text.
pub static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[-*+☑]\s+(.+)$").unwrap());

/// Horizontal rule: three or more of `-`, `*`, `_` and nothing else.
pub static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*_]{3,}$").unwrap());

/// Table separator row prefix: optional leading pipe, then dashes/colons
/// followed by a pipe. Matched as a prefix, not a full line.
pub static TABLE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\|?\s*[-:]+\s*\|").unwrap());

/// Enumeration marker prefix followed by exactly one space: a Chinese
/// numeral with `、`, digits with `.`, or a parenthesized Chinese numeral.
pub static ENUM_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([一二三四五六七八九十]+、|\d+\.|（[一二三四五六七八九十]+）) ").unwrap());

/// Bold span, non-greedy.
pub static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// Bold span anchored at the scan position.
pub static BOLD_AT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*(.+?)\*\*").unwrap());

/// Italic span, non-greedy. Tried only after [`BOLD`] at every position.
pub static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());

/// Italic span anchored at the scan position.
pub static ITALIC_AT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*(.+?)\*").unwrap());

/// Backtick code span, stripped from heading text only.
pub static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.+?)`").unwrap());

/// Strikethrough span, stripped from heading text only.
pub static STRIKETHROUGH: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.+?)~~").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_patterns() {
        let caps = HEADING1.captures("# 关于加强公文格式管理的通知").unwrap();
        assert_eq!(&caps[1], "关于加强公文格式管理的通知");

        assert!(HEADING2.is_match("## 一、总体要求"));
        assert!(HEADING3.is_match("### （一）字体"));
        assert!(HEADING4.is_match("#### 细则"));

        // A deeper marker still satisfies the shallower patterns; the
        // classifier's priority order disambiguates.
        assert!(HEADING1.is_match("## 标题"));
    }

    #[test]
    fn test_list_item_pattern() {
        assert!(LIST_ITEM.is_match("- 第一项"));
        assert!(LIST_ITEM.is_match("  * 缩进项"));
        assert!(LIST_ITEM.is_match("+ 加号项"));
        assert!(LIST_ITEM.is_match("☑ 勾选项"));
        assert!(!LIST_ITEM.is_match("-无空格"));
    }

    #[test]
    fn test_separator_pattern() {
        assert!(SEPARATOR.is_match("---"));
        assert!(SEPARATOR.is_match("*****"));
        assert!(SEPARATOR.is_match("___"));
        assert!(!SEPARATOR.is_match("--"));
        assert!(!SEPARATOR.is_match("--- text"));
    }

    #[test]
    fn test_table_separator_pattern() {
        assert!(TABLE_SEPARATOR.is_match("---|---"));
        assert!(TABLE_SEPARATOR.is_match("| --- | --- |"));
        assert!(TABLE_SEPARATOR.is_match(":--|--:"));
        // A bare rule has no pipe, so it is not a table separator.
        assert!(!TABLE_SEPARATOR.is_match("---"));
    }

    #[test]
    fn test_enum_marker_pattern() {
        assert!(ENUM_MARKER.is_match("一、 总体要求"));
        assert!(ENUM_MARKER.is_match("1. 字体要求"));
        assert!(ENUM_MARKER.is_match("（一） 加强培训"));
        assert!(!ENUM_MARKER.is_match("一、总体要求"));
    }

    #[test]
    fn test_emphasis_patterns() {
        let caps = BOLD.captures("正文**重要**信息").unwrap();
        assert_eq!(&caps[1], "重要");

        let caps = ITALIC.captures("正文*强调*信息").unwrap();
        assert_eq!(&caps[1], "强调");

        assert!(BOLD_AT.is_match("**重要**信息"));
        assert!(!BOLD_AT.is_match("正文**重要**"));
    }
}
