//! Inline emphasis formatting.

use crate::model::Run;

use super::patterns::{BOLD, BOLD_AT, CODE, ITALIC, ITALIC_AT, STRIKETHROUGH};

/// Split a line's text into an ordered sequence of styled runs.
///
/// The scan is leftmost-first: at each position a bold span is tried before
/// an italic span; anything else accumulates into a plain run up to the
/// start of the next possible span. The result is never empty — input with
/// no markers yields one plain run holding the original text.
pub fn parse_inline(text: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        if let Some(caps) = BOLD_AT.captures(rest) {
            runs.push(Run::bold(&caps[1]));
            pos += caps.get(0).map(|m| m.end()).unwrap_or(rest.len());
            continue;
        }

        if let Some(caps) = ITALIC_AT.captures(rest) {
            runs.push(Run::italic(&caps[1]));
            pos += caps.get(0).map(|m| m.end()).unwrap_or(rest.len());
            continue;
        }

        // Plain text runs to the nearer of the next bold or italic span.
        let next_span = [BOLD.find(rest), ITALIC.find(rest)]
            .into_iter()
            .flatten()
            .map(|m| m.start())
            .min()
            .unwrap_or(rest.len());

        if next_span > 0 {
            runs.push(Run::plain(&rest[..next_span]));
            pos += next_span;
        } else {
            // A marker character with no completing span; consume it as is.
            let step = rest.chars().next().map(|c| c.len_utf8()).unwrap_or(1);
            runs.push(Run::plain(&rest[..step]));
            pos += step;
        }
    }

    if runs.is_empty() {
        runs.push(Run::plain(text));
    }
    runs
}

/// Strip emphasis, code, and strikethrough markers from text.
///
/// Used for heading and title text, which take their style from the rule
/// table and never carry per-run emphasis. Body text goes through
/// [`parse_inline`] instead; code and strikethrough markers in body text
/// are left untouched.
pub fn strip_marks(text: &str) -> String {
    let text = BOLD.replace_all(text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = CODE.replace_all(&text, "$1");
    let text = STRIKETHROUGH.replace_all(&text, "$1");
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_split() {
        let runs = parse_inline("正文内容**重要**信息");
        assert_eq!(
            runs,
            vec![
                Run::plain("正文内容"),
                Run::bold("重要"),
                Run::plain("信息"),
            ]
        );
    }

    #[test]
    fn test_run_concat_reproduces_stripped_text() {
        let text = "正文内容**重要**信息";
        let runs = parse_inline(text);
        let joined: String = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(joined, text.replace("**", ""));
    }

    #[test]
    fn test_italic_split() {
        let runs = parse_inline("前*强调*后");
        assert_eq!(
            runs,
            vec![Run::plain("前"), Run::italic("强调"), Run::plain("后")]
        );
    }

    #[test]
    fn test_bold_tried_before_italic() {
        let runs = parse_inline("**加粗**与*斜体*");
        assert_eq!(
            runs,
            vec![
                Run::bold("加粗"),
                Run::plain("与"),
                Run::italic("斜体"),
            ]
        );
    }

    #[test]
    fn test_plain_text_single_run() {
        let runs = parse_inline("没有任何标记的文本");
        assert_eq!(runs, vec![Run::plain("没有任何标记的文本")]);
    }

    #[test]
    fn test_empty_input_yields_one_run() {
        let runs = parse_inline("");
        assert_eq!(runs, vec![Run::plain("")]);
    }

    #[test]
    fn test_triple_asterisk_consumed_by_bold() {
        // Combined emphasis is not supported: the bold span wins and the
        // trailing asterisk survives as plain text.
        let runs = parse_inline("***强调***");
        assert_eq!(runs, vec![Run::bold("*强调"), Run::plain("*")]);
    }

    #[test]
    fn test_unclosed_marker_stays_plain() {
        let runs = parse_inline("悬空**标记");
        let joined: String = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(joined, "悬空**标记");
        assert!(runs.iter().all(|r| !r.bold && !r.italic));
    }

    #[test]
    fn test_strip_marks() {
        assert_eq!(strip_marks("**一级标题**"), "一级标题");
        assert_eq!(strip_marks("*重要*内容"), "重要内容");
        assert_eq!(strip_marks("`代码`与~~删除~~"), "代码与删除");
        assert_eq!(strip_marks("无标记"), "无标记");
    }
}
