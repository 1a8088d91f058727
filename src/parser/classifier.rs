//! Line classification.
//!
//! The classifier walks an indexed line sequence with an explicit cursor
//! and assigns every line a structural role in a fixed priority order.
//! Table detection runs before heading detection; reordering the cascade
//! changes observable classification, so the order here is load-bearing.

use crate::model::{Block, BlockKind};

use super::enumeration::normalize_enumeration;
use super::inline::{parse_inline, strip_marks};
use super::patterns::{HEADING1, HEADING2, HEADING3, HEADING4, LIST_ITEM, SEPARATOR};
use super::table::capture_table;

/// Per-conversion build state, threaded explicitly through classification.
///
/// Owned by one conversion from start to finish; a fresh value must be used
/// for every document so the title guard resets.
#[derive(Debug, Clone, Default)]
pub struct BuildState {
    /// Whether the document title has been assigned. The first `# ` line
    /// and only that one becomes the title.
    pub title_consumed: bool,
}

impl BuildState {
    /// Create the initial state for one conversion.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Classifies input lines into typed blocks.
///
/// The cursor may advance several lines in one step when a table capture
/// consumes its lookahead region. Classification is total: every non-blank,
/// non-separator line yields exactly one block.
pub struct LineClassifier<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
    pending: Option<Block>,
}

impl<'a> LineClassifier<'a> {
    /// Create a classifier over the lines of a text buffer.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            cursor: 0,
            pending: None,
        }
    }

    /// Current cursor position (0-based line index).
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Total number of input lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Produce the next block, advancing the cursor past every consumed
    /// line. Returns `None` at end of input.
    pub fn next_block(&mut self, state: &mut BuildState) -> Option<Block> {
        if let Some(block) = self.pending.take() {
            return Some(block);
        }

        while self.cursor < self.lines.len() {
            let text = self.lines[self.cursor].trim();

            // Blank lines and horizontal rules emit nothing.
            if text.is_empty() || SEPARATOR.is_match(text) {
                self.cursor += 1;
                continue;
            }

            // Table lookahead runs before any heading check.
            if text.contains('|') {
                if let Some((table, consumed)) = capture_table(&self.lines, self.cursor) {
                    let source = self.lines[self.cursor..self.cursor + consumed].join("\n");
                    self.cursor += consumed;
                    return Some(Block::table(source, table));
                }
            }

            // The first `# ` line becomes the title, trailed by a blank
            // spacer. Later `# ` lines fail the guard and fall through the
            // remaining arms to the paragraph fallback, marker intact.
            if let Some(caps) = HEADING1.captures(text) {
                if !state.title_consumed {
                    state.title_consumed = true;
                    self.cursor += 1;
                    self.pending = Some(Block::separator());
                    log::debug!("title at line {}", self.cursor - 1);
                    return Some(Block::text(BlockKind::Title, strip_marks(&caps[1])));
                }
            }

            if let Some(caps) = HEADING2.captures(text) {
                self.cursor += 1;
                return Some(Block::text(BlockKind::Heading2, strip_marks(&caps[1])));
            }

            if let Some(caps) = HEADING3.captures(text) {
                self.cursor += 1;
                return Some(Block::text(BlockKind::Heading3, strip_marks(&caps[1])));
            }

            if let Some(caps) = HEADING4.captures(text) {
                self.cursor += 1;
                return Some(Block::text(BlockKind::Heading4, strip_marks(&caps[1])));
            }

            if let Some(caps) = LIST_ITEM.captures(text) {
                let item = normalize_enumeration(&caps[1]);
                let runs = parse_inline(&item);
                self.cursor += 1;
                return Some(Block::with_runs(BlockKind::ListItem, item, runs));
            }

            // Fallback: plain body text.
            let body = normalize_enumeration(text);
            let runs = parse_inline(&body);
            self.cursor += 1;
            return Some(Block::with_runs(BlockKind::Paragraph, body, runs));
        }

        None
    }
}

/// Classify a whole text buffer into its block sequence.
///
/// Drives a fresh classifier and a fresh [`BuildState`] to exhaustion.
/// Never fails: malformed input degrades to paragraphs.
pub fn classify_str(text: &str) -> Vec<Block> {
    let mut state = BuildState::new();
    let mut classifier = LineClassifier::new(text);
    let mut blocks = Vec::new();
    while let Some(block) = classifier.next_block(&mut state) {
        blocks.push(block);
    }
    blocks
}
