//! Pipe table extraction.
//!
//! A table capture is a contiguous lookahead region: a candidate header
//! line, the separator line under it, and every following line that still
//! looks like a row. The capture reports how many lines it consumed so the
//! classifier's cursor can advance past the whole region.

use crate::model::TableData;

use super::patterns::TABLE_SEPARATOR;

/// Try to capture a table starting at `at`.
///
/// The entry condition is the current line containing a pipe and the
/// immediately following line matching the table separator pattern.
/// Returns the parsed table and the number of lines consumed, or `None`
/// when the lookahead window is not a table.
pub fn capture_table(lines: &[&str], at: usize) -> Option<(TableData, usize)> {
    let current = lines.get(at)?.trim();
    if !current.contains('|') {
        return None;
    }
    let next = lines.get(at + 1)?.trim();
    if !TABLE_SEPARATOR.is_match(next) {
        return None;
    }

    let header = parse_row(current);
    // Header line plus the separator line.
    let mut consumed = 2;

    let mut rows = Vec::new();
    while let Some(line) = lines.get(at + consumed) {
        let row_text = line.trim();
        if row_text.is_empty() || !row_text.contains('|') {
            break;
        }
        rows.push(parse_row(row_text));
        consumed += 1;
    }

    log::debug!(
        "table capture at line {}: {} columns, {} rows, {} lines consumed",
        at,
        header.len(),
        rows.len(),
        consumed
    );

    Some((TableData::new(header, rows), consumed))
}

/// Split one table line into trimmed cells.
///
/// Strips one leading and one trailing pipe if present, then splits the
/// remainder on `|`.
pub fn parse_row(line: &str) -> Vec<String> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);
    line.split('|').map(|cell| cell.trim().to_string()).collect()
}
