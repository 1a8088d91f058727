//! Table data types.

use serde::{Deserialize, Serialize};

/// A pipe table captured from a contiguous run of input lines.
///
/// The column count is defined by the header. Body rows are stored exactly
/// as parsed; width normalization against the header happens when the rows
/// are emitted, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    /// Header cells, in column order.
    pub header: Vec<String>,

    /// Body rows, each a list of cells in column order.
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    /// Create a table from a header and body rows.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Number of columns, defined by the header width.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }

    /// Get a body row normalized to the header width: extra cells dropped,
    /// missing trailing cells blank.
    pub fn normalized_row(&self, index: usize) -> Option<Vec<String>> {
        let row = self.rows.get(index)?;
        Some(self.normalize(row))
    }

    /// Iterate over body rows, each normalized to the header width.
    pub fn normalized_rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.rows.iter().map(|row| self.normalize(row))
    }

    fn normalize(&self, row: &[String]) -> Vec<String> {
        let width = self.column_count();
        let mut cells: Vec<String> = row.iter().take(width).cloned().collect();
        cells.resize(width, String::new());
        cells
    }

    /// Get plain text representation, tab-separated cells, one line per row.
    pub fn plain_text(&self) -> String {
        std::iter::once(&self.header)
            .chain(self.rows.iter())
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_column_count_from_header() {
        let table = TableData::new(strings(&["字段", "值"]), vec![strings(&["A", "1"])]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_normalize_pads_short_rows() {
        let table = TableData::new(strings(&["a", "b", "c"]), vec![strings(&["1"])]);
        assert_eq!(
            table.normalized_row(0),
            Some(strings(&["1", "", ""]))
        );
    }

    #[test]
    fn test_normalize_truncates_long_rows() {
        let table = TableData::new(strings(&["a", "b"]), vec![strings(&["1", "2", "3"])]);
        assert_eq!(table.normalized_row(0), Some(strings(&["1", "2"])));
    }

    #[test]
    fn test_stored_rows_unmodified() {
        // Normalization is render-time only; the parse keeps cells as split.
        let table = TableData::new(strings(&["a", "b"]), vec![strings(&["1", "2", "3"])]);
        assert_eq!(table.rows[0].len(), 3);
    }

    #[test]
    fn test_plain_text() {
        let table = TableData::new(
            strings(&["字段", "值"]),
            vec![strings(&["A", "1"]), strings(&["B", "2"])],
        );
        assert_eq!(table.plain_text(), "字段\t值\nA\t1\nB\t2");
    }
}
