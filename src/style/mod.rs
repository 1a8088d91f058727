//! Styling types and the rule table for official-document formatting.
//!
//! The rule table is static data, not branching logic: the builder asks
//! [`style_for`] (or [`table_row_style`] for table rows) and applies what
//! it gets back.

mod rules;
mod spec;

pub use rules::{
    style_for, table_row_style, TableRowKind, FIRST_LINE_INDENT, LINE_SPACING, SIZE_BODY,
    SIZE_TITLE, TABLE_CELL_SPACING,
};
pub use spec::{fonts, Alignment, PageMargins, StyleSpec};
