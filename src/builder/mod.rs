//! Document building: classification driven to a styled command stream.
//!
//! The builder is the only component with side effects, and those are
//! confined to the sink it is handed. One call to
//! [`DocumentBuilder::build`] performs one whole conversion: fresh
//! [`BuildState`], one pass over the input, one command stream out.

mod command;
mod sink;

pub use command::{
    BuildCommand, ParagraphCommand, ParagraphFormat, StyledRun, TableCommand, TableRowCommand,
};
pub use sink::{DocumentSink, RecordingSink};

use crate::error::{Error, Result};
use crate::model::{Block, BlockKind, TableData};
use crate::parser::{BuildState, LineClassifier};
use crate::style::{style_for, table_row_style, PageMargins, TableRowKind};

/// Drives the classifier over a whole input and emits styled build
/// commands to a sink.
///
/// Single-threaded and synchronous: the whole conversion is one pure
/// CPU-bound pass, and any sink failure aborts it without retry.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder;

impl DocumentBuilder {
    /// Create a builder.
    pub fn new() -> Self {
        Self
    }

    /// Convert Markdown text into a command stream on `sink`.
    ///
    /// Emits `BeginDocument` with the standard page margins, one command
    /// per classified block, and `EndDocument`. On error the stream is
    /// incomplete and must be discarded by the caller.
    pub fn build(&self, text: &str, sink: &mut dyn DocumentSink) -> Result<()> {
        let mut state = BuildState::new();
        let mut classifier = LineClassifier::new(text);

        sink.emit(BuildCommand::BeginDocument {
            margins: PageMargins::standard(),
        })?;

        while let Some(block) = classifier.next_block(&mut state) {
            self.emit_block(&block, sink)?;
        }

        sink.emit(BuildCommand::EndDocument)?;
        Ok(())
    }

    fn emit_block(&self, block: &Block, sink: &mut dyn DocumentSink) -> Result<()> {
        match block.kind {
            BlockKind::Separator => sink.emit(BuildCommand::BlankParagraph),
            BlockKind::Table => {
                let table = block
                    .table
                    .as_ref()
                    .ok_or_else(|| Error::MalformedTable("table block without data".into()))?;
                self.emit_table(table, sink)
            }
            kind => {
                let spec = style_for(kind)
                    .ok_or_else(|| Error::Other(format!("no style rule for {:?}", kind)))?;

                let runs = block
                    .runs
                    .iter()
                    .filter(|run| !run.text.is_empty())
                    .map(|run| StyledRun::resolve(run, spec))
                    .collect();

                sink.emit(BuildCommand::Paragraph(ParagraphCommand {
                    kind,
                    runs,
                    format: ParagraphFormat::from(spec),
                }))
            }
        }
    }

    fn emit_table(&self, table: &TableData, sink: &mut dyn DocumentSink) -> Result<()> {
        if table.column_count() == 0 {
            return Err(Error::MalformedTable(
                "header parsed to an empty cell list".into(),
            ));
        }

        // A capture with no body rows is dropped rather than rendered as a
        // lone header.
        if table.row_count() == 0 {
            log::debug!("skipping table with no body rows");
            return Ok(());
        }

        let mut rows = Vec::with_capacity(1 + table.row_count());
        rows.push(TableRowCommand {
            kind: TableRowKind::Header,
            cells: table.header.clone(),
            style: table_row_style(TableRowKind::Header).clone(),
        });
        for cells in table.normalized_rows() {
            rows.push(TableRowCommand {
                kind: TableRowKind::Body,
                cells,
                style: table_row_style(TableRowKind::Body).clone(),
            });
        }

        sink.emit(BuildCommand::Table(TableCommand {
            columns: table.column_count(),
            rows,
        }))?;

        // A spacer follows every rendered table.
        sink.emit(BuildCommand::BlankParagraph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSink {
        emitted: usize,
        fail_at: usize,
    }

    impl DocumentSink for FailingSink {
        fn emit(&mut self, _command: BuildCommand) -> Result<()> {
            if self.emitted == self.fail_at {
                return Err(Error::Serialization("sink rejected command".into()));
            }
            self.emitted += 1;
            Ok(())
        }
    }

    #[test]
    fn test_build_brackets_stream() {
        let mut sink = RecordingSink::new();
        DocumentBuilder::new().build("正文。", &mut sink).unwrap();

        let commands = sink.into_commands();
        assert!(matches!(
            commands.first(),
            Some(BuildCommand::BeginDocument { .. })
        ));
        assert!(matches!(commands.last(), Some(BuildCommand::EndDocument)));
    }

    #[test]
    fn test_sink_error_aborts_build() {
        let mut sink = FailingSink {
            emitted: 0,
            fail_at: 1,
        };
        let result = DocumentBuilder::new().build("# 标题\n\n正文。", &mut sink);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_table_followed_by_spacer() {
        let mut sink = RecordingSink::new();
        DocumentBuilder::new()
            .build("a | b\n---|---\n1 | 2", &mut sink)
            .unwrap();

        let commands = sink.into_commands();
        let table_at = commands
            .iter()
            .position(|c| matches!(c, BuildCommand::Table(_)))
            .unwrap();
        assert_eq!(commands[table_at + 1], BuildCommand::BlankParagraph);
    }

    #[test]
    fn test_rowless_table_dropped() {
        let mut sink = RecordingSink::new();
        DocumentBuilder::new()
            .build("a | b\n---|---\n\n正文", &mut sink)
            .unwrap();

        let commands = sink.into_commands();
        assert!(!commands.iter().any(|c| matches!(c, BuildCommand::Table(_))));
        // The paragraph after the capture still lands.
        assert!(commands.iter().any(|c| matches!(c, BuildCommand::Paragraph(_))));
    }

    #[test]
    fn test_zero_column_table_rejected() {
        let table = TableData::new(vec![], vec![vec!["x".into()]]);
        let mut sink = RecordingSink::new();
        let result =
            DocumentBuilder::new().emit_table(&table, &mut sink);
        assert!(matches!(result, Err(Error::MalformedTable(_))));
    }
}
