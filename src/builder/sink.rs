//! The document sink seam.

use crate::error::Result;

use super::BuildCommand;

/// Consumer of the build command stream.
///
/// The external serializer implements this trait to package the stream
/// into the final on-disk document format. The contract is all-or-nothing:
/// when `emit` returns an error the builder aborts immediately, and the
/// caller must discard whatever the sink accumulated — no partial document
/// is ever committed.
pub trait DocumentSink {
    /// Consume one build command.
    fn emit(&mut self, command: BuildCommand) -> Result<()>;
}

/// Sink that records the command stream in memory.
///
/// Used by the tests and the CLI; also a reasonable starting point for a
/// serializer that needs the whole stream before writing anything.
#[derive(Debug, Default)]
pub struct RecordingSink {
    commands: Vec<BuildCommand>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far.
    pub fn commands(&self) -> &[BuildCommand] {
        &self.commands
    }

    /// Consume the sink and return the recorded stream.
    pub fn into_commands(self) -> Vec<BuildCommand> {
        self.commands
    }
}

impl DocumentSink for RecordingSink {
    fn emit(&mut self, command: BuildCommand) -> Result<()> {
        self.commands.push(command);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_preserves_order() {
        let mut sink = RecordingSink::new();
        sink.emit(BuildCommand::BlankParagraph).unwrap();
        sink.emit(BuildCommand::EndDocument).unwrap();

        let commands = sink.into_commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0], BuildCommand::BlankParagraph);
        assert_eq!(commands[1], BuildCommand::EndDocument);
    }
}
