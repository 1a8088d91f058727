//! Error types for the gongwen library.

use std::io;
use thiserror::Error;

/// Result type alias for gongwen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a styled document.
///
/// Classification itself is total and never fails on content; these
/// variants cover the boundaries of a conversion: reading input and
/// handing the command stream to a serializer.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input could not be read as UTF-8 Markdown text.
    #[error("Input read error: {0}")]
    InputRead(String),

    /// A captured table cannot be emitted (e.g. zero columns).
    #[error("Malformed table: {0}")]
    MalformedTable(String),

    /// The document sink rejected a build command.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
