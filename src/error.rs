//! Error types for csv-table.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, writing or indexing tables.
#[derive(Error, Debug)]
pub enum CsvError {
    /// Source or destination file could not be opened.
    #[error("Failed to open '{}': {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was opened but its contents could not be read as text.
    #[error("Failed to read '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A write or flush left the output stream in a failed state.
    #[error("Failed to write '{}': {source}", .path.display())]
    StreamWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Checked accessor called with an index past the end.
    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A field or row delimiter was empty at construction.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Parser configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias for csv-table operations.
pub type Result<T> = std::result::Result<T, CsvError>;
