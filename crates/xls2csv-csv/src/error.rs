//! Writer error types

use thiserror::Error;

/// Result type for writer operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while writing delimited text
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The row stream failed part way. Output written so far is incomplete.
    #[error(transparent)]
    Core(#[from] xls2csv_core::Error),
}
