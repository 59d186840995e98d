//! Error types for xls2csv-core

use thiserror::Error;

use crate::escape::Unmappable;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid process-wide configuration. Always fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The field delimiter is the empty string
    #[error("field delimiter must not be empty")]
    EmptyFieldDelimiter,

    /// The record delimiter is the empty string
    #[error("record delimiter must not be empty")]
    EmptyRecordDelimiter,

    /// Field and record delimiter encode to the same bytes
    #[error("field and record delimiter are both {0:?}")]
    DelimiterCollision(String),

    /// Encoding label not known to the WHATWG encoding registry
    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),

    /// A delimiter has no representation in the output encoding
    #[error("delimiter {delimiter:?} cannot be encoded as {encoding}")]
    UnencodableDelimiter {
        delimiter: String,
        encoding: &'static str,
    },

    /// The delimiter set could not be compiled into an escape pattern
    #[error("cannot build escape pattern: {0}")]
    Pattern(String),
}

/// Errors raised while normalizing a sheet
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration was rejected
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A row reported more columns than the sheet's reference width.
    /// Aborts the conversion of the sheet.
    #[error("Too many columns in row {row} of sheet '{sheet}' ({width}, expected {expected})")]
    RowTooWide {
        /// 1-based row number
        row: usize,
        sheet: String,
        width: usize,
        expected: usize,
    },

    /// A cell holds text the output encoding cannot represent.
    /// Aborts the conversion of the sheet.
    #[error("Cannot encode row {row} of sheet '{sheet}': {source}")]
    Unencodable {
        /// 1-based row number
        row: usize,
        sheet: String,
        #[source]
        source: Unmappable,
    },

    /// Failure reported by a workbook adapter (I/O, corrupt file, ...)
    #[error("workbook error: {0}")]
    Adapter(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap an adapter-specific error
    pub fn adapter<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Adapter(Box::new(err))
    }
}
