//! Workbook adapter error types

use thiserror::Error;

/// Result type for adapter operations
pub type ExcelResult<T> = std::result::Result<T, ExcelError>;

/// Errors that can occur while opening or reading a workbook
#[derive(Debug, Error)]
pub enum ExcelError {
    /// The input extension selects no adapter. Carries the extension as
    /// written, not lowercased.
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error reported by the spreadsheet decoder
    #[error("workbook error: {0}")]
    Calamine(#[from] calamine::Error),
}

impl From<calamine::XlsError> for ExcelError {
    fn from(err: calamine::XlsError) -> Self {
        ExcelError::Calamine(err.into())
    }
}

impl From<calamine::XlsxError> for ExcelError {
    fn from(err: calamine::XlsxError) -> Self {
        ExcelError::Calamine(err.into())
    }
}

impl From<ExcelError> for xls2csv_core::Error {
    fn from(err: ExcelError) -> Self {
        xls2csv_core::Error::adapter(err)
    }
}
