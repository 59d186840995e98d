//! Error types for whole-workbook conversion

use thiserror::Error;
use xls2csv_csv::CsvError;
use xls2csv_excel::ExcelError;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort the conversion of one input
#[derive(Debug, Error)]
pub enum Error {
    /// Normalization failed (e.g. an overlong row) or the adapter failed
    /// while loading a sheet
    #[error(transparent)]
    Core(#[from] xls2csv_core::Error),

    /// The workbook could not be opened
    #[error(transparent)]
    Excel(#[from] ExcelError),

    /// Output could not be written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CsvError> for Error {
    fn from(err: CsvError) -> Self {
        match err {
            CsvError::Core(err) => Error::Core(err),
            CsvError::Io(err) => Error::Io(err),
        }
    }
}
