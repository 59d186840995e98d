//! # xls2csv-csv
//!
//! Writes encoded rows as delimited text: fields joined by the field
//! delimiter, each record followed by the record delimiter.

mod error;
mod options;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvWriteOptions, QuoteStyle};
pub use writer::CsvWriter;
