//! # xls2csv
//!
//! Converts spreadsheet workbooks (`.xls`, `.xlsx`) into delimited text, one
//! file per non-blank worksheet.
//!
//! Cell values are escaped so the output can be split on the raw delimiters:
//! the field delimiter, the record delimiter and carriage returns inside a
//! cell become octal escapes (`,` is written as `\054`). Each sheet's width is
//! fixed by its first populated row; shorter rows are padded, longer rows
//! abort the sheet.
//!
//! ## Example
//!
//! ```rust,no_run
//! use xls2csv::prelude::*;
//!
//! let config = Config::builder()
//!     .field_delimiter("\t")
//!     .file_ext(".tsv")
//!     .build()
//!     .unwrap();
//!
//! // Writes data/Book/<sheet>.tsv for every non-blank sheet
//! let report = convert("data/Book.xlsx", &config).unwrap();
//! println!("{} files, {} blank sheets", report.written.len(), report.skipped.len());
//! ```

pub mod convert;
pub mod error;
pub mod layout;
pub mod prelude;

pub use convert::{convert, convert_all, BatchReport, ConversionReport, Converter};
pub use error::{Error, Result};

pub use xls2csv_core::config;
pub use xls2csv_core::Error as CoreError;

pub use xls2csv_core::{
    is_blank_sheet, CellValue, Config, ConfigBuilder, ConfigError, Delimiters, EncodedRow,
    Escaper, MemorySheet, MemoryWorkbook, NormalizedRow, RawRow, RowEncoder, SheetNormalizer,
    SheetSource, Unmappable, WidthWarning, WorkbookAdapter,
};
pub use xls2csv_csv::{CsvError, CsvWriteOptions, CsvWriter, QuoteStyle};
pub use xls2csv_excel::{open_workbook, ExcelError, Format, XlsWorkbook, XlsxWorkbook};
