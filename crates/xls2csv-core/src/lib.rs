//! # xls2csv-core
//!
//! The row normalization and escaping engine behind xls2csv.
//!
//! - [`Escaper`] - octal-escapes delimiter and control characters in a cell
//! - [`RowEncoder`] - escapes a whole row and pads it to a fixed width
//! - [`SheetNormalizer`] - fixes a sheet's width from its first populated row
//! - [`is_blank_sheet`] - decides whether a sheet is whitespace-only
//! - [`WorkbookAdapter`], [`SheetSource`] - what a format adapter must provide
//!
//! ## Example
//!
//! ```rust
//! use xls2csv_core::{is_blank_sheet, CellValue, Config, SheetNormalizer};
//!
//! let config = Config::builder().build().unwrap();
//! let rows = vec![
//!     vec![CellValue::text("a"), CellValue::text("b,c")],
//!     vec![CellValue::text("d")],
//! ];
//!
//! let normalizer = SheetNormalizer::new("Sheet1", rows.clone(), config.escaper());
//! assert!(!is_blank_sheet(normalizer).unwrap());
//!
//! let encoded: Vec<_> = SheetNormalizer::new("Sheet1", rows, config.escaper())
//!     .map(|r| r.unwrap().row)
//!     .collect();
//! assert_eq!(encoded[0].cells()[1].as_deref(), Some(&b"b\\054c"[..]));
//! assert_eq!(encoded[1].len(), 2);
//! ```

pub mod config;
pub mod emptiness;
pub mod encode;
pub mod error;
pub mod escape;
pub mod normalize;
pub mod source;
pub mod value;

pub use config::{Config, ConfigBuilder, Delimiters};
pub use emptiness::{is_blank_sheet, row_has_content};
pub use encode::{EncodedRow, RowEncoder, WidthWarning};
pub use error::{ConfigError, Error, Result};
pub use escape::{EncodedCell, Escaper, Unmappable, ESCAPE_MARKER};
pub use normalize::{NormalizedRow, SheetNormalizer};
pub use source::{MemorySheet, MemoryWorkbook, SheetSource, WorkbookAdapter};
pub use value::{CellValue, RawRow};
