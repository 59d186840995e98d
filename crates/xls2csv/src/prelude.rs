//! Prelude module - common imports for xls2csv users
//!
//! ```rust
//! use xls2csv::prelude::*;
//! ```

pub use crate::{
    convert, convert_all, BatchReport, CellValue, Config, ConversionReport, Converter, Error,
    MemorySheet, MemoryWorkbook, Result, SheetSource, WorkbookAdapter,
};
