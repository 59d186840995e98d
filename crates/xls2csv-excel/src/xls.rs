//! Legacy binary (BIFF) workbooks
//!
//! Numbers come out of this format as floats, so a whole number renders
//! with a fractional part (`1` becomes `1.0`). Dates render as their serial
//! number.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xls};
use xls2csv_core::{CellValue, SheetSource, WorkbookAdapter};

use crate::error::{ExcelError, ExcelResult};
use crate::sheet::{common_value, RangeSheet};

/// An opened `.xls` workbook
pub struct XlsWorkbook {
    inner: Xls<BufReader<File>>,
}

impl XlsWorkbook {
    /// Open an `.xls` file
    pub fn open<P: AsRef<Path>>(path: P) -> ExcelResult<Self> {
        let inner: Xls<_> = open_workbook(path.as_ref())?;
        Ok(Self { inner })
    }

    /// Decode a sheet by name
    pub fn range_sheet(&mut self, name: &str) -> ExcelResult<RangeSheet> {
        let range = self
            .inner
            .worksheet_range(name)
            .map_err(ExcelError::from)?;
        Ok(RangeSheet::new(name.to_string(), range, cell_value))
    }
}

impl WorkbookAdapter for XlsWorkbook {
    fn format_name(&self) -> &'static str {
        "xls"
    }

    fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names()
    }

    fn sheet(&mut self, name: &str) -> xls2csv_core::Result<Box<dyn SheetSource>> {
        Ok(Box::new(self.range_sheet(name)?))
    }
}

/// Every number is a float here, integers included
pub(crate) fn cell_value(data: &Data) -> CellValue {
    if let Some(value) = common_value(data) {
        return value;
    }
    match data {
        Data::Int(n) => CellValue::Float(*n as f64),
        Data::Float(f) => CellValue::Float(*f),
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        _ => CellValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn test_whole_numbers_keep_fraction() {
        assert_eq!(cell_value(&Data::Float(1.0)).to_string(), "1.0");
        assert_eq!(cell_value(&Data::Int(42)).to_string(), "42.0");
        assert_eq!(cell_value(&Data::Float(0.25)).to_string(), "0.25");
    }

    #[test]
    fn test_other_values() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Null);
        assert_eq!(cell_value(&Data::String("x".into())), CellValue::text("x"));
        assert_eq!(cell_value(&Data::Bool(false)).to_string(), "FALSE");
        assert_eq!(
            cell_value(&Data::Error(CellErrorType::Div0)).to_string(),
            "#DIV/0!"
        );
    }
}
