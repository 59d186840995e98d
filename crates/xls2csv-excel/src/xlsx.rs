//! XML-zip (Office Open XML) workbooks
//!
//! Floats whose fractional part is zero render as integers (`1.0` becomes
//! `1`); only non-zero fractions survive. Dates render as
//! `YYYY-MM-DD HH:MM:SS`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use xls2csv_core::{CellValue, SheetSource, WorkbookAdapter};

use crate::error::{ExcelError, ExcelResult};
use crate::sheet::{common_value, RangeSheet};

/// Largest magnitude rendered as an integer
const MAX_WHOLE_FLOAT: f64 = 1e15;

/// An opened `.xlsx` workbook
pub struct XlsxWorkbook {
    inner: Xlsx<BufReader<File>>,
}

impl XlsxWorkbook {
    /// Open an `.xlsx` file
    pub fn open<P: AsRef<Path>>(path: P) -> ExcelResult<Self> {
        let inner: Xlsx<_> = open_workbook(path.as_ref())?;
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

impl WorkbookAdapter for XlsxWorkbook {
    fn format_name(&self) -> &'static str {
        "xlsx"
    }

    fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names()
    }

    fn sheet(&mut self, name: &str) -> xls2csv_core::Result<Box<dyn SheetSource>> {
        Ok(Box::new(self.range_sheet(name)?))
    }
}

pub(crate) fn cell_value(data: &Data) -> CellValue {
    if let Some(value) = common_value(data) {
        return value;
    }
    match data {
        Data::Int(n) => CellValue::Int(*n),
        Data::Float(f) => number(*f),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => CellValue::text(datetime.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => number(dt.as_f64()),
        },
        _ => CellValue::Null,
    }
}

fn number(f: f64) -> CellValue {
    if f.fract() == 0.0 && f.abs() < MAX_WHOLE_FLOAT {
        CellValue::Int(f as i64)
    } else {
        CellValue::Float(f)
    }
}
