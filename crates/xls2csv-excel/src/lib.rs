//! # xls2csv-excel
//!
//! Workbook adapters for the two supported spreadsheet formats, both backed
//! by calamine:
//!
//! - [`XlsWorkbook`] - legacy binary `.xls`
//! - [`XlsxWorkbook`] - XML-zip `.xlsx`
//!
//! The two render numbers differently and this is kept as is: `.xls` numbers
//! always carry a fractional part, `.xlsx` whole numbers never do.

mod error;
mod sheet;
mod xls;
mod xlsx;

use std::path::Path;

use xls2csv_core::WorkbookAdapter;

pub use error::{ExcelError, ExcelResult};
pub use sheet::RangeSheet;
pub use xls::XlsWorkbook;
pub use xlsx::XlsxWorkbook;

/// Spreadsheet format, selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Legacy binary workbook
    Xls,
    /// Office Open XML workbook
    Xlsx,
}

impl Format {
    /// Pick the format from a (case-insensitive) extension without the dot
    pub fn from_extension(ext: &str) -> ExcelResult<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "xls" => Ok(Format::Xls),
            "xlsx" => Ok(Format::Xlsx),
            _ => Err(ExcelError::UnsupportedFormat(ext.to_string())),
        }
    }

    /// Pick the format from a path's extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> ExcelResult<Self> {
        let ext = path
            .as_ref()
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_extension(&ext)
    }
}

/// Open `path` with the adapter its extension selects
pub fn open_workbook<P: AsRef<Path>>(path: P) -> ExcelResult<Box<dyn WorkbookAdapter>> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    log::debug!("Opening '{}' as {:?}", path.display(), format);

    let workbook: Box<dyn WorkbookAdapter> = match format {
        Format::Xls => Box::new(XlsWorkbook::open(path)?),
        Format::Xlsx => Box::new(XlsxWorkbook::open(path)?),
    };
    Ok(workbook)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_extension("xls").unwrap(), Format::Xls);
        assert_eq!(Format::from_extension("XLS").unwrap(), Format::Xls);
        assert_eq!(Format::from_extension("xlsx").unwrap(), Format::Xlsx);
        assert_eq!(Format::from_extension("XlsX").unwrap(), Format::Xlsx);
    }

    #[test]
    fn test_only_xls_and_xlsx_are_recognised() {
        for ext in ["xlsm", "xlsb", "csv"] {
            let err = Format::from_extension(ext).unwrap_err();
            assert_eq!(err.to_string(), format!("unsupported file type: {ext}"));
        }
    }

    #[test]
    fn test_unsupported_keeps_original_case() {
        let err = Format::from_path("data/Report.ODS").unwrap_err();
        assert!(matches!(err, ExcelError::UnsupportedFormat(ref ext) if ext == "ODS"));
        assert_eq!(err.to_string(), "unsupported file type: ODS");
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let err = Format::from_path("data/noext").unwrap_err();
        assert!(matches!(err, ExcelError::UnsupportedFormat(ref ext) if ext.is_empty()));
    }

    #[test]
    fn test_open_missing_file_fails() {
        assert!(open_workbook("does/not/exist.xlsx").is_err());
    }
}
