//! Workbook adapter capability traits
//!
//! An adapter opens one workbook, lists its sheets, and hands out sheets
//! whose rows can be enumerated any number of times. Emptiness detection and
//! writing each take their own pass, so re-enumeration must be cheap: an
//! adapter that can only stream once has to buffer the sheet itself.

use crate::error::Result;
use crate::value::RawRow;

/// One worksheet with re-enumerable rows
pub trait SheetSource {
    /// Display name of the sheet
    fn name(&self) -> &str;

    /// A fresh pass over the sheet's raw rows, in source order
    fn rows(&self) -> Box<dyn Iterator<Item = RawRow> + '_>;
}

/// Format-specific access to an opened workbook
pub trait WorkbookAdapter {
    /// Short name of the underlying format, for diagnostics
    fn format_name(&self) -> &'static str;

    /// Sheet names in workbook order
    fn sheet_names(&self) -> Vec<String>;

    /// Load a sheet by name
    fn sheet(&mut self, name: &str) -> Result<Box<dyn SheetSource>>;
}

/// A sheet held in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySheet {
    pub name: String,
    pub rows: Vec<RawRow>,
}

impl MemorySheet {
    pub fn new<S: Into<String>>(name: S, rows: Vec<RawRow>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

impl SheetSource for MemorySheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn rows(&self) -> Box<dyn Iterator<Item = RawRow> + '_> {
        Box::new(self.rows.iter().cloned())
    }
}

/// A workbook held in memory, mostly useful for tests and embedding
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryWorkbook {
    sheets: Vec<MemorySheet>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sheet
    pub fn with_sheet(mut self, sheet: MemorySheet) -> Self {
        self.sheets.push(sheet);
        self
    }
}

impl WorkbookAdapter for MemoryWorkbook {
    fn format_name(&self) -> &'static str {
        "memory"
    }

    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    fn sheet(&mut self, name: &str) -> Result<Box<dyn SheetSource>> {
        let sheet = self
            .sheets
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| {
                crate::Error::adapter(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no sheet named '{name}'"),
                ))
            })?;
        Ok(Box::new(sheet))
    }
}
