//! Fixed-width row encoding

use std::fmt;

use crate::error::{Error, Result};
use crate::escape::{EncodedCell, Escaper};
use crate::value::CellValue;

/// A row of escaped, output-encoded cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedRow {
    cells: Vec<EncodedCell>,
}

impl EncodedRow {
    pub fn new(cells: Vec<EncodedCell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[EncodedCell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<EncodedCell> {
        self.cells
    }

    /// Number of fields in the row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-width row
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A row narrower than the sheet's reference width. It was padded with
/// empty fields; conversion continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthWarning {
    /// 1-based row number
    pub row: usize,
    pub sheet: String,
    pub width: usize,
    pub expected: usize,
}

impl fmt::Display for WidthWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Only {} columns in row {} of sheet '{}' (expected {})",
            self.width, self.row, self.sheet, self.expected
        )
    }
}

/// Applies an [`Escaper`] to whole rows
#[derive(Debug, Clone, Copy)]
pub struct RowEncoder<'a> {
    escaper: &'a Escaper,
}

impl<'a> RowEncoder<'a> {
    pub fn new(escaper: &'a Escaper) -> Self {
        Self { escaper }
    }

    /// Encode every cell of `row` without any width check
    pub fn encode(&self, row: &[CellValue], row_number: usize, sheet: &str) -> Result<EncodedRow> {
        self.escape_cells(row, row_number, sheet).map(EncodedRow::new)
    }

    /// Encode `row` to exactly `width` fields.
    ///
    /// Short rows are right-padded with empty text and reported through the
    /// returned [`WidthWarning`]. Wider rows fail with [`Error::RowTooWide`].
    pub fn encode_to_width(
        &self,
        row: &[CellValue],
        width: usize,
        row_number: usize,
        sheet: &str,
    ) -> Result<(EncodedRow, Option<WidthWarning>)> {
        if row.len() > width {
            return Err(Error::RowTooWide {
                row: row_number,
                sheet: sheet.to_string(),
                width: row.len(),
                expected: width,
            });
        }

        let mut cells = self.escape_cells(row, row_number, sheet)?;

        let warning = (row.len() < width).then(|| {
            cells.resize(width, Some(Vec::new()));
            WidthWarning {
                row: row_number,
                sheet: sheet.to_string(),
                width: row.len(),
                expected: width,
            }
        });

        Ok((EncodedRow::new(cells), warning))
    }

    fn escape_cells(
        &self,
        row: &[CellValue],
        row_number: usize,
        sheet: &str,
    ) -> Result<Vec<EncodedCell>> {
        row.iter()
            .map(|v| {
                self.escaper.escape(v).map_err(|source| Error::Unencodable {
                    row: row_number,
                    sheet: sheet.to_string(),
                    source,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Delimiters;
    use encoding_rs::{UTF_8, WINDOWS_1252};
    use pretty_assertions::assert_eq;

    fn escaper() -> Escaper {
        Escaper::new(&Delimiters::new(",", "\n").unwrap(), UTF_8).unwrap()
    }

    fn text(s: &str) -> EncodedCell {
        Some(s.as_bytes().to_vec())
    }

    #[test]
    fn test_exact_width() {
        let esc = escaper();
        let encoder = RowEncoder::new(&esc);
        let row = vec![CellValue::text("a"), CellValue::Null];
        let (encoded, warning) = encoder.encode_to_width(&row, 2, 3, "S").unwrap();
        assert_eq!(encoded.cells(), &[text("a"), None]);
        assert_eq!(warning, None);
    }

    #[test]
    fn test_short_row_is_padded() {
        let esc = escaper();
        let encoder = RowEncoder::new(&esc);
        let row = vec![CellValue::text("c")];
        let (encoded, warning) = encoder.encode_to_width(&row, 3, 2, "Data").unwrap();
        assert_eq!(encoded.cells(), &[text("c"), text(""), text("")]);
        assert_eq!(
            warning,
            Some(WidthWarning {
                row: 2,
                sheet: "Data".to_string(),
                width: 1,
                expected: 3,
            })
        );
        assert_eq!(
            warning.unwrap().to_string(),
            "Only 1 columns in row 2 of sheet 'Data' (expected 3)"
        );
    }

    #[test]
    fn test_zero_width_row_is_padded() {
        let esc = escaper();
        let encoder = RowEncoder::new(&esc);
        let (encoded, warning) = encoder.encode_to_width(&[], 2, 5, "S").unwrap();
        assert_eq!(encoded.len(), 2);
        assert!(warning.is_some());
    }

    #[test]
    fn test_wide_row_is_rejected() {
        let esc = escaper();
        let encoder = RowEncoder::new(&esc);
        let row = vec![CellValue::text("b"), CellValue::text("c")];
        let err = encoder.encode_to_width(&row, 1, 2, "Data").unwrap_err();
        assert!(matches!(
            err,
            Error::RowTooWide { row: 2, width: 2, expected: 1, ref sheet } if sheet == "Data"
        ));
    }

    #[test]
    fn test_cells_are_escaped() {
        let esc = escaper();
        let encoder = RowEncoder::new(&esc);
        let encoded = encoder
            .encode(&[CellValue::text("x,y"), CellValue::Int(4)], 1, "S")
            .unwrap();
        assert_eq!(encoded.cells(), &[text("x\\054y"), text("4")]);
    }

    #[test]
    fn test_unencodable_cell_names_row_and_sheet() {
        let esc = Escaper::new(&Delimiters::new(";", "\n").unwrap(), WINDOWS_1252).unwrap();
        let encoder = RowEncoder::new(&esc);
        let row = vec![CellValue::text("ok"), CellValue::text("日")];
        let err = encoder.encode_to_width(&row, 2, 7, "Kanji").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot encode row 7 of sheet 'Kanji': '日' (U+65E5) cannot be encoded as windows-1252"
        );
        assert!(matches!(err, Error::Unencodable { row: 7, .. }));
    }
}
