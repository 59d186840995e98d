//! Sheet normalization
//!
//! [`SheetNormalizer`] pulls raw rows one at a time. Zero-width rows are
//! passed through until the first row with at least one column fixes the
//! reference width; from then on every row is encoded to that width.

use crate::encode::{EncodedRow, RowEncoder, WidthWarning};
use crate::error::Result;
use crate::escape::Escaper;
use crate::source::SheetSource;
use crate::value::RawRow;

/// An encoded row plus the width anomaly it raised, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub row: EncodedRow,
    pub warning: Option<WidthWarning>,
}

impl NormalizedRow {
    fn clean(row: EncodedRow) -> Self {
        Self { row, warning: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Seeking,
    Encoding { width: usize },
    Done,
}

/// Lazy, single-pass normalizer over one sheet's raw rows.
///
/// Yields at most one error (`RowTooWide` or `Unencodable`) and then
/// terminates.
pub struct SheetNormalizer<'a, I> {
    rows: I,
    encoder: RowEncoder<'a>,
    sheet: String,
    state: State,
    row_number: usize,
}

impl<'a, I> SheetNormalizer<'a, I>
where
    I: Iterator<Item = RawRow>,
{
    pub fn new<S, R>(sheet: S, rows: R, escaper: &'a Escaper) -> Self
    where
        S: Into<String>,
        R: IntoIterator<IntoIter = I>,
    {
        Self {
            rows: rows.into_iter(),
            encoder: RowEncoder::new(escaper),
            sheet: sheet.into(),
            state: State::Seeking,
            row_number: 0,
        }
    }

    /// Reference width, once the first populated row has been seen
    pub fn reference_width(&self) -> Option<usize> {
        match self.state {
            State::Encoding { width } => Some(width),
            _ => None,
        }
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    fn finish_on_error(&mut self, result: Result<NormalizedRow>) -> Result<NormalizedRow> {
        if result.is_err() {
            self.state = State::Done;
        }
        result
    }

    fn pull(&mut self) -> Option<RawRow> {
        let row = self.rows.next();
        match row {
            Some(_) => self.row_number += 1,
            None => self.state = State::Done,
        }
        row
    }
}

impl<'a> SheetNormalizer<'a, Box<dyn Iterator<Item = RawRow> + 'a>> {
    /// Start a fresh pass over `sheet`. Each call re-enumerates the sheet.
    pub fn for_sheet(sheet: &'a dyn SheetSource, escaper: &'a Escaper) -> Self {
        Self::new(sheet.name(), sheet.rows(), escaper)
    }
}

impl<'a, I> Iterator for SheetNormalizer<'a, I>
where
    I: Iterator<Item = RawRow>,
{
    type Item = Result<NormalizedRow>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => None,
            State::Seeking => {
                let row = self.pull()?;
                let encoded = self.encoder.encode(&row, self.row_number, &self.sheet);
                if !row.is_empty() {
                    self.state = State::Encoding { width: row.len() };
                }
                Some(self.finish_on_error(encoded.map(NormalizedRow::clean)))
            }
            State::Encoding { width } => {
                let row = self.pull()?;
                let encoded = self
                    .encoder
                    .encode_to_width(&row, width, self.row_number, &self.sheet)
                    .map(|(row, warning)| NormalizedRow { row, warning });
                Some(self.finish_on_error(encoded))
            }
        }
    }
}
