//! Sheets backed by a decoded calamine range

use calamine::{Data, Range};
use xls2csv_core::{CellValue, RawRow, SheetSource};

/// Maps one decoded cell to a core value. Each format has its own.
pub(crate) type CellMapper = fn(&Data) -> CellValue;

/// A fully decoded worksheet. Rows are reported from row 1 and column A,
/// so a used range that starts further in keeps its leading blanks.
pub struct RangeSheet {
    name: String,
    range: Range<Data>,
    mapper: CellMapper,
}

impl RangeSheet {
    pub(crate) fn new(name: String, range: Range<Data>, mapper: CellMapper) -> Self {
        Self {
            name,
            range,
            mapper,
        }
    }

    /// Number of rows reported, counting leading blank rows
    pub fn row_count(&self) -> usize {
        self.range.end().map_or(0, |(row, _)| row as usize + 1)
    }

    /// Number of columns in every reported row
    pub fn column_count(&self) -> usize {
        self.range.end().map_or(0, |(_, col)| col as usize + 1)
    }

    fn row(&self, row: u32, columns: u32) -> RawRow {
        (0..columns)
            .map(|col| {
                self.range
                    .get_value((row, col))
                    .map_or(CellValue::Null, self.mapper)
            })
            .collect()
    }
}

impl SheetSource for RangeSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn rows(&self) -> Box<dyn Iterator<Item = RawRow> + '_> {
        let rows = self.row_count() as u32;
        let columns = self.column_count() as u32;
        Box::new((0..rows).map(move |row| self.row(row, columns)))
    }
}

/// Shared mapping for the variants both formats treat alike
pub(crate) fn common_value(data: &Data) -> Option<CellValue> {
    let value = match data {
        Data::Empty => CellValue::Null,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::text(s.as_str()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Error(e) => CellValue::text(e.to_string()),
        Data::Int(_) | Data::Float(_) | Data::DateTime(_) => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(data: &Data) -> CellValue {
        common_value(data).unwrap_or_else(|| CellValue::text(data.to_string()))
    }

    #[test]
    fn test_rows_start_at_origin() {
        let mut range = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("b2".into()));
        range.set_value((2, 2), Data::String("c3".into()));
        let sheet = RangeSheet::new("S".into(), range, identity);

        let rows: Vec<RawRow> = sheet.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 3));
        assert_eq!(rows[0], vec![CellValue::Null; 3]);
        assert_eq!(
            rows[1],
            vec![CellValue::Null, CellValue::text("b2"), CellValue::Null]
        );
        assert_eq!(rows[2][2], CellValue::text("c3"));
    }

    #[test]
    fn test_empty_range_has_no_rows() {
        let sheet = RangeSheet::new("S".into(), Range::empty(), identity);
        assert_eq!(sheet.rows().count(), 0);
        assert_eq!(sheet.column_count(), 0);
    }

    #[test]
    fn test_rows_can_be_enumerated_twice() {
        let mut range = Range::new((0, 0), (0, 0));
        range.set_value((0, 0), Data::Bool(true));
        let sheet = RangeSheet::new("S".into(), range, identity);
        assert_eq!(sheet.rows().count(), 1);
        assert_eq!(sheet.rows().next().unwrap(), vec![CellValue::Bool(true)]);
    }
}
