//! Whitespace-only sheet detection

use crate::encode::EncodedRow;
use crate::error::Result;
use crate::normalize::NormalizedRow;

/// ASCII whitespace, including vertical tab
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// True if the row holds at least one non-whitespace byte. Null cells and
/// zero-width rows never count as content.
pub fn row_has_content(row: &EncodedRow) -> bool {
    row.cells()
        .iter()
        .flatten()
        .any(|cell| cell.iter().any(|b| !is_space(*b)))
}

/// Decide whether a sheet must be skipped.
///
/// Stops at the first row with content, so only a blank sheet is read to the
/// end. Errors raised before that row (e.g. an overlong row) propagate.
pub fn is_blank_sheet<I>(rows: I) -> Result<bool>
where
    I: IntoIterator<Item = Result<NormalizedRow>>,
{
    for row in rows {
        if row_has_content(&row?.row) {
            return Ok(false);
        }
    }
    Ok(true)
}
