//! Delimited text writer

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use xls2csv_core::EncodedRow;

use crate::error::{CsvError, CsvResult};
use crate::options::{CsvWriteOptions, QuoteStyle};

/// Delimited text writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write rows to `path`, creating parent directories first.
    ///
    /// Returns the number of records written. If the row stream fails, what
    /// was written so far is flushed and the file is left incomplete.
    pub fn write_file<P, I>(path: P, rows: I, options: &CsvWriteOptions) -> CsvResult<usize>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = xls2csv_core::Result<EncodedRow>>,
    {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let written = Self::write(BufWriter::new(file), rows, options)?;
        log::debug!("Wrote {} records to '{}'", written, path.display());
        Ok(written)
    }

    /// Write rows to any writer. The writer is flushed on every exit path.
    pub fn write<W, I>(mut writer: W, rows: I, options: &CsvWriteOptions) -> CsvResult<usize>
    where
        W: Write,
        I: IntoIterator<Item = xls2csv_core::Result<EncodedRow>>,
    {
        let mut written = 0;
        for row in rows {
            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    writer.flush()?;
                    return Err(CsvError::Core(err));
                }
            };
            if let Err(err) = Self::write_record(&mut writer, &row, options) {
                // Best effort; the write error is the one worth reporting
                let _ = writer.flush();
                return Err(err.into());
            }
            written += 1;
        }

        writer.flush()?;
        Ok(written)
    }

    /// Write one record followed by the record delimiter. Null cells are
    /// written as empty fields.
    pub fn write_record<W: Write>(
        writer: &mut W,
        row: &EncodedRow,
        options: &CsvWriteOptions,
    ) -> std::io::Result<()> {
        for (i, cell) in row.cells().iter().enumerate() {
            if i > 0 {
                writer.write_all(&options.field_delimiter)?;
            }
            if let Some(field) = cell {
                write_field(writer, field, options)?;
            }
        }
        writer.write_all(&options.record_delimiter)
    }
}

fn write_field<W: Write>(writer: &mut W, field: &[u8], options: &CsvWriteOptions) -> std::io::Result<()> {
    if !needs_quotes(field, options) {
        return writer.write_all(field);
    }

    let quote = options.quote.as_slice();
    writer.write_all(quote)?;
    let mut rest = field;
    while let Some(pos) = find(rest, quote) {
        writer.write_all(&rest[..pos + quote.len()])?;
        writer.write_all(quote)?;
        rest = &rest[pos + quote.len()..];
    }
    writer.write_all(rest)?;
    writer.write_all(quote)
}

fn needs_quotes(field: &[u8], options: &CsvWriteOptions) -> bool {
    match options.quote_style {
        QuoteStyle::Never => false,
        QuoteStyle::Necessary => {
            find(field, &options.quote).is_some()
                || options
                    .record_delimiter
                    .iter()
                    .filter(|b| b.is_ascii())
                    .any(|b| field.contains(b))
        }
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
