//! Workbook to delimited-text conversion
//!
//! For each sheet: a first normalizer pass decides whether the sheet is
//! blank; only if it is not is the output file created and a second pass
//! streamed into it.

use std::path::{Path, PathBuf};

use xls2csv_core::{is_blank_sheet, Config, EncodedRow, NormalizedRow, SheetNormalizer, WorkbookAdapter};
use xls2csv_csv::{CsvWriteOptions, CsvWriter};

use crate::error::Result;
use crate::layout::{output_dir, sheet_path};

/// What happened to one input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Files written, in sheet order
    pub written: Vec<PathBuf>,
    /// Names of sheets skipped because they were blank
    pub skipped: Vec<String>,
}

/// Outcome of converting several inputs
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<(PathBuf, Result<ConversionReport>)>,
}

impl BatchReport {
    /// Inputs that failed, with their error
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &crate::Error)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|(path, outcome)| outcome.as_ref().err().map(|e| (path.as_path(), e)))
    }

    /// True if every input converted
    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Converts workbooks with one fixed configuration
#[derive(Debug, Clone)]
pub struct Converter<'a> {
    config: &'a Config,
    options: CsvWriteOptions,
}

impl<'a> Converter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            options: CsvWriteOptions::from_config(config),
        }
    }

    /// Replace the writer options derived from the configuration
    pub fn with_options(mut self, options: CsvWriteOptions) -> Self {
        self.options = options;
        self
    }

    /// Convert one input file into `<dir>/<sheet><ext>` files
    pub fn convert_path<P: AsRef<Path>>(&self, input: P) -> Result<ConversionReport> {
        let input = input.as_ref();
        let dir = output_dir(input, self.config);
        let ext = self.config.file_ext();
        self.convert_path_with(input, |sheet| sheet_path(&dir, sheet, ext))
    }

    /// Convert one input file, mapping each sheet name to its output path
    pub fn convert_path_with<P, F>(&self, input: P, layout: F) -> Result<ConversionReport>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> PathBuf,
    {
        let input = input.as_ref();
        let mut workbook = xls2csv_excel::open_workbook(input)?;
        log::info!("Converting '{}'", input.display());
        self.convert_workbook(workbook.as_mut(), layout)
    }

    /// Convert every non-blank sheet of an opened workbook
    pub fn convert_workbook<F>(
        &self,
        workbook: &mut dyn WorkbookAdapter,
        layout: F,
    ) -> Result<ConversionReport>
    where
        F: Fn(&str) -> PathBuf,
    {
        let escaper = self.config.escaper();
        let mut report = ConversionReport::default();

        for name in workbook.sheet_names() {
            let sheet = workbook.sheet(&name)?;

            if is_blank_sheet(SheetNormalizer::for_sheet(sheet.as_ref(), escaper))? {
                log::debug!("Skipping blank sheet '{}'", sheet.name());
                report.skipped.push(name);
                continue;
            }

            let path = layout(sheet.name());
            let rows = SheetNormalizer::for_sheet(sheet.as_ref(), escaper)
                .map(|row| row.map(|row| self.report_width(row)));
            let count = CsvWriter::write_file(&path, rows, &self.options)?;

            log::info!("Wrote {} rows of sheet '{}' to '{}'", count, sheet.name(), path.display());
            report.written.push(path);
        }

        Ok(report)
    }

    fn report_width(&self, row: NormalizedRow) -> EncodedRow {
        if let Some(warning) = &row.warning {
            if self.config.verbose() {
                log::warn!("{warning}");
            }
        }
        row.row
    }

    /// Convert each input independently; one failure does not stop the rest
    pub fn convert_all<I, P>(&self, inputs: I) -> BatchReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let outcomes = inputs
            .into_iter()
            .map(|input| {
                let input = input.as_ref();
                let outcome = self.convert_path(input);
                match &outcome {
                    Ok(report) => log::info!(
                        "'{}': {} sheets written, {} blank sheets skipped",
                        input.display(),
                        report.written.len(),
                        report.skipped.len()
                    ),
                    Err(err) => log::error!("Failed to convert '{}': {}", input.display(), err),
                }
                (input.to_path_buf(), outcome)
            })
            .collect();
        BatchReport { outcomes }
    }
}

/// Convert one input with `config`
pub fn convert<P: AsRef<Path>>(input: P, config: &Config) -> Result<ConversionReport> {
    Converter::new(config).convert_path(input)
}

/// Convert several inputs with `config`, continuing past failures
pub fn convert_all<I, P>(inputs: I, config: &Config) -> BatchReport
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Converter::new(config).convert_all(inputs)
}
