//! xls2csv CLI - convert workbooks to one delimited text file per sheet
//!
//! Tab separated output:
//!
//! ```text
//! FIELDDELIMITER='\t' FILEEXT=.tsv xls2csv data/Book.xlsx
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::builder::FalseyValueParser;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use xls2csv::config::{
    DEFAULT_ENCODING, DEFAULT_FIELD_DELIMITER, DEFAULT_FILE_EXT, DEFAULT_RECORD_DELIMITER,
};
use xls2csv::{BatchReport, Config, Converter};

#[derive(Parser, Debug)]
#[command(name = "xls2csv")]
#[command(
    author,
    version,
    about = "Convert XLS/XLSX workbooks to delimited text, one file per sheet"
)]
struct Cli {
    /// Input workbooks (.xls, .xlsx)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Field delimiter; \t, \n, \r and \\ are interpreted
    #[arg(long, env = "FIELDDELIMITER", default_value = DEFAULT_FIELD_DELIMITER)]
    field_delimiter: String,

    /// Record delimiter (default: platform newline); \t, \n, \r and \\ are interpreted
    #[arg(long, env = "RECORDDELIMITER")]
    record_delimiter: Option<String>,

    /// Output file extension, including the dot
    #[arg(long, env = "FILEEXT", default_value = DEFAULT_FILE_EXT)]
    file_ext: String,

    /// Output directory for all sheets (default: input path without extension)
    #[arg(long, env = "SUBDIR")]
    subdir: Option<PathBuf>,

    /// Output text encoding
    #[arg(long, env = "ENCODING", default_value = DEFAULT_ENCODING)]
    encoding: String,

    /// Report short rows and progress
    #[arg(short, long, env = "VERBOSE", value_parser = FalseyValueParser::new())]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let record_delimiter = self
            .record_delimiter
            .as_deref()
            .map_or_else(|| DEFAULT_RECORD_DELIMITER.to_string(), unescape_arg);

        Config::builder()
            .field_delimiter(unescape_arg(&self.field_delimiter))
            .record_delimiter(record_delimiter)
            .file_ext(self.file_ext.clone())
            .subdir(self.subdir.clone())
            .encoding(self.encoding.clone())
            .verbose(self.verbose)
            .build()
            .context("Invalid configuration")
    }
}

/// Interpret `\t`, `\n`, `\r` and `\\`; any other backslash is kept
fn unescape_arg(arg: &str) -> String {
    let mut out = String::with_capacity(arg.len());
    let mut chars = arg.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Convert every input; per-input failures are collected, not returned
fn run(cli: &Cli) -> Result<BatchReport> {
    let config = cli.config()?;
    Ok(Converter::new(&config).convert_all(&cli.inputs))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let batch = run(&cli)?;
    if batch.is_success() {
        return Ok(ExitCode::SUCCESS);
    }

    let failed: Vec<String> = batch
        .failures()
        .map(|(input, _)| format!("'{}'", input.display()))
        .collect();
    log::error!(
        "{} of {} inputs failed: {}",
        failed.len(),
        batch.outcomes.len(),
        failed.join(", ")
    );
    Ok(ExitCode::FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unescape_arg() {
        assert_eq!(unescape_arg("\\t"), "\t");
        assert_eq!(unescape_arg("\\r\\n"), "\r\n");
        assert_eq!(unescape_arg("a\\\\b"), "a\\b");
        assert_eq!(unescape_arg("\\x"), "\\x");
        assert_eq!(unescape_arg("tail\\"), "tail\\");
        assert_eq!(unescape_arg(";"), ";");
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["xls2csv", "book.xlsx"]).unwrap();
        let config = cli.config().unwrap();
        assert_eq!(config.delimiters().field(), ",");
        assert_eq!(config.delimiters().record(), DEFAULT_RECORD_DELIMITER);
        assert_eq!(config.file_ext(), ".csv");
        assert_eq!(cli.inputs, vec![PathBuf::from("book.xlsx")]);
    }

    #[test]
    fn test_tab_separated_arguments() {
        let cli = Cli::try_parse_from([
            "xls2csv",
            "--field-delimiter",
            "\\t",
            "--file-ext",
            ".tsv",
            "a.xls",
            "b.xlsx",
        ])
        .unwrap();
        let config = cli.config().unwrap();
        assert_eq!(config.delimiters().field(), "\t");
        assert_eq!(config.file_ext(), ".tsv");
        assert_eq!(cli.inputs.len(), 2);
    }

    #[test]
    fn test_colliding_delimiters_rejected() {
        let cli = Cli::try_parse_from([
            "xls2csv",
            "--field-delimiter",
            "\\n",
            "--record-delimiter",
            "\\n",
            "a.xls",
        ])
        .unwrap();
        assert!(cli.config().is_err());
    }

    #[test]
    fn test_run_continues_past_failed_inputs() {
        let cli = Cli::try_parse_from([
            "xls2csv",
            "does/not/exist.xlsx",
            "notes.txt",
        ])
        .unwrap();
        let batch = run(&cli).unwrap();

        assert_eq!(batch.outcomes.len(), 2);
        assert!(!batch.is_success());
        let failed: Vec<PathBuf> = batch.failures().map(|(p, _)| p.to_path_buf()).collect();
        assert_eq!(
            failed,
            vec![PathBuf::from("does/not/exist.xlsx"), PathBuf::from("notes.txt")]
        );
    }

    #[test]
    fn test_run_rejects_invalid_configuration() {
        let cli = Cli::try_parse_from([
            "xls2csv",
            "--field-delimiter",
            "",
            "a.xls",
        ])
        .unwrap();
        let err = run(&cli).unwrap_err();
        assert_eq!(err.to_string(), "Invalid configuration");
    }

    #[test]
    fn test_inputs_required() {
        assert!(Cli::try_parse_from(["xls2csv"]).is_err());
    }
}
