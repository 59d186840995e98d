//! Process-wide conversion settings
//!
//! A [`Config`] is built once through [`ConfigBuilder`], validated, and then
//! handed by reference to every component that needs it.

use std::path::{Path, PathBuf};

use encoding_rs::Encoding;

use crate::error::ConfigError;
use crate::escape::Escaper;

/// Default field delimiter
pub const DEFAULT_FIELD_DELIMITER: &str = ",";

/// Default record delimiter (platform newline)
#[cfg(windows)]
pub const DEFAULT_RECORD_DELIMITER: &str = "\r\n";
/// Default record delimiter (platform newline)
#[cfg(not(windows))]
pub const DEFAULT_RECORD_DELIMITER: &str = "\n";

/// Default output file extension, including the dot
pub const DEFAULT_FILE_EXT: &str = ".csv";

/// Default text encoding label
pub const DEFAULT_ENCODING: &str = "utf-8";

/// A validated pair of field and record delimiters.
///
/// Both are non-empty and they differ from each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    field: String,
    record: String,
}

impl Delimiters {
    /// Validate and create a delimiter pair
    pub fn new<F, R>(field: F, record: R) -> Result<Self, ConfigError>
    where
        F: Into<String>,
        R: Into<String>,
    {
        let field = field.into();
        let record = record.into();

        if field.is_empty() {
            return Err(ConfigError::EmptyFieldDelimiter);
        }
        if record.is_empty() {
            return Err(ConfigError::EmptyRecordDelimiter);
        }
        if field == record {
            return Err(ConfigError::DelimiterCollision(field));
        }

        Ok(Self { field, record })
    }

    /// Separator placed between the fields of a record
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Terminator written after every record
    pub fn record(&self) -> &str {
        &self.record
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            field: DEFAULT_FIELD_DELIMITER.to_string(),
            record: DEFAULT_RECORD_DELIMITER.to_string(),
        }
    }
}

/// Conversion settings, read-only after construction
#[derive(Debug, Clone)]
pub struct Config {
    delimiters: Delimiters,
    file_ext: String,
    subdir: Option<PathBuf>,
    verbose: bool,
    encoding: &'static Encoding,
    escaper: Escaper,
}

impl Config {
    /// Start building a configuration from the defaults
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Extension appended to each sheet name, e.g. `.csv`
    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    /// Explicit output directory; `None` means "derive from the input stem"
    pub fn subdir(&self) -> Option<&Path> {
        self.subdir.as_deref()
    }

    /// Whether recoverable anomalies (short rows) are reported
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Text encoding used for output bytes
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Escaper compiled for these delimiters and this encoding
    pub fn escaper(&self) -> &Escaper {
        &self.escaper
    }

    /// Field delimiter in the output encoding
    pub fn field_delimiter_bytes(&self) -> Vec<u8> {
        self.escaper.field_delimiter().to_vec()
    }

    /// Record delimiter in the output encoding
    pub fn record_delimiter_bytes(&self) -> Vec<u8> {
        self.escaper.record_delimiter().to_vec()
    }
}

/// Builder for [`Config`]; all validation happens in [`ConfigBuilder::build`]
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    field_delimiter: String,
    record_delimiter: String,
    file_ext: String,
    subdir: Option<PathBuf>,
    verbose: bool,
    encoding: String,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            field_delimiter: DEFAULT_FIELD_DELIMITER.to_string(),
            record_delimiter: DEFAULT_RECORD_DELIMITER.to_string(),
            file_ext: DEFAULT_FILE_EXT.to_string(),
            subdir: None,
            verbose: false,
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl ConfigBuilder {
    pub fn field_delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.field_delimiter = delimiter.into();
        self
    }

    pub fn record_delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.record_delimiter = delimiter.into();
        self
    }

    pub fn file_ext<S: Into<String>>(mut self, ext: S) -> Self {
        self.file_ext = ext.into();
        self
    }

    /// Output directory for every sheet. An empty path is treated as unset.
    pub fn subdir<P: Into<PathBuf>>(mut self, subdir: Option<P>) -> Self {
        self.subdir = subdir
            .map(Into::into)
            .filter(|p| !p.as_os_str().is_empty());
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Encoding label, e.g. `utf-8`, `latin1`, `windows-1252`
    pub fn encoding<S: Into<String>>(mut self, label: S) -> Self {
        self.encoding = label.into();
        self
    }

    /// Validate the settings and produce a [`Config`]
    pub fn build(self) -> Result<Config, ConfigError> {
        let delimiters = Delimiters::new(self.field_delimiter, self.record_delimiter)?;
        let encoding = Encoding::for_label(self.encoding.trim().as_bytes())
            .ok_or(ConfigError::UnknownEncoding(self.encoding))?;
        let escaper = Escaper::new(&delimiters, encoding)?;

        Ok(Config {
            delimiters,
            file_ext: self.file_ext,
            subdir: self.subdir,
            verbose: self.verbose,
            encoding,
            escaper,
        })
    }
}
