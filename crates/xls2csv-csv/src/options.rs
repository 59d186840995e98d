//! Writer options

use xls2csv_core::Config;

/// When to wrap a field in quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Quote fields containing the quote character or a byte of the record
    /// delimiter that escaping left in place
    #[default]
    Necessary,
    /// Write every field verbatim
    Never,
}

/// Options for writing delimited text. Delimiters are already encoded.
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter bytes (default: comma)
    pub field_delimiter: Vec<u8>,
    /// Record terminator bytes, written after every record (default: LF)
    pub record_delimiter: Vec<u8>,
    /// Quote character bytes (default: double quote)
    pub quote: Vec<u8>,
    /// Quoting policy
    pub quote_style: QuoteStyle,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            field_delimiter: b",".to_vec(),
            record_delimiter: b"\n".to_vec(),
            quote: b"\"".to_vec(),
            quote_style: QuoteStyle::Necessary,
        }
    }
}

impl CsvWriteOptions {
    /// Options matching a validated configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            field_delimiter: config.field_delimiter_bytes(),
            record_delimiter: config.record_delimiter_bytes(),
            quote: config
                .escaper()
                .encode("\"")
                .unwrap_or_else(|_| b"\"".to_vec()),
            quote_style: QuoteStyle::Necessary,
        }
    }

    pub fn with_quote_style(mut self, quote_style: QuoteStyle) -> Self {
        self.quote_style = quote_style;
        self
    }
}
