//! Delimiter-safe escaping of cell values
//!
//! Every occurrence of the field delimiter, the record delimiter or a carriage
//! return inside a cell is replaced by a backslash followed by the octal code
//! of each of its characters (`,` becomes `\054`). Joining escaped values with
//! the raw delimiters therefore never produces an ambiguous stream.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use encoding_rs::{EncoderResult, Encoding};
use regex::{Captures, Regex};

use crate::config::Delimiters;
use crate::error::ConfigError;
use crate::value::CellValue;

/// Marker that introduces an octal escape
pub const ESCAPE_MARKER: char = '\\';

/// Escape bytes for one cell; `None` means the cell was null
pub type EncodedCell = Option<Vec<u8>>;

/// A character the output encoding has no representation for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unmappable {
    pub character: char,
    pub encoding: &'static Encoding,
}

impl fmt::Display for Unmappable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} (U+{:04X}) cannot be encoded as {}",
            self.character,
            self.character as u32,
            self.encoding.name()
        )
    }
}

impl std::error::Error for Unmappable {}

/// Escapes cell text for a fixed delimiter set and output encoding
#[derive(Debug, Clone)]
pub struct Escaper {
    special: Regex,
    escaped: Regex,
    originals: HashMap<String, String>,
    encoding: &'static Encoding,
    field: Vec<u8>,
    record: Vec<u8>,
}

impl Escaper {
    /// Compile the escape pattern for `delimiters`.
    ///
    /// Both delimiters must be representable in `encoding`.
    pub fn new(delimiters: &Delimiters, encoding: &'static Encoding) -> Result<Self, ConfigError> {
        let delimiter_bytes = |delimiter: &str| {
            encode_strict(encoding, delimiter).map_err(|_| ConfigError::UnencodableDelimiter {
                delimiter: delimiter.to_string(),
                encoding: encoding.name(),
            })
        };
        let field = delimiter_bytes(delimiters.field())?;
        let record = delimiter_bytes(delimiters.record())?;

        let mut special: Vec<&str> = vec!["\r", delimiters.field(), delimiters.record()];
        // Longest alternative first so "\r\n" wins over "\r" at the same offset
        special.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        special.dedup();

        let escaped_forms: Vec<String> = special.iter().map(|s| octal(s)).collect();
        let originals = escaped_forms
            .iter()
            .zip(&special)
            .map(|(escaped, original)| (escaped.clone(), original.to_string()))
            .collect();

        Ok(Self {
            special: alternation(special.iter().copied())?,
            escaped: alternation(escaped_forms.iter().map(String::as_str))?,
            originals,
            encoding,
            field,
            record,
        })
    }

    /// Escape special characters in `text`
    pub fn escape_str<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.special
            .replace_all(text, |caps: &Captures<'_>| octal(&caps[0]))
    }

    /// Reverse [`Escaper::escape_str`] for a single field.
    ///
    /// The marker itself is never escaped, so text that already contained one
    /// of the escape sequences literally cannot be told apart.
    pub fn unescape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.escaped.replace_all(text, |caps: &Captures<'_>| {
            self.originals
                .get(&caps[0])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
    }

    /// Render, escape and encode one cell value.
    ///
    /// Null passes through as `None`. Bytes that are not valid UTF-8 are
    /// decoded with the configured encoding before escaping. Text the output
    /// encoding cannot represent is an error, never a substitute sequence.
    pub fn escape(&self, value: &CellValue) -> Result<EncodedCell, Unmappable> {
        let text = match value.as_text() {
            None => return Ok(None),
            Some(Ok(text)) => text,
            Some(Err(bytes)) => self.encoding.decode_without_bom_handling(bytes).0,
        };
        self.encode(&self.escape_str(&text)).map(Some)
    }

    /// Encode already-escaped text in the output encoding
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, Unmappable> {
        encode_strict(self.encoding, text)
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Field delimiter in the output encoding
    pub fn field_delimiter(&self) -> &[u8] {
        &self.field
    }

    /// Record delimiter in the output encoding
    pub fn record_delimiter(&self) -> &[u8] {
        &self.record
    }
}

fn encode_strict(encoding: &'static Encoding, text: &str) -> Result<Vec<u8>, Unmappable> {
    let mut encoder = encoding.new_encoder();
    let mut out = Vec::new();
    let mut rest = text;
    loop {
        let needed = encoder
            .max_buffer_length_from_utf8_without_replacement(rest.len())
            .unwrap_or(rest.len() * 4 + 8);
        out.reserve(needed);
        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(rest, &mut out, true);
        rest = &rest[read..];
        match result {
            EncoderResult::InputEmpty => return Ok(out),
            EncoderResult::OutputFull => continue,
            EncoderResult::Unmappable(character) => {
                return Err(Unmappable {
                    character,
                    encoding: encoding.output_encoding(),
                })
            }
        }
    }
}

/// `\ooo` for every character of `text`
fn octal(text: &str) -> String {
    text.chars()
        .map(|c| format!("{ESCAPE_MARKER}{:03o}", c as u32))
        .collect()
}

fn alternation<'a, I>(literals: I) -> Result<Regex, ConfigError>
where
    I: Iterator<Item = &'a str>,
{
    let pattern = literals.map(regex::escape).collect::<Vec<_>>().join("|");
    Regex::new(&pattern).map_err(|e| ConfigError::Pattern(e.to_string()))
}
