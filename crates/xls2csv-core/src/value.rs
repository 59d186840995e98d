//! Cell value types

use std::borrow::Cow;
use std::fmt;

/// A single scalar read from a worksheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No value at all. Distinct from an empty string.
    Null,

    /// Text value
    Text(String),

    /// Text whose bytes were not decoded by the adapter
    Bytes(Vec<u8>),

    /// Floating point number. Always renders with a fractional part (`1.0`);
    /// very large or small magnitudes use a signed two-digit exponent
    /// (`1e+20`, `1e-07`).
    Float(f64),

    /// Integer number
    Int(i64),

    /// Boolean value (TRUE/FALSE)
    Bool(bool),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the cell holds no value
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Natural text representation of the value, `None` for [`CellValue::Null`].
    ///
    /// Bytes that are not valid UTF-8 are returned as an error so the caller
    /// can decode them under its configured encoding.
    pub fn as_text(&self) -> Option<Result<Cow<'_, str>, &[u8]>> {
        let text = match self {
            CellValue::Null => return None,
            CellValue::Text(s) => Cow::Borrowed(s.as_str()),
            CellValue::Bytes(b) => match std::str::from_utf8(b) {
                Ok(s) => Cow::Borrowed(s),
                Err(_) => return Some(Err(b.as_slice())),
            },
            other => Cow::Owned(other.to_string()),
        };
        Some(Ok(text))
    }

    /// Get the type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Text(_) => "text",
            CellValue::Bytes(_) => "bytes",
            CellValue::Float(_) => "float",
            CellValue::Int(_) => "int",
            CellValue::Bool(_) => "bool",
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),
            // Debug keeps the trailing ".0" on whole numbers
            CellValue::Float(n) => write_float(f, *n),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Bool(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let repr = format!("{n:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(f, "{mantissa}e{sign}{digits:0>2}")
        }
        None => f.write_str(&repr),
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

/// One worksheet row as reported by the source format, possibly zero-width
pub type RawRow = Vec<CellValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::text("abc").to_string(), "abc");
        assert_eq!(CellValue::Float(1.0).to_string(), "1.0");
        assert_eq!(CellValue::Float(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Float(-0.25).to_string(), "-0.25");
        assert_eq!(CellValue::Int(-7).to_string(), "-7");
        assert_eq!(CellValue::Bool(true).to_string(), "TRUE");
        assert_eq!(CellValue::Bool(false).to_string(), "FALSE");
    }

    #[test]
    fn test_display_float_exponent() {
        assert_eq!(CellValue::Float(1e20).to_string(), "1e+20");
        assert_eq!(CellValue::Float(1e-7).to_string(), "1e-07");
        assert_eq!(CellValue::Float(-2.5e-5).to_string(), "-2.5e-05");
        assert_eq!(CellValue::Float(1.5e300).to_string(), "1.5e+300");
        assert_eq!(CellValue::Float(1e15).to_string(), "1000000000000000.0");
        assert_eq!(CellValue::Float(0.0001).to_string(), "0.0001");
    }

    #[test]
    fn test_as_text() {
        assert!(CellValue::Null.as_text().is_none());
        assert_eq!(
            CellValue::text("").as_text().unwrap().unwrap(),
            Cow::Borrowed("")
        );
        assert_eq!(
            CellValue::Bytes(b"ok".to_vec()).as_text().unwrap().unwrap(),
            "ok"
        );
        let latin1 = CellValue::Bytes(vec![0x63, 0x61, 0x66, 0xE9]);
        assert_eq!(latin1.as_text().unwrap().unwrap_err(), &[0x63, 0x61, 0x66, 0xE9]);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(CellValue::from(None::<&str>), CellValue::Null);
        assert_eq!(CellValue::from(Some("x")), CellValue::text("x"));
    }
}
