//! Python-compatible stringification of JSON values.
//!
//! Environment values produced from JSON follow the conventions of Python's
//! `str()` for scalars and `json.dumps()` (default arguments) for containers:
//!
//! | JSON | Environment value |
//! |------|-------------------|
//! | `"text"` | `text` |
//! | `true` / `false` / `null` | `True` / `False` / `None` |
//! | `42` / `-0` / `123456789012345678901234` | `42` / `0` / `123456789012345678901234` |
//! | `3.14` / `1e20` / `1E400` | `3.14` / `1e+20` / `inf` |
//! | `{"a": [1, 2]}` | `{"a": [1, 2]}` (`", "` and `": "` separators, ASCII only) |
//!
//! Numbers arrive as their exact source text (serde_json's
//! `arbitrary_precision`), so integers never lose digits. Bare `NaN` and
//! `Infinity` tokens are not JSON and are rejected by the parser.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Value;

use crate::constants::{JSON_FALSE, JSON_NULL, JSON_TRUE};

/// Render a top-level JSON value as an environment string.
pub fn to_env_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => JSON_TRUE.to_string(),
        Value::Bool(false) => JSON_FALSE.to_string(),
        Value::Null => JSON_NULL.to_string(),
        Value::Number(n) => number_repr(&n.to_string(), NonFinite::Str),
        Value::Array(_) | Value::Object(_) => dumps(value).unwrap_or_else(|_| value.to_string()),
    }
}

/// Serialize `value` the way `json.dumps(value)` does.
pub fn dumps(value: &Value) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PyFormatter);
    value.serialize(&mut ser)?;
    // Every non-ASCII character is escaped, so the output is plain ASCII.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// How an out-of-range float literal such as `1E400` is spelled.
#[derive(Debug, Clone, Copy)]
enum NonFinite {
    /// `str(float)`: `inf` / `-inf`.
    Str,
    /// `json.dumps(float)`: `Infinity` / `-Infinity`.
    Json,
}

/// Render a JSON number literal.
///
/// Literals without `.` or an exponent are integers and keep their digits;
/// `-0` is integer zero. Everything else is read as an `f64`.
fn number_repr(text: &str, non_finite: NonFinite) -> String {
    if !text.contains(['.', 'e', 'E']) {
        return if text == "-0" { "0".to_string() } else { text.to_string() };
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_infinite() => match non_finite {
            NonFinite::Str => float_repr(f),
            NonFinite::Json if f > 0.0 => "Infinity".to_string(),
            NonFinite::Json => "-Infinity".to_string(),
        },
        Ok(f) => float_repr(f),
        Err(_) => text.to_string(),
    }
}

/// Shortest round-trip representation of `value` in Python's `repr` layout.
///
/// Decimal exponents in `[-4, 16)` print positionally with at least one
/// fractional digit; anything else uses `d.ddde±XX`.
pub fn float_repr(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "nan"
        } else if value > 0.0 {
            "inf"
        } else {
            "-inf"
        }
        .to_string();
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. "-1.25e-7".
    let sci = format!("{value:e}");
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    if !(-4..16).contains(&exp) {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exp_sign}{:02}", exp.unsigned_abs());
    }

    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let body = if exp < 0 {
        let zeros = "0".repeat(exp.unsigned_abs() as usize - 1);
        format!("0.{zeros}{digits}")
    } else {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            format!("{digits}{}.0", "0".repeat(int_len - digits.len()))
        } else {
            format!("{}.{}", &digits[..int_len], &digits[int_len..])
        }
    };
    format!("{sign}{body}")
}

/// `serde_json` formatter reproducing `json.dumps` defaults.
struct PyFormatter;

impl Formatter for PyFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_number_str<W>(&mut self, writer: &mut W, value: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(number_repr(value, NonFinite::Json).as_bytes())
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}
