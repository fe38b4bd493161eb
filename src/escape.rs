//! Text normalization, escaping and scalar type inference.
//!
//! FDS values are written verbatim after their marker, so any character that
//! would change the meaning of a line is replaced by a backslash sequence:
//!
//! | Escape | Meaning | Values | Keys |
//! |--------|---------|--------|------|
//! | `\\`   | backslash | yes | yes |
//! | `\t`   | tab | yes | yes |
//! | `\n`   | newline | yes | yes |
//! | `\r`   | carriage return | yes | yes |
//! | `\x`   | nothing (keeps leading/trailing spaces alive) | yes | yes |
//! | `\d`   | `.` | no | yes |
//! | `\c`   | `:` | no | yes |
//! | `\e`   | `=` | no | yes |
//!
//! ## Examples
//!
//! ```rust
//! use fds_syntax::escape::{escape_key, escape_value, unescape_key, unescape_value};
//!
//! assert_eq!(escape_value("a\tb "), "a\\tb \\x");
//! assert_eq!(unescape_value("a\\tb \\x"), "a\tb ");
//! assert_eq!(escape_key("host:port"), "host\\cport");
//! assert_eq!(unescape_key("host\\cport"), "host:port");
//! ```

use crate::Value;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

const NO_OP: &str = "\\x";

/// Cleans line endings and tabs so the parser only ever sees `\n` and spaces.
///
/// Text containing any `\r\n` is treated as Windows-originated and loses every `\r`;
/// otherwise each lone `\r` (old Mac) becomes `\n`. Tabs become four spaces.
///
/// # Examples
///
/// ```rust
/// use fds_syntax::escape::normalize;
///
/// assert_eq!(normalize("a: 1\r\nb: 2\r\n"), "a: 1\nb: 2\n");
/// assert_eq!(normalize("a: 1\rb: 2"), "a: 1\nb: 2");
/// assert_eq!(normalize("a:\n\tb: 2"), "a:\n    b: 2");
/// ```
#[must_use]
pub fn normalize(contents: &str) -> String {
    let unix = if contents.contains("\r\n") {
        contents.replace('\r', "")
    } else {
        contents.replace('\r', "\n")
    };
    unix.replace('\t', "    ")
}

/// Escapes a string for use as a value.
///
/// For keys use [`escape_key`].
#[must_use]
pub fn escape_value(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    if escaped.ends_with(' ') {
        escaped.push_str(NO_OP);
    }
    if escaped.starts_with(' ') {
        escaped.insert_str(0, NO_OP);
    }
    escaped
}

/// Escapes a string for use as a section key.
///
/// On top of [`escape_value`], the path separator and both line markers are
/// replaced. A key whose escaped form would open with `#` or `-` gets a leading
/// `\x` so the line cannot be mistaken for a comment or a list entry. The empty
/// key is written as a lone `\x`.
///
/// # Examples
///
/// ```rust
/// use fds_syntax::escape::escape_key;
///
/// assert_eq!(escape_key("a.b=c"), "a\\db\\ec");
/// assert_eq!(escape_key("#tag"), "\\x#tag");
/// assert_eq!(escape_key(""), "\\x");
/// ```
#[must_use]
pub fn escape_key(text: &str) -> String {
    let escaped = escape_value(text)
        .replace('.', "\\d")
        .replace(':', "\\c")
        .replace('=', "\\e");
    if escaped.is_empty() {
        NO_OP.to_string()
    } else if escaped.starts_with('#') || escaped.starts_with('-') {
        format!("{NO_OP}{escaped}")
    } else {
        escaped
    }
}

/// Reverses [`escape_value`].
#[must_use]
pub fn unescape_value(text: &str) -> String {
    unescape(text, false)
}

/// Reverses [`escape_key`].
#[must_use]
pub fn unescape_key(text: &str) -> String {
    unescape(text, true)
}

// Single pass, so `\\t` reads as backslash + 't' rather than a tab.
// Unknown sequences are kept as written.
fn unescape(text: &str, key: bool) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => result.push('\\'),
            Some('t') => result.push('\t'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('x') => {}
            Some('d') if key => result.push('.'),
            Some('c') if key => result.push(':'),
            Some('e') if key => result.push('='),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}

fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal_text(text: &str) -> bool {
    match text.split_once('.') {
        Some((whole, fraction)) => {
            is_integer_text(whole)
                && !fraction.is_empty()
                && fraction.bytes().all(|b| b.is_ascii_digit())
        }
        None => is_integer_text(text),
    }
}

/// Guesses the scalar type of unescaped value text.
///
/// Integers and floats are only accepted when printing the parsed number gives
/// back exactly the input, so `007` or `3.10` stay strings. Only the lowercase
/// literals `true` and `false` become booleans.
///
/// # Examples
///
/// ```rust
/// use fds_syntax::{escape::infer_type, Value};
///
/// assert_eq!(infer_type("42"), Value::Integer(42));
/// assert_eq!(infer_type("2.75"), Value::Float(2.75));
/// assert_eq!(infer_type("true"), Value::Bool(true));
/// assert_eq!(infer_type("007"), Value::String("007".to_string()));
/// assert_eq!(infer_type("hi"), Value::String("hi".to_string()));
/// ```
#[must_use]
pub fn infer_type(text: &str) -> Value {
    if is_integer_text(text) {
        if let Ok(integer) = text.parse::<i64>() {
            if integer.to_string() == text {
                return Value::Integer(integer);
            }
        }
    }
    if is_decimal_text(text) {
        if let Ok(float) = text.parse::<f64>() {
            if float.to_string() == text {
                return Value::Float(float);
            }
        }
    }
    match text {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(text.to_string()),
    }
}

/// Base64 text of a byte sequence, standard alphabet, no line wrapping.
#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard base64; empty text decodes to no bytes.
pub fn decode_base64(text: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    STANDARD.decode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prefers_windows_endings() {
        // A stray lone \r in Windows text is dropped, not turned into a newline.
        assert_eq!(normalize("a\r\nb\rc"), "a\nbc");
    }

    #[test]
    fn test_normalize_leaves_unix_text() {
        assert_eq!(normalize("a: 1\nb: 2\n"), "a: 1\nb: 2\n");
    }

    #[test]
    fn test_escape_value_specials() {
        assert_eq!(escape_value("back\\slash"), "back\\\\slash");
        assert_eq!(escape_value("line\nbreak\r"), "line\\nbreak\\r");
        assert_eq!(escape_value(" both "), "\\x both \\x");
        assert_eq!(escape_value(""), "");
    }

    #[test]
    fn test_escape_value_leaves_markers() {
        assert_eq!(escape_value("a.b: c=d"), "a.b: c=d");
    }

    #[test]
    fn test_unescape_is_single_pass() {
        assert_eq!(unescape_value("\\\\t"), "\\t");
        assert_eq!(unescape_value(&escape_value("\\n")), "\\n");
    }

    #[test]
    fn test_unescape_value_keeps_key_sequences() {
        assert_eq!(unescape_value("a\\db"), "a\\db");
        assert_eq!(unescape_key("a\\db"), "a.b");
    }

    #[test]
    fn test_unescape_unknown_and_dangling() {
        assert_eq!(unescape_value("\\q"), "\\q");
        assert_eq!(unescape_value("end\\"), "end\\");
    }

    #[test]
    fn test_key_roundtrip() {
        for key in ["plain", "a.b", "x:y", "k=v", " padded ", "#hash", "-dash", "tab\there"] {
            assert_eq!(unescape_key(&escape_key(key)), key);
        }
    }

    #[test]
    fn test_empty_key_is_written_as_no_op() {
        assert_eq!(escape_key(""), "\\x");
        assert_eq!(unescape_key(&escape_key("")), "");
    }

    #[test]
    fn test_infer_type_numbers() {
        assert_eq!(infer_type("-17"), Value::Integer(-17));
        assert_eq!(infer_type("0"), Value::Integer(0));
        assert_eq!(infer_type("-2.5"), Value::Float(-2.5));
        assert_eq!(infer_type("3.10"), Value::String("3.10".to_string()));
        assert_eq!(infer_type("1.0"), Value::String("1.0".to_string()));
        assert_eq!(infer_type("1e5"), Value::String("1e5".to_string()));
        assert_eq!(infer_type("+5"), Value::String("+5".to_string()));
        assert_eq!(infer_type("."), Value::String(".".to_string()));
    }

    #[test]
    fn test_infer_type_overflow_falls_through() {
        let text = "99999999999999999999";
        assert_eq!(infer_type(text), Value::String(text.to_string()));
    }

    #[test]
    fn test_infer_type_bool_is_case_sensitive() {
        assert_eq!(infer_type("false"), Value::Bool(false));
        assert_eq!(infer_type("True"), Value::String("True".to_string()));
    }

    #[test]
    fn test_base64() {
        assert_eq!(encode_base64(b"hello"), "aGVsbG8=");
        assert_eq!(decode_base64("aGVsbG8=").unwrap(), b"hello");
        assert!(decode_base64("").unwrap().is_empty());
        assert!(decode_base64("not base64!").is_err());
    }
}
