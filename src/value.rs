//! Values and entries of an FDS tree.
//!
//! - [`Value`]: the closed set of things an entry can hold (string, integer, float,
//!   boolean, bytes, list, nested section)
//! - [`Entry`]: one value slot plus the comment lines written directly above it
//!
//! ## Creating Values
//!
//! ```rust
//! use fds_syntax::{Entry, Value};
//!
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let blob = Value::from(b"hello".to_vec());
//! let list = Value::List(vec![Entry::new(Value::from("one")), Entry::new(Value::from("two"))]);
//!
//! assert!(number.is_integer());
//! assert_eq!(blob.to_string(), "aGVsbG8=");
//! assert_eq!(list.to_string(), "one|two|");
//! ```
//!
//! ## Extracting Values
//!
//! ```rust
//! use fds_syntax::Value;
//! use std::convert::TryFrom;
//!
//! let value = Value::from(42);
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```

use crate::escape::{decode_base64, encode_base64};
use crate::Section;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single FDS value.
///
/// Lists hold plain entries whose own values are scalars or bytes; they never
/// contain nested lists or sections. [`Section::set_entry`] enforces this.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    List(Vec<Entry>),
    Section(Section),
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bytes(&self) -> bool {
        matches!(self, Value::Bytes(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_section(&self) -> bool {
        matches!(self, Value::Section(_))
    }

    /// Returns `true` for values that may appear as list members.
    #[inline]
    #[must_use]
    pub const fn is_list_member(&self) -> bool {
        !matches!(self, Value::List(_) | Value::Section(_))
    }

    /// A short name for the kind of value held, used in messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Section(_) => "section",
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns floats directly and widens integers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fds_syntax::Value;
    ///
    /// assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
    /// assert_eq!(Value::Integer(2).as_f64(), Some(2.0));
    /// assert_eq!(Value::from("2").as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[Entry]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Value::Section(section) => Some(section),
            _ => None,
        }
    }

    #[inline]
    pub fn as_section_mut(&mut self) -> Option<&mut Section> {
        match self {
            Value::Section(section) => Some(section),
            _ => None,
        }
    }

    /// The textual form of a scalar or byte value; `None` for lists and sections.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fds_syntax::{Section, Value};
    ///
    /// assert_eq!(Value::from(true).text().as_deref(), Some("true"));
    /// assert_eq!(Value::from(1.5).text().as_deref(), Some("1.5"));
    /// assert_eq!(Value::Section(Section::new()).text(), None);
    /// ```
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
            Value::Bytes(bytes) => Some(encode_base64(bytes)),
            Value::List(_) | Value::Section(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Bytes(bytes) => f.write_str(&encode_base64(bytes)),
            Value::List(list) => {
                for entry in list {
                    write!(f, "{}|", entry.value)?;
                }
                Ok(())
            }
            Value::Section(section) => f.write_str(&crate::to_string(section)),
        }
    }
}

/// One value slot within a section, with the comment lines that preceded it.
///
/// # Examples
///
/// ```rust
/// use fds_syntax::{Entry, Value};
///
/// let mut entry = Entry::new(Value::from(8080));
/// entry.add_comment(" The port to listen on.\r\n Defaults to 8080.   ");
/// assert_eq!(entry.preceding_comments, vec![" The port to listen on.", " Defaults to 8080."]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub preceding_comments: Vec<String>,
    pub value: Value,
}

impl Entry {
    /// Creates an entry with no comments.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Entry {
            preceding_comments: Vec::new(),
            value,
        }
    }

    #[must_use]
    pub fn with_comments(value: Value, comments: Vec<String>) -> Self {
        Entry {
            preceding_comments: comments,
            value,
        }
    }

    /// Appends comment text, one comment line per line of input.
    ///
    /// Carriage returns are dropped, tabs become four spaces (as the parser reads
    /// them) and trailing whitespace is trimmed from each line.
    pub fn add_comment(&mut self, comment: &str) {
        let comment = comment.replace('\r', "").replace('\t', "    ");
        self.preceding_comments
            .extend(comment.split('\n').map(|line| line.trim_end().to_string()));
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Entry::new(value)
    }
}

impl Serialize for Entry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Bytes(bytes) => serializer.serialize_str(&encode_base64(bytes)),
            Value::List(list) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for entry in list {
                    seq.serialize_element(&entry.value)?;
                }
                seq.end()
            }
            Value::Section(section) => section.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any value representable in FDS")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                match i64::try_from(value) {
                    Ok(integer) => Ok(Value::Integer(integer)),
                    Err(_) => Ok(Value::Float(value as f64)),
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E> {
                Ok(Value::Bytes(value.to_vec()))
            }

            fn visit_byte_buf<E>(self, value: Vec<u8>) -> Result<Self::Value, E> {
                Ok(Value::Bytes(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut list = Vec::new();
                while let Some(elem) = seq.next_element::<Value>()? {
                    if !elem.is_list_member() {
                        return Err(de::Error::custom(format!(
                            "list entries must be scalar or binary, found {}",
                            elem.kind_name()
                        )));
                    }
                    list.push(Entry::new(elem));
                }
                Ok(Value::List(list))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut section = Section::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    section.insert_root(key, Entry::new(value));
                }
                Ok(Value::Section(section))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting values from Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            other => Err(crate::Error::input(format!(
                "expected integer, found {}",
                other.kind_name()
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Float(f) => Ok(f),
            Value::Integer(i) => Ok(i as f64),
            other => Err(crate::Error::input(format!(
                "expected number, found {}",
                other.kind_name()
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(crate::Error::input(format!(
                "expected boolean, found {}",
                other.kind_name()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::Error::input(format!(
                "expected string, found {}",
                other.kind_name()
            ))),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = crate::Error;

    /// Accepts raw bytes, or a string holding base64 text.
    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bytes(bytes) => Ok(bytes),
            Value::String(s) => decode_base64(&s).map_err(crate::Error::input),
            other => Err(crate::Error::input(format!(
                "expected bytes, found {}",
                other.kind_name()
            ))),
        }
    }
}

impl TryFrom<Value> for Section {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Section(section) => Ok(section),
            other => Err(crate::Error::input(format!(
                "expected section, found {}",
                other.kind_name()
            ))),
        }
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<Vec<Entry>> for Value {
    fn from(value: Vec<Entry>) -> Self {
        Value::List(value)
    }
}

impl From<Section> for Value {
    fn from(value: Section) -> Self {
        Value::Section(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tryfrom_i64() {
        assert_eq!(i64::try_from(Value::Integer(42)).unwrap(), 42);
        assert!(i64::try_from(Value::Float(42.0)).is_err());
        assert!(i64::try_from(Value::from("42")).is_err());
    }

    #[test]
    fn test_tryfrom_f64_widens() {
        assert_eq!(f64::try_from(Value::Float(3.5)).unwrap(), 3.5);
        assert_eq!(f64::try_from(Value::Integer(42)).unwrap(), 42.0);
        assert!(f64::try_from(Value::Bool(true)).is_err());
    }

    #[test]
    fn test_tryfrom_bytes_accepts_base64_text() {
        let bytes: Vec<u8> = Vec::try_from(Value::from("aGVsbG8=")).unwrap();
        assert_eq!(bytes, b"hello");
        assert!(Vec::<u8>::try_from(Value::from("%%%")).is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Integer(42));
        assert_eq!(Value::from(7u8), Value::Integer(7));
        assert_eq!(Value::from(3.5f64), Value::Float(3.5));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(Value::from(&b"ab"[..]), Value::Bytes(vec![b'a', b'b']));
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Value::from(-3).to_string(), "-3");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::Bytes(Vec::new()).to_string(), "");
        let list = Value::List(vec![Entry::new(Value::from(1)), Entry::new(Value::from("x"))]);
        assert_eq!(list.to_string(), "1|x|");
    }

    #[test]
    fn test_list_membership() {
        assert!(Value::from(1).is_list_member());
        assert!(Value::Bytes(vec![1]).is_list_member());
        assert!(!Value::List(Vec::new()).is_list_member());
        assert!(!Value::Section(Section::new()).is_list_member());
    }

    #[test]
    fn test_add_comment_splits_lines() {
        let mut entry = Entry::new(Value::from(1));
        entry.add_comment("first");
        entry.add_comment("second\nthird  ");
        assert_eq!(entry.preceding_comments, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_add_comment_expands_tabs() {
        let mut entry = Entry::new(Value::from(1));
        entry.add_comment("a\tb");
        assert_eq!(entry.preceding_comments, vec!["a    b"]);

        let mut root = crate::Section::new();
        root.set_entry("k", entry).unwrap();
        let reparsed = crate::parse(&crate::to_string(&root)).unwrap();
        assert_eq!(reparsed, root);
    }
}
