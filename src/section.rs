//! The FDS section tree.
//!
//! A [`Section`] owns an ordered set of entries, some of which may themselves be
//! sections. Keys are case-preserved; every lookup has a case-insensitive
//! `_lowered` twin. Lookups take dotted paths split on the section's path
//! separator, while the `*_root` methods address this section's own entries
//! without any splitting.
//!
//! Navigation is tolerant and mutation is strict:
//!
//! - [`Section::get`] and [`Section::get_section`] return `None` when a path segment
//!   is missing or is not a section
//! - [`Section::set`] and [`Section::get_section_or_create`] create missing sections
//!   and fail with [`Error::Input`] when a segment holds a non-section value or the
//!   path ends in the separator
//!
//! ## Examples
//!
//! ```rust
//! use fds_syntax::{Section, Value};
//!
//! let mut root = Section::new();
//! root.set("server.port", 8080).unwrap();
//! root.set("server.Host", "localhost").unwrap();
//!
//! assert_eq!(root.get_i64("server.port", 0), 8080);
//! assert!(root.get("server.host").is_none());
//! assert_eq!(root.get_lowered("SERVER.HOST").and_then(|e| e.value.as_str()), Some("localhost"));
//! assert!(root.set("server.", 1).is_err());
//! ```

use crate::options::DEFAULT_PATH_SEPARATOR;
use crate::{Entry, EntryMap, Error, Result, Value};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A node of the FDS tree; the parsed file root is itself a section.
#[derive(Clone, Debug)]
pub struct Section {
    entries: EntryMap,
    /// Comment lines after the last entry (normally only on the file root).
    pub trailing_comments: Vec<String>,
    path_separator: char,
    start_line: usize,
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

impl Section {
    /// Creates an empty section using the default `.` path separator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_path_separator(DEFAULT_PATH_SEPARATOR)
    }

    /// Creates an empty section with a custom path separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fds_syntax::Section;
    ///
    /// let mut root = Section::with_path_separator('/');
    /// root.set("a/b.c", 1).unwrap();
    /// assert_eq!(root.get_section("a").unwrap().keys().collect::<Vec<_>>(), vec!["b.c"]);
    /// ```
    #[must_use]
    pub fn with_path_separator(separator: char) -> Self {
        Section {
            entries: EntryMap::new(),
            trailing_comments: Vec::new(),
            path_separator: separator,
            start_line: 0,
        }
    }

    /// An empty section sharing this section's separator.
    pub(crate) fn child(&self) -> Section {
        Section::with_path_separator(self.path_separator)
    }

    #[must_use]
    pub fn path_separator(&self) -> char {
        self.path_separator
    }

    /// Changes the separator for this section only; existing children keep theirs.
    pub fn set_path_separator(&mut self, separator: char) {
        self.path_separator = separator;
    }

    /// The 1-based line where this section's content began in the parsed text.
    ///
    /// Zero for sections built in code. Not updated by later mutation.
    #[must_use]
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub(crate) fn set_start_line(&mut self, line: usize) {
        self.start_line = line;
    }

    /// The entries directly in this section, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &EntryMap {
        &self.entries
    }

    /// Returns all keys at the root of this section.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Entry> {
        self.entries.keys()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // === Root-level access (no path splitting) ===

    #[must_use]
    pub fn get_root(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Case-insensitive root lookup.
    #[must_use]
    pub fn get_root_lowered(&self, key: &str) -> Option<&Entry> {
        self.entries.get_lowered(&key.to_lowercase())
    }

    /// Stores a value directly in this section, even if `key` contains the separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Input`] for a list value holding a list or section member.
    pub fn set_root(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        self.set_root_entry(key, Entry::new(value.into()))
    }

    /// Stores an entry directly in this section, even if `key` contains the separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Input`] for a list value holding a list or section member.
    pub fn set_root_entry(&mut self, key: &str, entry: Entry) -> Result<()> {
        check_list_members(&entry)?;
        self.insert_root(key.to_string(), entry);
        Ok(())
    }

    pub(crate) fn insert_root(&mut self, key: String, entry: Entry) {
        self.entries.insert(key, entry);
    }

    // === Path-based lookup ===

    /// Splits `key` at its last separator; `None` when there is no separator.
    fn split_last<'k>(&self, key: &'k str) -> Option<(&'k str, &'k str)> {
        key.rfind(self.path_separator)
            .map(|index| (&key[..index], &key[index + self.path_separator.len_utf8()..]))
    }

    /// Looks up an entry by dotted path.
    ///
    /// Returns `None` if any segment is missing, an intermediate segment is not a
    /// section, or the path ends in the separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fds_syntax::parse;
    ///
    /// let root = parse("a:\n    b: 5\n").unwrap();
    /// assert_eq!(root.get("a.b").and_then(|e| e.value.as_i64()), Some(5));
    /// assert!(root.get("a").unwrap().value.is_section());
    /// assert!(root.get("a.b.").is_none());
    /// assert!(root.get("a.b.c").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Entry> {
        match self.split_last(key) {
            None => self.get_root(key),
            Some((_, "")) => None,
            Some((parent, last)) => self.get_section(parent)?.get_root(last),
        }
    }

    /// Case-insensitive [`Section::get`].
    #[must_use]
    pub fn get_lowered(&self, key: &str) -> Option<&Entry> {
        let key = key.to_lowercase();
        match self.split_last(&key) {
            None => self.entries.get_lowered(&key),
            Some((_, "")) => None,
            Some((parent, last)) => self.get_section_lowered(parent)?.entries.get_lowered(last),
        }
    }

    /// Mutable access to an existing entry by dotted path.
    ///
    /// Assigning through the returned entry skips the list-member check of
    /// [`Section::set`]; lists or sections stored inside a list this way are not
    /// written out.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Entry> {
        let (parent, last) = match self.split_last(key) {
            None => return self.entries.get_mut(key),
            Some((_, "")) => return None,
            Some(split) => split,
        };
        self.get_section_mut(parent)?.entries.get_mut(last)
    }

    /// Returns `true` if an entry exists at the dotted path.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Follows a dotted path of sections. An empty path is this section.
    #[must_use]
    pub fn get_section(&self, key: &str) -> Option<&Section> {
        if key.is_empty() {
            return Some(self);
        }
        let mut current = self;
        for segment in key.split(self.path_separator) {
            current = current.get_root(segment)?.value.as_section()?;
        }
        Some(current)
    }

    /// Case-insensitive [`Section::get_section`].
    #[must_use]
    pub fn get_section_lowered(&self, key: &str) -> Option<&Section> {
        if key.is_empty() {
            return Some(self);
        }
        let key = key.to_lowercase();
        let mut current = self;
        for segment in key.split(self.path_separator) {
            current = current.entries.get_lowered(segment)?.value.as_section()?;
        }
        Some(current)
    }

    pub fn get_section_mut(&mut self, key: &str) -> Option<&mut Section> {
        if key.is_empty() {
            return Some(self);
        }
        let separator = self.path_separator;
        let mut current = self;
        for segment in key.split(separator) {
            current = current.entries.get_mut(segment)?.value.as_section_mut()?;
        }
        Some(current)
    }

    /// Follows a dotted path of sections, creating any that are missing.
    ///
    /// New sections inherit their parent's path separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Input`] if a segment holds a non-section value or the
    /// path ends in the separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fds_syntax::Section;
    ///
    /// let mut root = Section::new();
    /// root.get_section_or_create("a.b").unwrap().set("c", true).unwrap();
    /// assert!(root.get_bool("a.b.c", false));
    ///
    /// root.set("flag", 1).unwrap();
    /// assert!(root.get_section_or_create("flag.inner").is_err());
    /// ```
    pub fn get_section_or_create(&mut self, key: &str) -> Result<&mut Section> {
        if key.ends_with(self.path_separator) {
            return Err(Error::input(format!(
                "invalid key '{}': ends in a path separator",
                key
            )));
        }
        self.create_sections(key)
    }

    // Empty segments between separators name empty-keyed sections.
    fn create_sections(&mut self, key: &str) -> Result<&mut Section> {
        if key.is_empty() {
            return Ok(self);
        }
        let separator = self.path_separator;
        let mut current = self;
        for segment in key.split(separator) {
            let blank = current.child();
            let entry = current
                .entries
                .get_or_insert_with(segment, || Entry::new(Value::Section(blank)));
            current = match &mut entry.value {
                Value::Section(section) => section,
                other => {
                    return Err(Error::input(format!(
                        "key '{}' contains non-section contents ({})",
                        segment,
                        other.kind_name()
                    )))
                }
            };
        }
        Ok(current)
    }

    // === Path-based mutation ===

    /// Stores a value at a dotted path, creating intermediate sections.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Input`] if the path ends in the separator, an intermediate
    /// segment holds a non-section value, or a list value holds a list or section.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        self.set_entry(key, Entry::new(value.into()))
    }

    /// Stores an entry (value and comments) at a dotted path.
    ///
    /// # Errors
    ///
    /// Same as [`Section::set`].
    pub fn set_entry(&mut self, key: &str, entry: Entry) -> Result<()> {
        check_list_members(&entry)?;
        let (section, last) = self.resolve_parent(key)?;
        section.insert_root(last.to_string(), entry);
        Ok(())
    }

    /// Stores a value only if nothing exists at the exact path yet.
    ///
    /// # Errors
    ///
    /// Same as [`Section::set`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fds_syntax::Section;
    ///
    /// let mut root = Section::new();
    /// root.set("retries", 3).unwrap();
    /// root.set_default("retries", 10).unwrap();
    /// root.set_default("timeout", 30).unwrap();
    /// assert_eq!(root.get_i64("retries", 0), 3);
    /// assert_eq!(root.get_i64("timeout", 0), 30);
    /// ```
    pub fn set_default(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        self.set_default_entry(key, Entry::new(value.into()))
    }

    /// Entry form of [`Section::set_default`].
    ///
    /// # Errors
    ///
    /// Same as [`Section::set`].
    pub fn set_default_entry(&mut self, key: &str, entry: Entry) -> Result<()> {
        check_list_members(&entry)?;
        let (section, last) = self.resolve_parent(key)?;
        if !section.entries.contains_key(last) {
            section.insert_root(last.to_string(), entry);
        }
        Ok(())
    }

    fn resolve_parent<'k>(&mut self, key: &'k str) -> Result<(&mut Section, &'k str)> {
        match self.split_last(key) {
            None => Ok((self, key)),
            Some((_, "")) => Err(Error::input(format!(
                "invalid key '{}': ends in a path separator",
                key
            ))),
            Some((parent, last)) => Ok((self.create_sections(parent)?, last)),
        }
    }

    // === Typed getters ===

    /// The raw value at a dotted path.
    #[must_use]
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.get(key).map(|entry| &entry.value)
    }

    /// The raw value at a dotted path, or `default`.
    #[must_use]
    pub fn get_raw<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.get_value(key).unwrap_or(default)
    }

    /// The textual form of a scalar or byte value, or `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fds_syntax::parse;
    ///
    /// let root = parse("port: 8080\nname: web\n").unwrap();
    /// assert_eq!(root.get_string("port", ""), "8080");
    /// assert_eq!(root.get_string("name", ""), "web");
    /// assert_eq!(root.get_string("missing", "none"), "none");
    /// ```
    #[must_use]
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.get_value(key)
            .and_then(Value::text)
            .unwrap_or_else(|| default.to_string())
    }

    /// A boolean, or the case-insensitive text `true`/`false`, or `default`.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get_value(key) {
            Some(Value::Bool(b)) => *b,
            Some(other) => match other.text().map(|text| text.to_lowercase()).as_deref() {
                Some("true") => true,
                Some("false") => false,
                _ => default,
            },
            None => default,
        }
    }

    /// An integer, or text that parses as one, or `default`.
    #[must_use]
    pub fn get_i64(&self, key: &str, default: i64) -> i64 {
        match self.get_value(key) {
            Some(Value::Integer(i)) => *i,
            Some(other) => parse_text(other).unwrap_or(default),
            None => default,
        }
    }

    /// Like [`Section::get_i64`], falling back to `default` when out of range.
    #[must_use]
    pub fn get_i32(&self, key: &str, default: i32) -> i32 {
        match self.get_value(key) {
            Some(Value::Integer(i)) => i32::try_from(*i).unwrap_or(default),
            Some(other) => parse_text(other).unwrap_or(default),
            None => default,
        }
    }

    #[must_use]
    pub fn get_u64(&self, key: &str, default: u64) -> u64 {
        match self.get_value(key) {
            Some(Value::Integer(i)) => u64::try_from(*i).unwrap_or(default),
            Some(other) => parse_text(other).unwrap_or(default),
            None => default,
        }
    }

    /// A float (integers widen), or text that parses as one, or `default`.
    #[must_use]
    pub fn get_f64(&self, key: &str, default: f64) -> f64 {
        match self.get_value(key) {
            Some(Value::Float(f)) => *f,
            Some(Value::Integer(i)) => *i as f64,
            Some(other) => parse_text(other).unwrap_or(default),
            None => default,
        }
    }

    #[must_use]
    pub fn get_f32(&self, key: &str, default: f32) -> f32 {
        match self.get_value(key) {
            Some(_) => self.get_f64(key, f64::from(default)) as f32,
            None => default,
        }
    }

    /// The textual forms of a list's members. A lone non-list value becomes a
    /// single-element list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fds_syntax::parse;
    ///
    /// let root = parse("list:\n- one\n- 2\nsingle: x\n").unwrap();
    /// assert_eq!(root.get_string_list("list", Vec::new()), vec!["one", "2"]);
    /// assert_eq!(root.get_string_list("single", Vec::new()), vec!["x"]);
    /// assert!(root.get_string_list("missing", Vec::new()).is_empty());
    /// ```
    #[must_use]
    pub fn get_string_list(&self, key: &str, default: Vec<String>) -> Vec<String> {
        match self.get_value(key) {
            Some(Value::List(list)) => list.iter().map(|entry| entry.value.to_string()).collect(),
            Some(other) => other.text().map(|text| vec![text]).unwrap_or(default),
            None => default,
        }
    }

    /// A list's entries. A lone non-list entry is returned as a one-entry slice.
    #[must_use]
    pub fn get_entry_list<'a>(&'a self, key: &str, default: &'a [Entry]) -> &'a [Entry] {
        match self.get(key) {
            Some(Entry {
                value: Value::List(list),
                ..
            }) => list,
            Some(entry) => std::slice::from_ref(entry),
            None => default,
        }
    }
}

fn parse_text<T: std::str::FromStr>(value: &Value) -> Option<T> {
    value.text()?.parse().ok()
}

fn check_list_members(entry: &Entry) -> Result<()> {
    if let Value::List(list) = &entry.value {
        if let Some(bad) = list.iter().find(|member| !member.value.is_list_member()) {
            return Err(Error::input(format!(
                "list entries must be scalar or binary, found {}",
                bad.value.kind_name()
            )));
        }
    }
    Ok(())
}

/// Sections compare by entries (in order), trailing comments and separator.
/// The start line is parse-time metadata and is ignored.
impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
            && self.trailing_comments == other.trailing_comments
            && self.path_separator == other.path_separator
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_string(self))
    }
}

impl std::str::FromStr for Section {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        crate::parse(text)
    }
}

impl Serialize for Section {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, entry) in self.iter() {
            map.serialize_entry(key, &entry.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Section(section) => Ok(section),
            other => Err(serde::de::Error::custom(format!(
                "expected a map for an FDS section, found {}",
                other.kind_name()
            ))),
        }
    }
}
