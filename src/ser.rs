//! FDS serialization.
//!
//! This module provides the [`Serializer`] that writes a [`Section`] tree back out
//! as FDS text.
//!
//! ## Overview
//!
//! Output is canonical and deterministic:
//!
//! - **Insertion order**: entries are written in the order they were added
//! - **Comments first**: each entry's preceding comments are written as `#` lines
//!   at the entry's own indentation
//! - **One form per kind**: sections and lists use a `key:` header, bytes always
//!   use `key= base64`, everything else is `key: value`
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use fds_syntax::{to_string, Section};
//!
//! let mut root = Section::new();
//! root.set("server.port", 8080).unwrap();
//! root.set("blob", b"hello".to_vec()).unwrap();
//!
//! assert_eq!(to_string(&root), "server:\n\tport: 8080\nblob= aGVsbG8=\n");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use fds_syntax::{FdsOptions, Indent, Section, Serializer};
//!
//! let mut root = Section::new();
//! root.set("outer.inner", "value").unwrap();
//!
//! let mut serializer = Serializer::new(FdsOptions::new().with_indent(Indent::Spaces(2)));
//! serializer.serialize_section(&root);
//! assert_eq!(serializer.into_inner(), "outer:\n  inner: value\n");
//! ```

use crate::escape::{escape_key, escape_value};
use crate::{Entry, FdsOptions, Section, Value};
use tracing::warn;

const EMPTY_TEXT: &str = "\\x";

/// The FDS serializer.
///
/// Created via [`Serializer::new`]; call [`Serializer::serialize_section`] for
/// each tree to append and [`Serializer::into_inner`] to take the text.
pub struct Serializer {
    output: String,
    options: FdsOptions,
    indent_unit: String,
    depth: usize,
}

impl Serializer {
    pub fn new(options: FdsOptions) -> Self {
        let indent_unit = options.indent.unit();
        Serializer {
            output: String::with_capacity(256),
            options,
            indent_unit,
            depth: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends `section` at the serializer's current depth (zero unless nested).
    ///
    /// A list can only hold scalar and binary members. Nested lists or sections
    /// placed in one through [`Section::get_mut`] have no line form and are left
    /// out with a warning.
    pub fn serialize_section(&mut self, section: &Section) {
        for (key, entry) in section.iter() {
            self.write_entry(key, entry);
        }
        self.write_comments(&section.trailing_comments);
    }

    fn write_entry(&mut self, key: &str, entry: &Entry) {
        self.write_comments(&entry.preceding_comments);
        self.write_indent();
        self.output.push_str(&escape_key(key));

        match &entry.value {
            Value::Section(section) => {
                self.output.push(':');
                self.write_newline();
                self.depth += 1;
                self.serialize_section(section);
                self.depth -= 1;
            }
            Value::Bytes(_) => {
                self.output.push_str("= ");
                self.write_text(&entry.value);
                self.write_newline();
            }
            Value::List(items) => {
                self.output.push(':');
                self.write_newline();
                for item in items {
                    if !item.value.is_list_member() {
                        warn!(
                            key,
                            kind = item.value.kind_name(),
                            "skipping list entry that cannot be written as a line"
                        );
                        continue;
                    }
                    self.write_comments(&item.preceding_comments);
                    self.write_indent();
                    self.output
                        .push_str(if item.value.is_bytes() { "= " } else { "- " });
                    self.write_text(&item.value);
                    self.write_newline();
                }
            }
            scalar => {
                self.output.push_str(": ");
                self.write_text(scalar);
                self.write_newline();
            }
        }
    }

    // An empty string would re-read as a header, so it is written as the no-op escape.
    fn write_text(&mut self, value: &Value) {
        let text = value.to_string();
        if text.is_empty() {
            self.output.push_str(EMPTY_TEXT);
        } else {
            self.output.push_str(&escape_value(&text));
        }
    }

    fn write_comments(&mut self, comments: &[String]) {
        for comment in comments {
            self.write_indent();
            self.output.push('#');
            self.output.push_str(comment);
            self.write_newline();
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.output.push_str(&self.indent_unit);
        }
    }

    fn write_newline(&mut self) {
        self.output.push_str(&self.options.newline);
    }
}
