//! FDS Text Format
//!
//! This module documents the FDS text format as read by [`Parser`](crate::Parser)
//! and written by [`Serializer`](crate::Serializer).
//!
//! # Overview
//!
//! An FDS document is a sequence of lines. Indentation decides nesting, a marker
//! character after the key decides what kind of record a line holds, and `#` lines
//! carry comments that stay attached to the record below them.
//!
//! Before parsing, line endings and tabs are normalized:
//!
//! - text containing `\r\n` loses every `\r`; otherwise a lone `\r` becomes `\n`
//! - each tab becomes four spaces
//!
//! # Line Kinds
//!
//! | Line | Meaning |
//! |------|---------|
//! | blank or all spaces | ignored |
//! | `#text` | comment; `text` is kept verbatim, including its leading space |
//! | `key: value` | scalar entry; the value's type is inferred |
//! | `key:` | header; opens a nested section or a list |
//! | `key= base64` | binary entry |
//! | `- value` | list member (only below a header) |
//! | `= base64` | binary list member (only below a header) |
//!
//! Leading and trailing spaces are trimmed from each line, and spaces between a
//! marker and the value are dropped.
//!
//! ## Sections
//!
//! A header followed by deeper-indented lines opens a section. Children must be
//! indented strictly deeper than the header, and a later dedent must land exactly
//! on the width of an enclosing block:
//!
//! ```text
//! server:
//!     host: localhost
//!     limits:
//!         connections: 100
//!     port: 8080
//! ```
//!
//! Indenting a line deeper without a header above it is an error, as is dedenting
//! to a width no open block was opened at. A header with nothing below it holds an
//! empty section.
//!
//! ## Lists
//!
//! A header followed by `-`/`=` lines opens a list. List lines may sit at the
//! header's own indentation or deeper:
//!
//! ```text
//! users:
//! - alice
//! - bob
//! keys:
//!     = aGVsbG8=
//!     = d29ybGQ=
//! ```
//!
//! List members are scalars or bytes; lists never nest. A list ends at the next
//! key line or dedent.
//!
//! # Values
//!
//! ## Type Inference
//!
//! Scalar text (after unescaping) becomes, in order of preference:
//!
//! | Type | Rule | Example |
//! |------|------|---------|
//! | Integer | digits with optional `-`, fits in `i64`, prints back identically | `42`, `-3` |
//! | Float | digits with one `.`, prints back identically | `0.5`, `-2.25` |
//! | Boolean | exactly `true` or `false` | `true` |
//! | String | anything else | `007`, `1.50`, `True`, `hello` |
//!
//! Because of the print-back rule, a whole float such as `1.0` is written as `1`
//! and reads back as an integer, and a string that looks like a number reads back
//! as that number.
//!
//! ## Escaping
//!
//! | Escape | Meaning | Values | Keys |
//! |--------|---------|--------|------|
//! | `\\`   | backslash | yes | yes |
//! | `\t`   | tab | yes | yes |
//! | `\n`   | newline | yes | yes |
//! | `\r`   | carriage return | yes | yes |
//! | `\x`   | nothing | yes | yes |
//! | `\d`   | `.` | no | yes |
//! | `\c`   | `:` | no | yes |
//! | `\e`   | `=` | no | yes |
//!
//! `\x` keeps leading and trailing spaces from being trimmed and stands for the
//! empty string, including the empty key. A key whose escaped form starts with
//! `#` or `-` also gets a leading `\x`.
//!
//! ```text
//! greeting: \x  hello  \x
//! host\cport: localhost:8080
//! empty: \x
//! ```
//!
//! ## Binary
//!
//! Bytes are written as standard base64 with padding and no line wrapping, always
//! behind `=`:
//!
//! ```text
//! blob= aGVsbG8=
//! ```
//!
//! # Comments
//!
//! Comment lines attach to the next entry or list member, whatever its
//! indentation. Comments after the last entry of the document belong to the root
//! section as trailing comments. Comment text is not escaped, so a tab in it
//! reads back as four spaces; `Entry::add_comment` expands tabs up front.
//!
//! ```text
//! # Port to listen on
//! port: 8080
//! # end of file
//! ```
//!
//! # Canonical Output
//!
//! The serializer writes entries in insertion order, one tab per nesting level by
//! default, list members at their header's indentation, and a newline after every
//! line. A width of `Indent::Spaces(0)` is written as one space. Parsing
//! canonical output yields a tree equal to the one serialized, except where type
//! inference reinterprets text as described above. Lists and sections stored
//! inside a list have no line form and are not written.

// This module contains only documentation; no implementation code
