//! # fds_syntax
//!
//! A parser and serializer for FDS, an indentation-structured configuration text format.
//!
//! ## What is FDS?
//!
//! FDS is a YAML-like dialect designed to be edited by hand and rewritten by programs
//! without losing what the human wrote. It has explicit escaping rules, typed scalar
//! inference, base64 binary values, ordered case-preserving keys and comments that
//! survive a load/save cycle.
//!
//! ```text
//! # Server settings
//! server:
//!     host: localhost
//!     port: 8080
//! allowed:
//! - alice
//! - bob
//! key= aGVsbG8=
//! ```
//!
//! ## Key Features
//!
//! - **Comment Preserving**: `#` lines stay attached to the entry below them
//! - **Typed Scalars**: integers, floats and booleans are inferred only when the text
//!   prints back exactly the same, so `007` stays a string
//! - **Dotted Paths**: `server.port` addresses nested sections, with case-insensitive
//!   `_lowered` twins for every lookup
//! - **Binary Values**: `key= <base64>` lines hold raw bytes
//! - **Serde Bridge**: trees implement `Serialize`/`Deserialize` for interop with other formats
//!
//! ## Quick Start
//!
//! ```rust
//! use fds_syntax::{parse, to_string};
//!
//! let text = "# Server settings\nserver:\n    host: localhost\n    port: 8080\n";
//! let mut root = parse(text).unwrap();
//!
//! assert_eq!(root.get_string("server.host", ""), "localhost");
//! assert_eq!(root.get_i64("server.port", 0), 8080);
//!
//! root.set("server.port", 9090).unwrap();
//! assert_eq!(
//!     to_string(&root),
//!     "# Server settings\nserver:\n\thost: localhost\n\tport: 9090\n"
//! );
//! ```
//!
//! ### Building Trees with the fds! Macro
//!
//! ```rust
//! use fds_syntax::{fds, Value};
//!
//! let value = fds!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "config"]
//! });
//!
//! if let Value::Section(section) = value {
//!     assert_eq!(section.get_string("name", ""), "Alice");
//!     assert_eq!(section.get_string_list("tags", Vec::new()), vec!["rust", "config"]);
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (parse summaries at `debug`, nested blocks at
//! `trace`, file load/save at `debug`) and never installs a subscriber.
//!
//! ## Format Reference
//!
//! See the [`format`] module for the complete line grammar and escaping table.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Parse, query, modify and write a document
//! - **`macro.rs`** - Building values with the fds! macro
//! - **`dynamic_sections.rs`** - Walking and rebuilding a tree at runtime
//! - **`custom_options.rs`** - Path separators, indentation and newlines
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod escape;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod section;
pub mod ser;
pub mod value;

pub use de::Parser;
pub use error::{Error, Result};
pub use map::EntryMap;
pub use options::{FdsOptions, Indent};
pub use section::Section;
pub use ser::Serializer;
pub use value::{Entry, Value};

use std::io;
use std::path::Path;
use tracing::debug;

/// Parses FDS text into its root [`Section`].
///
/// # Examples
///
/// ```rust
/// use fds_syntax::parse;
///
/// let root = parse("list:\n- one\n- two\n").unwrap();
/// assert_eq!(root.get_string_list("list", Vec::new()), vec!["one", "two"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] for the first malformed line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<Section> {
    parse_with_options(text, &FdsOptions::default())
}

/// Parses FDS text with custom options.
///
/// Only [`FdsOptions::path_separator`] affects parsing; it is handed to the root and
/// inherited by every nested section.
///
/// # Errors
///
/// Returns [`Error::Parse`] for the first malformed line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(text: &str, options: &FdsOptions) -> Result<Section> {
    Parser::new(options).parse(text)
}

/// Same as [`parse`].
///
/// # Errors
///
/// Returns [`Error::Parse`] for the first malformed line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(text: &str) -> Result<Section> {
    parse(text)
}

/// Parses FDS text from UTF-8 bytes.
///
/// # Examples
///
/// ```rust
/// use fds_syntax::from_slice;
///
/// let root = from_slice(b"blob= aGVsbG8=").unwrap();
/// assert_eq!(root.get_value("blob").and_then(|v| v.as_bytes()), Some(&b"hello"[..]));
/// assert!(from_slice(&[0xff, 0xfe]).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Utf8`] if the bytes are not UTF-8, or [`Error::Parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(bytes: &[u8]) -> Result<Section> {
    parse(std::str::from_utf8(bytes)?)
}

/// Reads a whole FDS document from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use fds_syntax::from_reader;
/// use std::io::Cursor;
///
/// let root = from_reader(Cursor::new("x: 1\ny: 2")).unwrap();
/// assert_eq!(root.len(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, [`Error::Utf8`] or [`Error::Parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Section>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_slice(&bytes)
}

/// Serializes a section to canonical FDS text (tab indentation, `\n` newlines).
#[must_use]
pub fn to_string(section: &Section) -> String {
    to_string_with_options(section, &FdsOptions::default())
}

/// Serializes a section with a custom indentation unit and newline.
///
/// # Examples
///
/// ```rust
/// use fds_syntax::{to_string_with_options, FdsOptions, Indent, Section};
///
/// let mut root = Section::new();
/// root.set("a.b", true).unwrap();
/// let options = FdsOptions::new().with_indent(Indent::Spaces(2)).with_newline("\r\n");
/// assert_eq!(to_string_with_options(&root, &options), "a:\r\n  b: true\r\n");
/// ```
#[must_use]
pub fn to_string_with_options(section: &Section, options: &FdsOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.serialize_section(section);
    serializer.into_inner()
}

/// Writes a section as FDS text to a writer.
///
/// # Examples
///
/// ```rust
/// use fds_syntax::{to_writer, Section};
///
/// let mut root = Section::new();
/// root.set("x", 1).unwrap();
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &root).unwrap();
/// assert_eq!(buffer, b"x: 1\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, section: &Section) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, section, &FdsOptions::default())
}

/// Writes a section as FDS text to a writer with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, section: &Section, options: &FdsOptions) -> Result<()>
where
    W: io::Write,
{
    writer.write_all(to_string_with_options(section, options).as_bytes())?;
    Ok(())
}

/// Reads and parses an FDS file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, [`Error::Utf8`] or [`Error::Parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Section> {
    load_file_with_options(path, &FdsOptions::default())
}

/// Reads and parses an FDS file with custom options.
///
/// # Errors
///
/// Same as [`load_file`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load_file_with_options<P: AsRef<Path>>(path: P, options: &FdsOptions) -> Result<Section> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading FDS file");
    let bytes = std::fs::read(path)?;
    let text = std::str::from_utf8(&bytes)?;
    parse_with_options(text, options)
}

/// Serializes a section and writes it to a file, replacing any existing contents.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn save_file<P: AsRef<Path>>(section: &Section, path: P) -> Result<()> {
    save_file_with_options(section, path, &FdsOptions::default())
}

/// Serializes a section with custom options and writes it to a file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn save_file_with_options<P: AsRef<Path>>(
    section: &Section,
    path: P,
    options: &FdsOptions,
) -> Result<()> {
    let path = path.as_ref();
    let text = to_string_with_options(section, options);
    debug!(path = %path.display(), bytes = text.len(), "saving FDS file");
    std::fs::write(path, text)?;
    Ok(())
}
