//! FDS parsing.
//!
//! This module provides the [`Parser`] that turns FDS text into a [`Section`] tree.
//!
//! ## Overview
//!
//! - **Single pass**: one left-to-right walk over the lines, no backtracking
//! - **Indentation tracking**: every open section remembers the width it was opened
//!   at; a shallower line must land exactly on one of those widths
//! - **Comment preservation**: `#` lines attach to the entry that follows them, and
//!   leftovers become the root's trailing comments
//! - **Type inference**: scalar text becomes an integer, float, boolean or string
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use fds_syntax::parse;
//!
//! let root = parse("# the answer\nanswer: 42\nnested:\n    flag: true\n").unwrap();
//! assert_eq!(root.get_i64("answer", 0), 42);
//! assert_eq!(root.get("answer").unwrap().preceding_comments, vec![" the answer"]);
//! assert!(root.get_bool("nested.flag", false));
//! ```
//!
//! ## Header keys
//!
//! A `key:` line with no value opens either a nested section (when the next line
//! is indented deeper) or a list (when the next line is a `-`/`=` entry). When
//! neither follows, the key holds an empty section.
//!
//! ```rust
//! use fds_syntax::parse;
//!
//! let root = parse("empty:\nnext: 1\n").unwrap();
//! assert!(root.get_section("empty").unwrap().is_empty());
//! ```

use crate::escape::{decode_base64, infer_type, normalize, unescape_key, unescape_value};
use crate::{Entry, Error, FdsOptions, Result, Section, Value};
use tracing::{debug, trace};

/// A nested section still receiving lines.
struct Frame {
    indent: usize,
    key: String,
    comments: Vec<String>,
    section: Section,
}

/// A `key:` line with no value, waiting to learn whether it heads a block or a list.
struct Header {
    key: String,
    comments: Vec<String>,
}

struct OpenList {
    key: String,
    comments: Vec<String>,
    items: Vec<Entry>,
}

/// The FDS parser.
///
/// Consumes text and produces the root [`Section`], or the first [`Error::Parse`]
/// encountered. Created via [`Parser::new`]; each parser handles one document.
pub struct Parser {
    root: Section,
    frames: Vec<Frame>,
    pending_comments: Vec<String>,
    header: Option<Header>,
    list: Option<OpenList>,
    prev_indent: usize,
}

impl Parser {
    pub fn new(options: &FdsOptions) -> Self {
        let mut root = Section::with_path_separator(options.path_separator);
        root.set_start_line(1);
        Parser {
            root,
            frames: Vec::new(),
            pending_comments: Vec::new(),
            header: None,
            list: None,
            prev_indent: 0,
        }
    }

    /// Parses a whole document.
    ///
    /// Line endings and tabs are normalized first, so `\r\n`, `\r` and tab
    /// indentation are all accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] with the 1-based line number for bad spacing, lines
    /// without a `:`/`=` marker, empty keys, stray list entries or invalid base64.
    pub fn parse(mut self, text: &str) -> Result<Section> {
        let text = normalize(text);
        let mut lines = 0;
        for (index, line) in text.split('\n').enumerate() {
            lines = index + 1;
            self.parse_line(lines, line)?;
        }
        let root = self.finish();
        debug!(entries = root.len(), lines, "parsed FDS document");
        Ok(root)
    }

    fn current(&self) -> &Section {
        match self.frames.last() {
            Some(frame) => &frame.section,
            None => &self.root,
        }
    }

    fn current_mut(&mut self) -> &mut Section {
        match self.frames.last_mut() {
            Some(frame) => &mut frame.section,
            None => &mut self.root,
        }
    }

    fn take_comments(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_comments)
    }

    fn parse_line(&mut self, number: usize, line: &str) -> Result<()> {
        let indent = line.bytes().take_while(|b| *b == b' ').count();
        if indent == line.len() {
            return Ok(());
        }
        let datum = line[indent..].trim_end_matches(' ');
        if let Some(comment) = datum.strip_prefix('#') {
            self.pending_comments.push(comment.to_string());
            return Ok(());
        }

        let list_entry = datum.starts_with('-') || datum.starts_with('=');
        let keeps_header =
            indent > self.prev_indent || (list_entry && indent == self.prev_indent);
        if !keeps_header {
            self.close_header();
        }

        if indent < self.prev_indent {
            self.close_list();
            self.dedent(number, line, indent)?;
        }

        if list_entry {
            return self.parse_list_entry(number, line, indent, datum);
        }
        self.close_list();
        self.parse_key_line(number, line, indent, datum)?;
        self.prev_indent = indent;
        Ok(())
    }

    /// Returns to the section opened at `indent`, closing every deeper one.
    fn dedent(&mut self, number: usize, line: &str, indent: usize) -> Result<()> {
        let keep = if indent == 0 {
            0
        } else {
            match self.frames.iter().position(|frame| frame.indent == indent) {
                Some(position) => position + 1,
                None => {
                    let valid = std::iter::once(0)
                        .chain(self.frames.iter().map(|frame| frame.indent))
                        .map(|width| width.to_string())
                        .collect::<Vec<_>>()
                        .join(" / ");
                    return Err(Error::parse(
                        number,
                        line,
                        format!(
                            "spacing does not match any known level (valid: {}, found: {}, was: {})",
                            valid, indent, self.prev_indent
                        ),
                    ));
                }
            }
        };
        while self.frames.len() > keep {
            self.close_frame();
        }
        Ok(())
    }

    fn parse_list_entry(
        &mut self,
        number: usize,
        line: &str,
        indent: usize,
        datum: &str,
    ) -> Result<()> {
        if self.list.is_none() {
            let header = match self.header.take() {
                Some(header) if indent >= self.prev_indent => header,
                _ => {
                    return Err(Error::parse(
                        number,
                        line,
                        "list entry when not building a list",
                    ))
                }
            };
            trace!(key = %header.key, line = number, "opening list");
            self.list = Some(OpenList {
                key: header.key,
                comments: header.comments,
                items: Vec::new(),
            });
        }

        let binary = datum.starts_with('=');
        let value = decode_value(number, line, datum[1..].trim_start_matches(' '), binary)?;
        let comments = self.take_comments();
        if let Some(list) = self.list.as_mut() {
            list.items.push(Entry::with_comments(value, comments));
        }
        Ok(())
    }

    fn parse_key_line(
        &mut self,
        number: usize,
        line: &str,
        indent: usize,
        datum: &str,
    ) -> Result<()> {
        let (key, binary, rest) =
            split_key(datum).ok_or_else(|| Error::parse(number, line, "line purpose unknown"))?;
        if key.is_empty() {
            return Err(Error::parse(number, line, "empty key label"));
        }
        let rest = rest.trim_start_matches(' ');

        if indent > self.prev_indent {
            match self.header.take() {
                Some(header) => self.open_section(number, indent, header),
                None => {
                    return Err(Error::parse(
                        number,
                        line,
                        format!(
                            "spacing increased without a section header (found: {}, was: {})",
                            indent, self.prev_indent
                        ),
                    ))
                }
            }
        }

        let key = unescape_key(key);
        if !binary && rest.is_empty() {
            let comments = self.take_comments();
            self.header = Some(Header { key, comments });
            return Ok(());
        }
        let value = decode_value(number, line, rest, binary)?;
        let comments = self.take_comments();
        self.current_mut()
            .insert_root(key, Entry::with_comments(value, comments));
        Ok(())
    }

    fn open_section(&mut self, number: usize, indent: usize, header: Header) {
        trace!(key = %header.key, line = number, indent, "opening section");
        let mut section = self.current().child();
        section.set_start_line(number);
        self.frames.push(Frame {
            indent,
            key: header.key,
            comments: header.comments,
            section,
        });
    }

    /// Resolves a dangling header to an empty section.
    fn close_header(&mut self) {
        if let Some(header) = self.header.take() {
            let section = self.current().child();
            self.current_mut().insert_root(
                header.key,
                Entry::with_comments(Value::Section(section), header.comments),
            );
        }
    }

    fn close_list(&mut self) {
        if let Some(list) = self.list.take() {
            self.current_mut().insert_root(
                list.key,
                Entry::with_comments(Value::List(list.items), list.comments),
            );
        }
    }

    fn close_frame(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.current_mut().insert_root(
                frame.key,
                Entry::with_comments(Value::Section(frame.section), frame.comments),
            );
        }
    }

    fn finish(mut self) -> Section {
        self.close_header();
        self.close_list();
        while !self.frames.is_empty() {
            self.close_frame();
        }
        let trailing = self.take_comments();
        self.root.trailing_comments.extend(trailing);
        self.root
    }
}

/// Splits a key line at its first unescaped `:` or `=`.
///
/// Returns the raw key, whether the marker was `=`, and the text after the marker.
fn split_key(datum: &str) -> Option<(&str, bool, &str)> {
    let mut escaped = false;
    for (index, ch) in datum.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            ':' | '=' => return Some((&datum[..index], ch == '=', &datum[index + 1..])),
            _ => {}
        }
    }
    None
}

fn decode_value(number: usize, line: &str, text: &str, binary: bool) -> Result<Value> {
    let unescaped = unescape_value(text);
    if binary {
        decode_base64(&unescaped)
            .map(Value::Bytes)
            .map_err(|err| Error::parse(number, line, format!("invalid base64 data ({})", err)))
    } else {
        Ok(infer_type(&unescaped))
    }
}
