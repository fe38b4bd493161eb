//! Configuration options for FDS parsing and serialization.
//!
//! - [`FdsOptions`]: Main configuration struct
//! - [`Indent`]: Indentation unit written by the serializer (one tab or N spaces)
//!
//! ## Examples
//!
//! ```rust
//! use fds_syntax::{FdsOptions, Indent, parse_with_options, to_string_with_options};
//!
//! // Address nested sections with '/' instead of '.'
//! let options = FdsOptions::new().with_path_separator('/');
//! let root = parse_with_options("outer:\n    inner: 1\n", &options).unwrap();
//! assert!(root.has("outer/inner"));
//!
//! // Write four spaces per level instead of a tab
//! let options = FdsOptions::new().with_indent(Indent::Spaces(4));
//! let text = to_string_with_options(&root, &options);
//! assert_eq!(text, "outer:\n    inner: 1\n");
//! ```

/// The default character used to split dotted section paths.
pub const DEFAULT_PATH_SEPARATOR: char = '.';

/// Indentation unit for one nesting level of serialized output.
///
/// Both forms read back identically: the parser expands every tab to four spaces
/// before measuring indentation. A width of zero is written as one space, since
/// nesting has to be visible in the text.
///
/// # Examples
///
/// ```rust
/// use fds_syntax::Indent;
///
/// assert_eq!(Indent::Tab.unit(), "\t");
/// assert_eq!(Indent::Spaces(2).unit(), "  ");
/// assert_eq!(Indent::Spaces(0).unit(), " ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indent {
    /// Returns the text written for a single nesting level.
    #[must_use]
    pub fn unit(&self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat((*n).max(1)),
        }
    }
}

/// Configuration options for FDS parsing and serialization.
///
/// # Examples
///
/// ```rust
/// use fds_syntax::{FdsOptions, Indent};
///
/// let options = FdsOptions::new()
///     .with_path_separator(':')
///     .with_indent(Indent::Spaces(2))
///     .with_newline("\r\n");
/// assert_eq!(options.path_separator, ':');
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FdsOptions {
    /// Separator handed to the parsed root section and inherited by its children.
    pub path_separator: char,
    pub indent: Indent,
    pub newline: String,
}

impl Default for FdsOptions {
    fn default() -> Self {
        FdsOptions {
            path_separator: DEFAULT_PATH_SEPARATOR,
            indent: Indent::default(),
            newline: "\n".to_string(),
        }
    }
}

impl FdsOptions {
    /// Creates default options (`.` separator, tab indentation, `\n` newlines).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fds_syntax::{FdsOptions, Indent};
    ///
    /// let options = FdsOptions::new();
    /// assert_eq!(options.path_separator, '.');
    /// assert_eq!(options.indent, Indent::Tab);
    /// assert_eq!(options.newline, "\n");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the path separator used for dotted key lookups.
    ///
    /// Keys are always escaped with `\d` for `.`; choosing another separator means
    /// keys containing that character can no longer be addressed through a path.
    #[must_use]
    pub fn with_path_separator(mut self, separator: char) -> Self {
        self.path_separator = separator;
        self
    }

    #[must_use]
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the line terminator written by the serializer.
    #[must_use]
    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }
}
