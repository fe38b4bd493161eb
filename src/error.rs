//! Error types for FDS parsing and section manipulation.
//!
//! ## Error Categories
//!
//! - **Parse Errors**: Malformed FDS text, reported with the 1-based line number,
//!   the raw offending line and a human-readable reason
//! - **Input Errors**: Structurally invalid mutations or navigations on a [`Section`]
//!   (a path ending in the separator, traversal through a non-section value)
//! - **I/O Errors**: Reader/writer or file failures in the thin I/O helpers
//!
//! Parsing stops at the first problem; there is no multi-error collection.
//!
//! ## Examples
//!
//! ```rust
//! use fds_syntax::{parse, Error};
//!
//! let result = parse("root: 1\n  child: 2");
//! match result {
//!     Err(Error::Parse { line, .. }) => assert_eq!(line, 2),
//!     other => panic!("expected a parse error, got {:?}", other),
//! }
//! ```
//!
//! [`Section`]: crate::Section

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed FDS text.
    #[error("[FDS parsing error] line {line}: {reason}, from line as follows: `{text}`")]
    Parse {
        line: usize,
        text: String,
        reason: String,
    },

    /// Invalid structural operation on a section.
    #[error("Invalid FDS input: {0}")]
    Input(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Input bytes were not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    Utf8(String),
}

impl Error {
    /// Creates a parse error for the given 1-based line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fds_syntax::Error;
    ///
    /// let err = Error::parse(3, "  bad", "line purpose unknown");
    /// assert!(err.to_string().contains("line 3"));
    /// assert!(err.to_string().contains("`  bad`"));
    /// ```
    pub fn parse(line: usize, text: &str, reason: impl fmt::Display) -> Self {
        Error::Parse {
            line,
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an input error for an invalid section operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fds_syntax::Error;
    ///
    /// let err = Error::input("key ends in a path separator");
    /// assert!(err.is_input());
    /// ```
    pub fn input(reason: impl fmt::Display) -> Self {
        Error::Input(reason.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: impl fmt::Display) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the offending line for parse errors.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    #[must_use]
    pub fn is_input(&self) -> bool {
        matches!(self, Error::Input(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(err)
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Utf8(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
