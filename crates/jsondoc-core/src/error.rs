//! Error types for document access, conversion, parsing and file I/O.

use std::path::PathBuf;

use thiserror::Error;

use crate::value::Kind;

/// Errors that can occur while reading, converting, parsing or storing a [`Value`](crate::Value).
#[derive(Error, Debug)]
pub enum JsonError {
    /// An operation was attempted on a value of an incompatible kind
    /// (e.g. string-keyed access into an array, text conversion of an object).
    #[error("{operation} is not defined for {found} values")]
    TypeMismatch { operation: &'static str, found: Kind },

    /// Read access to an object key that is not present.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// Array read access outside `[0, len)` after negative-index wrapping.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    /// String-to-number conversion on text that is not a number.
    #[error("malformed number: {0:?}")]
    MalformedNumber(String),

    /// A number that does not fit the 32-bit integer payload.
    #[error("number out of range: {0}")]
    NumberOutOfRange(String),

    /// The parser ran off the end of the input in the middle of a value.
    /// Line and column are 1-based.
    #[error("unexpected end of input at line {line}, column {column}")]
    UnexpectedEndOfInput { line: usize, column: usize },

    /// The parser met a character that no grammar rule accepts at that position.
    #[error("unexpected character {found:?} at line {line}, column {column}")]
    UnexpectedToken {
        found: char,
        line: usize,
        column: usize,
    },

    /// Arrays/objects nested deeper than [`ParseOptions::max_depth`](crate::ParseOptions).
    #[error("nesting deeper than {limit} levels at line {line}, column {column}")]
    NestingTooDeep {
        limit: usize,
        line: usize,
        column: usize,
    },

    /// Reading or writing a document file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl JsonError {
    /// True for the errors produced by the parser, as opposed to access or I/O failures.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            JsonError::UnexpectedEndOfInput { .. }
                | JsonError::UnexpectedToken { .. }
                | JsonError::NestingTooDeep { .. }
        )
    }
}

/// Convenience alias used throughout jsondoc-core.
pub type Result<T> = std::result::Result<T, JsonError>;
