//! Error types for cell serialization.
//!
//! Parsing a cell never fails — unrecognized input degrades to a literal
//! string — so the error type here only covers the write side and the
//! optional regex compilation step:
//!
//! - [`Error::Structured`]: the structured-data sub-codec rejected a value
//!   during stringification. This is surfaced to the caller unmodified; it
//!   indicates a value the sub-codec fundamentally cannot represent.
//! - [`Error::Pattern`]: a parsed regex cell could not be compiled by
//!   [`CellRegex::to_regex`](crate::CellRegex::to_regex).
//!
//! ## Examples
//!
//! ```rust
//! use typed_cell::{parse_cell, CellValue};
//!
//! // Parsing is total: even hopeless input produces a value, not an error.
//! let value = parse_cell("not: valid: yaml: at all:");
//! assert!(matches!(value, CellValue::Literal(_)));
//! ```

use std::fmt;
use thiserror::Error;

/// Errors that can occur while writing a cell or compiling a regex cell.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The structured-data sub-codec failed to stringify a value.
    #[error("structured value error: {0}")]
    Structured(String),

    /// A regex cell's pattern was rejected by the regex engine.
    #[error("invalid regex pattern: {0}")]
    Pattern(String),

    /// Generic message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a structured sub-codec error.
    pub fn structured<T: fmt::Display>(msg: T) -> Self {
        Error::Structured(msg.to_string())
    }

    /// Creates a pattern compilation error.
    pub fn pattern<T: fmt::Display>(msg: T) -> Self {
        Error::Pattern(msg.to_string())
    }

    /// Creates a generic error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
