//! # typed_cell
//!
//! A typed-cell codec for CSV-like tabular data.
//!
//! ## What is a typed cell?
//!
//! CSV carries strings. This crate lets a CSV file carry non-string types
//! without a schema, using lightweight textual conventions inside each cell:
//! a YAML mini-language for numbers, booleans, sequences, and mappings;
//! reserved prefixes for regexes, computed values, and comments; and
//! ISO-8601 recognition for dates. [`parse_cell`] turns one raw cell string
//! into a typed [`CellValue`]; [`stringify_cell`] turns a typed value back
//! into text that re-parses to an equal value.
//!
//! Row/column splitting and file I/O stay with the host application — the
//! codec only ever sees a single cell.
//!
//! ## Key Properties
//!
//! - **Total parsing**: every input maps to exactly one value; malformed
//!   structured data degrades to a literal string instead of erroring
//! - **Round-trippable**: written cells re-parse to equal values, with two
//!   documented exceptions (regex flags, empty-vs-null) — see the
//!   [`format`] module
//! - **Stateless and reentrant**: both directions are pure functions, safe
//!   to call concurrently without coordination
//!
//! ## Quick Start
//!
//! ```rust
//! use typed_cell::{parse_cell, stringify_cell, CellValue, Number, Value};
//!
//! // cell text in, typed values out
//! assert_eq!(parse_cell(""), CellValue::Empty);
//! assert_eq!(parse_cell("nan"), CellValue::NaN);
//! assert_eq!(
//!     parse_cell("42"),
//!     CellValue::Structured(Value::Number(Number::Integer(42)))
//! );
//! assert!(parse_cell("2021-05-04T10:00:00Z").is_datetime());
//! assert!(parse_cell("[1, 2, 3]").is_structured());
//!
//! // typed values in, round-trippable text out
//! let cell = stringify_cell(&CellValue::Structured(Value::from("=1+1"))).unwrap();
//! assert_eq!(cell, "\"=1+1\"");
//! assert_eq!(parse_cell(&cell).as_str(), Some("=1+1"));
//! ```
//!
//! ## Options
//!
//! ```rust
//! use typed_cell::{stringify_cell_with_options, CellValue, StringifyOptions, Value, YamlOptions};
//!
//! let seq = CellValue::Structured(Value::Sequence(vec![
//!     Value::from(1),
//!     Value::from(2),
//! ]));
//!
//! // flow style keeps collections on one line
//! let options = StringifyOptions::new().with_yaml(YamlOptions::new().with_flow(true));
//! assert_eq!(stringify_cell_with_options(&seq, options).unwrap(), "[1,2]");
//! ```
//!
//! ## Custom types
//!
//! Caller-defined types can render their own cell text by implementing
//! [`ToCell`]; see [`CellValue::custom`].
//!
//! ## Format reference
//!
//! The [`format`] module documents the full set of cell text conventions:
//! the classification order, the reserved shapes, and the two documented
//! round-trip asymmetries.

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod patterns;
pub mod ser;
pub mod value;
mod yaml;

pub use de::parse_cell;
pub use error::{Error, Result};
pub use map::CellMap;
pub use options::{StringifyOptions, YamlOptions};
pub use ser::stringify_cell_with_options;
pub use value::{CellRegex, CellValue, CustomCell, Number, Timestamp, ToCell, Value};

/// Writes a typed value as cell text with default options.
///
/// Equivalent to [`stringify_cell_with_options`] with
/// [`StringifyOptions::default`].
///
/// # Examples
///
/// ```rust
/// use typed_cell::{stringify_cell, CellValue};
///
/// assert_eq!(stringify_cell(&CellValue::Null).unwrap(), "null");
/// ```
///
/// # Errors
///
/// Returns an error only when the structured-data sub-codec fails to
/// stringify a nested value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_cell(value: &CellValue) -> Result<String> {
    stringify_cell_with_options(value, StringifyOptions::default())
}
