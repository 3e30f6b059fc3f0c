//! Configuration options for cell serialization.
//!
//! This module provides types to customize how typed values are written back
//! to cell text:
//!
//! - [`StringifyOptions`]: main configuration struct passed to
//!   [`stringify_cell_with_options`](crate::stringify_cell_with_options)
//! - [`YamlOptions`]: formatting options forwarded to the structured-data
//!   sub-codec for non-string values
//!
//! ## Examples
//!
//! ```rust
//! use typed_cell::{stringify_cell_with_options, CellValue, StringifyOptions, YamlOptions};
//!
//! // Write nulls as empty cells
//! let options = StringifyOptions::new().with_null_as_empty(true);
//! let text = stringify_cell_with_options(&CellValue::Null, options).unwrap();
//! assert_eq!(text, "");
//!
//! // Emit sequences inline instead of block style
//! let options = StringifyOptions::new().with_yaml(YamlOptions::new().with_flow(true));
//! ```

/// Formatting options forwarded to the structured-data sub-codec.
///
/// Only switches the sub-codec integration can genuinely honor are exposed.
///
/// # Examples
///
/// ```rust
/// use typed_cell::YamlOptions;
///
/// let options = YamlOptions::new().with_flow(true);
/// assert!(options.flow);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct YamlOptions {
    /// Emit top-level sequences and mappings in flow style (`[1, 2, 3]`,
    /// `{"a": 1}`) instead of block style. Flow output is JSON-compatible and
    /// re-parses to the same value.
    pub flow: bool,
}

impl YamlOptions {
    /// Creates default options (block style).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects flow-style emission for sequences and mappings.
    #[must_use]
    pub fn with_flow(mut self, flow: bool) -> Self {
        self.flow = flow;
        self
    }
}

/// Configuration options for [`stringify_cell_with_options`](crate::stringify_cell_with_options).
///
/// # Examples
///
/// ```rust
/// use typed_cell::{StringifyOptions, YamlOptions};
///
/// let options = StringifyOptions::new()
///     .with_null_as_empty(true)
///     .with_yaml(YamlOptions::new().with_flow(true));
/// assert!(options.null_as_empty);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct StringifyOptions {
    /// Write null (and empty) values as an empty cell instead of the literal
    /// `null`.
    pub null_as_empty: bool,
    /// Formatting options forwarded to the structured-data sub-codec when a
    /// non-string value is written.
    pub yaml: YamlOptions,
}

impl StringifyOptions {
    /// Creates default options (`null` literal, block-style structured output).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls whether nulls are written as empty cells.
    #[must_use]
    pub fn with_null_as_empty(mut self, null_as_empty: bool) -> Self {
        self.null_as_empty = null_as_empty;
        self
    }

    /// Sets the sub-codec formatting options.
    #[must_use]
    pub fn with_yaml(mut self, yaml: YamlOptions) -> Self {
        self.yaml = yaml;
        self
    }
}
