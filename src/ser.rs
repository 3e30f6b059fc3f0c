//! Cell serialization and escaping.
//!
//! [`stringify_cell_with_options`] writes a typed [`CellValue`] back to cell
//! text. The dispatch order mirrors the classifier so that what goes out
//! comes back in as an equal value:
//!
//! 1. null/empty → `null` (or an empty cell with
//!    [`null_as_empty`](crate::StringifyOptions::null_as_empty))
//! 2. empty string value → `""`, a quoted empty cell, so it stays
//!    distinguishable from an empty cell on re-read
//! 3. timestamp → ISO-8601 text
//! 4. regex → the pattern text only; flags are dropped (documented asymmetry)
//! 5. custom value → its own [`ToCell`](crate::ToCell) rendering, verbatim
//! 6. other non-strings → the structured-data sub-codec, minus one trailing
//!    newline
//! 7. strings → JSON-style quoting when the text is reserved, otherwise the
//!    sub-codec's own quoting rules
//!
//! The only failure path is the sub-codec itself rejecting a value; that
//! error propagates unmodified.
//!
//! ## Examples
//!
//! ```rust
//! use typed_cell::{parse_cell, stringify_cell, CellValue, Value};
//!
//! let text = stringify_cell(&CellValue::Structured(Value::from("=1+1"))).unwrap();
//! assert_eq!(text, "\"=1+1\"");
//! assert_eq!(parse_cell(&text).as_str(), Some("=1+1"));
//! ```

use crate::value::{CellValue, Value};
use crate::yaml;
use crate::{patterns, Result, StringifyOptions, YamlOptions};

/// Writes a typed value as cell text with the given options.
///
/// # Errors
///
/// Returns [`Error::Structured`](crate::Error::Structured) only when the
/// structured-data sub-codec fails to stringify a nested value.
///
/// # Examples
///
/// ```rust
/// use typed_cell::{stringify_cell_with_options, CellValue, StringifyOptions};
///
/// let options = StringifyOptions::new().with_null_as_empty(true);
/// assert_eq!(
///     stringify_cell_with_options(&CellValue::Null, options).unwrap(),
///     ""
/// );
/// ```
pub fn stringify_cell_with_options(
    value: &CellValue,
    options: StringifyOptions,
) -> Result<String> {
    match value {
        CellValue::Empty | CellValue::Null => Ok(if options.null_as_empty {
            String::new()
        } else {
            "null".to_string()
        }),
        CellValue::Literal(s) => write_string(s),
        CellValue::Structured(Value::String(s)) => write_string(s),
        CellValue::DateTime(ts) => Ok(ts.to_iso8601()),
        CellValue::Regex(re) => Ok(re.pattern().to_string()),
        CellValue::Custom(custom) => Ok(custom.to_cell(&options)),
        // the canonical dotted forms, which the classifier reclaims
        CellValue::NaN => Ok(".nan".to_string()),
        CellValue::Infinity => Ok(".inf".to_string()),
        CellValue::NegativeInfinity => Ok("-.inf".to_string()),
        CellValue::Structured(v) => {
            let mut out = yaml::write_structured(v, &options.yaml)?;
            if out.ends_with('\n') {
                out.pop();
            }
            Ok(out)
        }
    }
}

/// String cells: reserved text gets JSON-style quoting; everything else goes
/// through the sub-codec, which quotes exactly when YAML requires it.
fn write_string(s: &str) -> Result<String> {
    if s.is_empty() {
        return Ok("\"\"".to_string());
    }
    if patterns::is_reserved(s) {
        return Ok(quote(s));
    }

    let rendered = yaml::write_structured(&Value::String(s.to_string()), &YamlOptions::default())?;
    if (rendered.starts_with('"') || rendered.starts_with('\'')) && rendered.ends_with('\n') {
        return Ok(rendered[..rendered.len() - 1].to_string());
    }
    // Unquoted single-line emission: the sub-codec echoed the text plus one
    // newline. Multi-line strings come back as block scalars and keep their
    // trailing newline.
    if rendered.len() == s.len() + 1 && rendered.ends_with('\n') && !s.ends_with('\n') {
        return Ok(rendered[..rendered.len() - 1].to_string());
    }
    Ok(rendered)
}

/// Double-quoted escaping for reserved strings. The escape set is JSON's,
/// which the sub-codec's double-quoted style also accepts, so the quoted cell
/// re-parses to the same string.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
