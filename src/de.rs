//! Cell classification and parsing.
//!
//! [`parse_cell`] resolves one raw cell string to a typed [`CellValue`]. The
//! classifier applies a fixed priority order, first match wins:
//!
//! 1. trim; empty → [`CellValue::Empty`]
//! 2. NaN literal (`nan`, `.NaN`, …)
//! 3. infinity literal (`inf`, `-infinity`, `-.inf`, …)
//! 4. regex by leading slash with a trailing flag group (`/ab+c/gi`)
//! 5. date — the simple `YYYY-M-D` form or an ISO-8601 timestamp, tested
//!    against the *untrimmed* cell so anchoring is exact
//! 6. structured-data attempt on the trimmed text
//! 7. fallback: the original text as a [`CellValue::Literal`]
//!
//! Parsing is total. There is no error path: a structured-data failure
//! downgrades to the literal fallback, and a date-shaped string the calendar
//! rejects (month 99, trailing junk) falls through to the structured attempt
//! instead of failing.
//!
//! ## Examples
//!
//! ```rust
//! use typed_cell::{parse_cell, CellValue};
//!
//! assert_eq!(parse_cell("  "), CellValue::Empty);
//! assert_eq!(parse_cell(".NaN"), CellValue::NaN);
//! assert!(parse_cell("2021-05-04").is_datetime());
//! assert!(parse_cell("{a: 1}").is_structured());
//! assert!(parse_cell("][").is_string());
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::patterns::{self, INFINITY, NAN, REGEX_FLAG_SUFFIX};
use crate::value::{CellRegex, CellValue, Timestamp, Value};
use crate::yaml;

/// Offset-bearing timestamp layouts, tried in order. `Z` suffixes are
/// normalized to `+00:00` first.
const ZONED_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

/// Offset-free timestamp layouts. The space-separated variants cover the
/// datetime shapes admitted by the simple-date pattern.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Resolves a raw cell string to a typed value.
///
/// Total function: every input maps to exactly one [`CellValue`] and nothing
/// panics or errors. See the [module documentation](self) for the
/// classification order.
///
/// # Examples
///
/// ```rust
/// use typed_cell::{parse_cell, CellValue, Number, Value};
///
/// assert_eq!(parse_cell(""), CellValue::Empty);
/// assert_eq!(parse_cell("null"), CellValue::Null);
/// assert_eq!(
///     parse_cell("3.5"),
///     CellValue::Structured(Value::Number(Number::Float(3.5)))
/// );
/// assert_eq!(
///     parse_cell("plain text"),
///     CellValue::Structured(Value::String("plain text".to_string()))
/// );
/// ```
#[must_use]
pub fn parse_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }

    if NAN.is_match(trimmed) {
        return CellValue::NaN;
    }

    // Sign detection reads the trimmed text directly so the dotted variants
    // (-.inf) keep their sign.
    if INFINITY.is_match(trimmed) {
        return if trimmed.starts_with('-') {
            CellValue::NegativeInfinity
        } else {
            CellValue::Infinity
        };
    }

    if trimmed.starts_with('/') {
        if let Some(flag_group) = REGEX_FLAG_SUFFIX.find(trimmed) {
            return CellValue::Regex(split_regex(trimmed, flag_group.start()));
        }
        // No valid trailing flag group: not a regex, keep classifying.
    }

    // Date tests run against the original cell, not the trimmed one.
    if patterns::matches_simple_date(raw) || patterns::matches_iso8601(raw) {
        if let Some(timestamp) = parse_timestamp(raw) {
            return CellValue::DateTime(timestamp);
        }
    }

    match yaml::parse_structured(trimmed) {
        Ok(Value::Null) => CellValue::Null,
        Ok(value) => CellValue::Structured(value),
        Err(_) => CellValue::Literal(raw.to_string()),
    }
}

/// Splits `/pattern/flags` at the flag group found at `flag_start`. When the
/// flag group's slash is also the leading slash (`/`, `/gi`), the pattern is
/// empty.
fn split_regex(trimmed: &str, flag_start: usize) -> CellRegex {
    let pattern = if flag_start > 0 {
        &trimmed[1..flag_start]
    } else {
        ""
    };
    CellRegex::new(pattern, &trimmed[flag_start + 1..])
}

/// Parses a date-shaped cell with chrono. Returns `None` when the loose
/// recognizers admitted something the calendar rejects.
fn parse_timestamp(s: &str) -> Option<Timestamp> {
    let normalized = s.strip_suffix('Z').map(|prefix| format!("{prefix}+00:00"));
    let zoned_input = normalized.as_deref().unwrap_or(s);
    for format in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(zoned_input, format) {
            return Some(Timestamp::Zoned(dt));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Timestamp::Naive(dt));
        }
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(Timestamp::Naive(date.and_hms_opt(0, 0, 0)?))
}
