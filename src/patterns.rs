//! Shared pattern library.
//!
//! The date recognizers and the reserved-pattern tester used by both sides of
//! the codec. Every pattern is a process-wide [`Lazy`] static: compiled on
//! first use, then shared read-only across calls and threads.
//!
//! All patterns are anchored at the start of the input and deliberately *not*
//! at the end — a cell that merely opens like a date already has to be treated
//! as date-shaped (for classification) and as reserved (for escaping).

use once_cell::sync::Lazy;
use regex::Regex;

/// ISO-8601 timestamps carrying an explicit offset (`Z` or `±HH:MM`), in
/// three shapes: with fractional seconds, with whole seconds, and hour:minute
/// only.
static ISO_8601_OFFSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d{4}-[01]\d-[0-3]\dT[0-2]\d:[0-5]\d:[0-5]\d\.\d+([+-][0-2]\d:[0-5]\d|Z)|\d{4}-[01]\d-[0-3]\dT[0-2]\d:[0-5]\d:[0-5]\d([+-][0-2]\d:[0-5]\d|Z)|\d{4}-[01]\d-[0-3]\dT[0-2]\d:[0-5]\d([+-][0-2]\d:[0-5]\d|Z))",
    )
    .unwrap()
});

/// The same three timestamp shapes without an offset.
static ISO_8601_NAIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d{4}-[01]\d-[0-3]\dT[0-2]\d:[0-5]\d:[0-5]\d\.\d+|\d{4}-[01]\d-[0-3]\dT[0-2]\d:[0-5]\d:[0-5]\d|\d{4}-[01]\d-[0-3]\dT[0-2]\d:[0-5]\d)",
    )
    .unwrap()
});

/// Loose date-only form: 4-digit year, 1-2 digit month and day, terminated by
/// end of input, space, or tab.
static SIMPLE_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}($|[ \t])").unwrap());

/// `D/M/Y` date shape, reserved but never parsed.
static DAY_MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{1,2}(\s|$)").unwrap());

/// Duration-like prefix (`90:`), reserved for future use.
static DURATION_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+:").unwrap());

/// Trailing regex flag group: a `/` followed only by flag letters up to the
/// end of the input. Unanchored at the front so a search locates the group.
pub(crate) static REGEX_FLAG_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/[igmusyv]*$").unwrap());

/// Not-a-number literal, case-insensitive, optional leading dot.
pub(crate) static NAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\.?nan$").unwrap());

/// Infinity literal, case-insensitive, optional sign and leading dot.
pub(crate) static INFINITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^-?\.?(inf|infinity)$").unwrap());

/// Reports whether `s` starts with an ISO-8601 timestamp, with or without an
/// offset.
///
/// # Examples
///
/// ```rust
/// use typed_cell::patterns::matches_iso8601;
///
/// assert!(matches_iso8601("2021-05-04T10:00:00Z"));
/// assert!(matches_iso8601("2021-05-04T10:00:00.123+02:00"));
/// assert!(matches_iso8601("2021-05-04T10:00"));
/// assert!(!matches_iso8601("2021-05-04"));
/// ```
#[must_use]
pub fn matches_iso8601(s: &str) -> bool {
    ISO_8601_OFFSET.is_match(s) || ISO_8601_NAIVE.is_match(s)
}

/// Reports whether `s` starts with the loose `YYYY-M-D` date-only form.
///
/// # Examples
///
/// ```rust
/// use typed_cell::patterns::matches_simple_date;
///
/// assert!(matches_simple_date("2021-05-04"));
/// assert!(matches_simple_date("2021-5-4"));
/// assert!(matches_simple_date("2021-05-04 10:00"));
/// assert!(!matches_simple_date(" 2021-05-04"));
/// assert!(!matches_simple_date("21-05-04"));
/// ```
#[must_use]
pub fn matches_simple_date(s: &str) -> bool {
    SIMPLE_DATE.is_match(s)
}

/// Reports whether a plain string would be misread as a non-string type or a
/// reserved construct if written unescaped.
///
/// Reserved shapes: computed-value marker `=`, regex `/pattern/flags`,
/// comment marker `#`, duration-like `N:`, the simple and `D/M/Y` date
/// shapes, and full ISO-8601 timestamps.
///
/// # Examples
///
/// ```rust
/// use typed_cell::patterns::is_reserved;
///
/// assert!(is_reserved("=1+1"));
/// assert!(is_reserved("/ab+c/gi"));
/// assert!(is_reserved("#comment"));
/// assert!(is_reserved("90:00"));
/// assert!(is_reserved("2021-05-04"));
/// assert!(is_reserved("4/5/21"));
/// assert!(!is_reserved("hello"));
/// assert!(!is_reserved("/not a regex"));
/// ```
#[must_use]
pub fn is_reserved(s: &str) -> bool {
    s.starts_with('=')
        || (s.starts_with('/') && REGEX_FLAG_SUFFIX.is_match(s))
        || s.starts_with('#')
        || DURATION_PREFIX.is_match(s)
        || SIMPLE_DATE.is_match(s)
        || DAY_MONTH_YEAR.is_match(s)
        || matches_iso8601(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso8601_offset_shapes() {
        assert!(matches_iso8601("2021-05-04T10:00:00.500Z"));
        assert!(matches_iso8601("2021-05-04T10:00:00-05:30"));
        assert!(matches_iso8601("2021-05-04T10:00+02:00"));
    }

    #[test]
    fn iso8601_naive_shapes() {
        assert!(matches_iso8601("2021-05-04T10:00:00.5"));
        assert!(matches_iso8601("2021-05-04T10:00:00"));
        assert!(matches_iso8601("2021-05-04T10:00"));
    }

    #[test]
    fn iso8601_rejects_out_of_range_fields() {
        // 60 seconds and 60 minutes fall outside the [0-5]\d classes
        assert!(!matches_iso8601("2021-05-04T10:60:00Z"));
        assert!(!matches_iso8601("2021-05-04T10:00:60Z"));
        // month class is [01]\d
        assert!(!matches_iso8601("2021-25-04T10:00:00Z"));
    }

    #[test]
    fn iso8601_is_not_end_anchored() {
        assert!(matches_iso8601("2021-05-04T10:00:00Z and then some"));
    }

    #[test]
    fn simple_date_requires_four_digit_year_at_start() {
        assert!(matches_simple_date("2021-5-4"));
        assert!(matches_simple_date("2021-05-04\tx"));
        assert!(!matches_simple_date("305-05-04"));
        assert!(!matches_simple_date("2021-05-04x"));
    }

    #[test]
    fn reserved_regex_needs_trailing_flag_group() {
        assert!(is_reserved("/"));
        assert!(is_reserved("/gi"));
        assert!(is_reserved("/a/"));
        assert!(is_reserved("/ab+c/img"));
        assert!(!is_reserved("/usr/bin"));
        assert!(!is_reserved("a/b/c"));
    }

    #[test]
    fn reserved_duration_and_slash_dates() {
        assert!(is_reserved("1:00"));
        assert!(is_reserved("12:"));
        assert!(is_reserved("1/2/21"));
        assert!(is_reserved("1/2/21 note"));
        assert!(!is_reserved("1/2/2021x"));
        assert!(!is_reserved(":30"));
    }

    #[test]
    fn ordinary_text_is_not_reserved() {
        assert!(!is_reserved("hello world"));
        assert!(!is_reserved("42"));
        assert!(!is_reserved(""));
    }
}
