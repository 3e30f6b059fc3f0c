//! Typed representation of a cell.
//!
//! This module provides [`CellValue`], the closed set of types a cell can
//! carry, and [`Value`], the recursive payload of structured cells.
//!
//! ## Core Types
//!
//! - [`CellValue`]: one cell — empty, null, NaN, infinity, regex, timestamp,
//!   structured value, literal string, or a caller-supplied custom value
//! - [`Value`]: a structured payload — number, boolean, string, sequence, or
//!   insertion-ordered mapping, recursively
//! - [`Number`]: integer or float
//! - [`Timestamp`]: calendar timestamp, with or without a UTC offset
//! - [`CellRegex`]: a regex cell — pattern text plus flag letters
//! - [`ToCell`]: capability trait for values that render their own cell text
//!
//! ## Equality
//!
//! Equality on cell values is classification equality, tuned so that a
//! parse → stringify → parse cycle compares equal wherever the codec promises
//! a round trip:
//!
//! - `CellValue::NaN == CellValue::NaN` (unlike IEEE NaN)
//! - `Literal(s)` equals `Structured(Value::String(s))` with the same content;
//!   both are the string type, the split only records whether the sub-codec
//!   accepted the text
//! - `Custom` values compare by identity
//!
//! ## Examples
//!
//! ```rust
//! use typed_cell::{parse_cell, CellValue, Number, Value};
//!
//! let v = parse_cell("[1, 2, 3]");
//! assert_eq!(
//!     v,
//!     CellValue::Structured(Value::Sequence(vec![
//!         Value::Number(Number::Integer(1)),
//!         Value::Number(Number::Integer(2)),
//!         Value::Number(Number::Integer(3)),
//!     ]))
//! );
//! ```

use crate::{CellMap, Error, StringifyOptions};
use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat};
use regex::RegexBuilder;
use serde::de::{self, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// A numeric value inside a structured payload.
///
/// Integers that overflow `i64` degrade to `Float`; non-finite floats can
/// appear nested inside sequences and mappings (`.inf`, `.nan` scalars),
/// though at the top level of a cell those classify as their own
/// [`CellValue`] variants.
///
/// # Examples
///
/// ```rust
/// use typed_cell::Number;
///
/// let n = Number::Integer(42);
/// assert!(n.is_integer());
/// assert_eq!(n.as_i64(), Some(42));
/// assert_eq!(n.as_f64(), 42.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it is an integer or a float with
    /// no fractional part inside `i64` range.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`. Always succeeds.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

// NaN compares equal to NaN so parsed values are reflexively equal; this is
// classification equality, not IEEE arithmetic.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => (a.is_nan() && b.is_nan()) || a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// A structured payload: what the structured-data sub-codec can carry.
///
/// Mappings are string-keyed and insertion-ordered; see [`CellMap`].
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Mapping(CellMap),
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a sequence.
    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Returns `true` if the value is a mapping.
    #[inline]
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// If the value is a boolean, returns it.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer (or a whole-number float), returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a sequence, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// If the value is a mapping, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> Option<&CellMap> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Sequence(seq) => {
                write!(f, "[")?;
                for (i, v) in seq.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Value::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

impl From<CellMap> for Value {
    fn from(value: CellMap) -> Self {
        Value::Mapping(value)
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| Error::custom(format!("expected integer, found {:?}", value)))
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| Error::custom(format!("expected number, found {:?}", value)))
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| Error::custom(format!("expected bool, found {:?}", value)))
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::custom(format!("expected string, found {:?}", other))),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(seq) => {
                let mut state = serializer.serialize_seq(Some(seq.len()))?;
                for element in seq {
                    state.serialize_element(element)?;
                }
                state.end()
            }
            Value::Mapping(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    state.serialize_entry(k, v)?;
                }
                state.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a structured cell value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::Number(Number::Integer(value as i64)))
                } else {
                    Ok(Value::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut elements = Vec::new();
                while let Some(element) = seq.next_element()? {
                    elements.push(element);
                }
                Ok(Value::Sequence(elements))
            }

            // Mapping keys must be strings; anything else is a sub-codec
            // parse failure and the cell degrades to a literal.
            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries = CellMap::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    entries.insert(key, value);
                }
                Ok(Value::Mapping(entries))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

/// A calendar timestamp parsed from a cell.
///
/// Offset-bearing inputs (`Z` or `±HH:MM`) produce [`Timestamp::Zoned`];
/// offset-free inputs produce [`Timestamp::Naive`] — no local-zone guessing.
/// The two never compare equal.
///
/// # Examples
///
/// ```rust
/// use typed_cell::{parse_cell, CellValue, Timestamp};
///
/// let v = parse_cell("2021-05-04T10:00:00Z");
/// assert!(matches!(v, CellValue::DateTime(Timestamp::Zoned(_))));
///
/// let v = parse_cell("2021-05-04T10:00:00");
/// assert!(matches!(v, CellValue::DateTime(Timestamp::Naive(_))));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Timestamp {
    /// Timestamp with an explicit UTC offset.
    Zoned(DateTime<FixedOffset>),
    /// Timestamp without offset information.
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Returns `true` if the timestamp carries an explicit offset.
    #[inline]
    #[must_use]
    pub const fn is_zoned(&self) -> bool {
        matches!(self, Timestamp::Zoned(_))
    }

    /// If the timestamp is zoned, returns it.
    #[inline]
    #[must_use]
    pub fn as_zoned(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Timestamp::Zoned(dt) => Some(dt),
            _ => None,
        }
    }

    /// If the timestamp is naive, returns it.
    #[inline]
    #[must_use]
    pub fn as_naive(&self) -> Option<&NaiveDateTime> {
        match self {
            Timestamp::Naive(dt) => Some(dt),
            _ => None,
        }
    }

    /// Renders the timestamp in an ISO-8601 form that the cell classifier
    /// recognizes as a date on re-read.
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        match self {
            Timestamp::Zoned(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            Timestamp::Naive(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso8601())
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Timestamp::Zoned(value)
    }
}

impl From<DateTime<chrono::Utc>> for Timestamp {
    fn from(value: DateTime<chrono::Utc>) -> Self {
        Timestamp::Zoned(value.fixed_offset())
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Timestamp::Naive(value)
    }
}

/// A regex cell: the pattern text between the slashes plus the trailing flag
/// letters.
///
/// The pattern is stored as text and never compiled during classification, so
/// parsing stays total even for patterns the regex engine rejects. Call
/// [`CellRegex::to_regex`] to compile on demand.
///
/// Writing a regex cell back to text is lossy: only the pattern is emitted,
/// the flags are dropped.
///
/// # Examples
///
/// ```rust
/// use typed_cell::{parse_cell, CellValue};
///
/// let v = parse_cell("/ab+c/gi");
/// match v {
///     CellValue::Regex(re) => {
///         assert_eq!(re.pattern(), "ab+c");
///         assert_eq!(re.flags(), "gi");
///         assert!(re.has_flag('i'));
///     }
///     _ => panic!("expected regex"),
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellRegex {
    pattern: String,
    flags: String,
}

impl CellRegex {
    /// Creates a regex cell from pattern text and flag letters.
    #[must_use]
    pub fn new(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        CellRegex {
            pattern: pattern.into(),
            flags: flags.into(),
        }
    }

    /// Returns the pattern text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the flag letters, in the order they appeared.
    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Returns `true` if the given flag letter is set.
    #[must_use]
    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }

    /// Compiles the pattern with the regex crate.
    ///
    /// The syntax flags `i`, `m`, `s`, and `u` map onto the corresponding
    /// builder switches; the match-semantics flags `g`, `y`, and `v` have no
    /// engine analogue and are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] if the regex engine rejects the pattern.
    pub fn to_regex(&self) -> crate::Result<regex::Regex> {
        RegexBuilder::new(&self.pattern)
            .case_insensitive(self.has_flag('i'))
            .multi_line(self.has_flag('m'))
            .dot_matches_new_line(self.has_flag('s'))
            .unicode(true)
            .build()
            .map_err(Error::pattern)
    }
}

impl fmt::Display for CellRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.pattern, self.flags)
    }
}

/// Capability trait for values that render their own cell text.
///
/// Implement this for caller-defined types and wrap them with
/// [`CellValue::custom`]; the serializer delegates to [`ToCell::to_cell`]
/// with the caller's options and returns the result verbatim.
///
/// # Examples
///
/// ```rust
/// use typed_cell::{stringify_cell, CellValue, StringifyOptions, ToCell};
///
/// #[derive(Debug)]
/// struct Percent(f64);
///
/// impl ToCell for Percent {
///     fn to_cell(&self, _options: &StringifyOptions) -> String {
///         format!("{}%", self.0)
///     }
/// }
///
/// let cell = CellValue::custom(Percent(12.5));
/// assert_eq!(stringify_cell(&cell).unwrap(), "12.5%");
/// ```
pub trait ToCell: fmt::Debug + Send + Sync {
    /// Renders this value as cell text, honoring the caller's options.
    fn to_cell(&self, options: &StringifyOptions) -> String;
}

/// A shared handle to a caller-defined value implementing [`ToCell`].
///
/// Cloning is cheap (reference-counted); equality is identity — two handles
/// are equal only if they point at the same underlying object.
#[derive(Clone)]
pub struct CustomCell(Arc<dyn ToCell>);

impl CustomCell {
    /// Wraps a value implementing [`ToCell`].
    #[must_use]
    pub fn new<T: ToCell + 'static>(value: T) -> Self {
        CustomCell(Arc::new(value))
    }

    /// Renders the wrapped value as cell text.
    #[must_use]
    pub fn to_cell(&self, options: &StringifyOptions) -> String {
        self.0.to_cell(options)
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CustomCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomCell({:?})", self.0)
    }
}

/// A dynamically-typed representation of one cell.
///
/// Every raw cell string maps to exactly one variant; classification is total
/// and happens in a fixed priority order (see [`parse_cell`](crate::parse_cell)).
///
/// # Examples
///
/// ```rust
/// use typed_cell::{parse_cell, CellValue};
///
/// assert_eq!(parse_cell(""), CellValue::Empty);
/// assert_eq!(parse_cell("nan"), CellValue::NaN);
/// assert_eq!(parse_cell("-inf"), CellValue::NegativeInfinity);
/// assert!(parse_cell("2021-05-04T10:00:00Z").is_datetime());
/// assert!(parse_cell("true").is_structured());
/// ```
#[derive(Clone, Debug, Default)]
pub enum CellValue {
    /// The cell had no content after trimming. Distinct from [`CellValue::Null`]
    /// and from an empty string value.
    #[default]
    Empty,
    /// Explicit null marker.
    Null,
    /// Not-a-number.
    NaN,
    /// Positive infinity.
    Infinity,
    /// Negative infinity.
    NegativeInfinity,
    /// A regex cell.
    Regex(CellRegex),
    /// A calendar timestamp.
    DateTime(Timestamp),
    /// A value the structured-data sub-codec accepted.
    Structured(Value),
    /// Opaque text that matched no other case and failed structured parsing.
    /// Preserves the original cell text verbatim, untrimmed.
    Literal(String),
    /// A caller-defined value carrying its own cell-conversion capability.
    Custom(CustomCell),
}

impl CellValue {
    /// Wraps a caller-defined value implementing [`ToCell`].
    #[must_use]
    pub fn custom<T: ToCell + 'static>(value: T) -> Self {
        CellValue::Custom(CustomCell::new(value))
    }

    /// Returns `true` for the empty cell.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Returns `true` for the explicit null marker.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns `true` for NaN.
    #[inline]
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        matches!(self, CellValue::NaN)
    }

    /// Returns `true` for either infinity.
    #[inline]
    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, CellValue::Infinity | CellValue::NegativeInfinity)
    }

    /// Returns `true` for a regex cell.
    #[inline]
    #[must_use]
    pub const fn is_regex(&self) -> bool {
        matches!(self, CellValue::Regex(_))
    }

    /// Returns `true` for a timestamp cell.
    #[inline]
    #[must_use]
    pub const fn is_datetime(&self) -> bool {
        matches!(self, CellValue::DateTime(_))
    }

    /// Returns `true` for a structured value.
    #[inline]
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        matches!(self, CellValue::Structured(_))
    }

    /// Returns `true` for string-typed cells — a literal or a structured
    /// string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(
            self,
            CellValue::Literal(_) | CellValue::Structured(Value::String(_))
        )
    }

    /// If the cell is string-typed (literal or structured string), returns
    /// its content.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Literal(s) => Some(s),
            CellValue::Structured(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// If the cell is a structured value, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_structured(&self) -> Option<&Value> {
        match self {
            CellValue::Structured(v) => Some(v),
            _ => None,
        }
    }

    /// If the cell is a regex, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_regex(&self) -> Option<&CellRegex> {
        match self {
            CellValue::Regex(re) => Some(re),
            _ => None,
        }
    }

    /// If the cell is a timestamp, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> Option<&Timestamp> {
        match self {
            CellValue::DateTime(ts) => Some(ts),
            _ => None,
        }
    }
}

// Classification equality. Literal and structured strings fold together:
// both are the string type, and a literal's re-read comes back through the
// sub-codec as a structured string.
impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Empty, CellValue::Empty)
            | (CellValue::Null, CellValue::Null)
            | (CellValue::NaN, CellValue::NaN)
            | (CellValue::Infinity, CellValue::Infinity)
            | (CellValue::NegativeInfinity, CellValue::NegativeInfinity) => true,
            (CellValue::Regex(a), CellValue::Regex(b)) => a == b,
            (CellValue::DateTime(a), CellValue::DateTime(b)) => a == b,
            (CellValue::Structured(a), CellValue::Structured(b)) => a == b,
            (CellValue::Literal(a), CellValue::Literal(b)) => a == b,
            (CellValue::Literal(a), CellValue::Structured(Value::String(b)))
            | (CellValue::Structured(Value::String(a)), CellValue::Literal(b)) => a == b,
            (CellValue::Custom(a), CellValue::Custom(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        CellValue::Structured(value)
    }
}

impl From<CellRegex> for CellValue {
    fn from(value: CellRegex) -> Self {
        CellValue::Regex(value)
    }
}

impl From<Timestamp> for CellValue {
    fn from(value: Timestamp) -> Self {
        CellValue::DateTime(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_accessors() {
        let n = Number::Integer(42);
        assert!(n.is_integer());
        assert_eq!(n.as_i64(), Some(42));
        assert_eq!(n.as_f64(), 42.0);

        let f = Number::Float(42.5);
        assert!(f.is_float());
        assert_eq!(f.as_i64(), None);
        assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    }

    #[test]
    fn number_nan_is_reflexively_equal() {
        assert_eq!(Number::Float(f64::NAN), Number::Float(f64::NAN));
        assert_ne!(Number::Float(f64::NAN), Number::Float(1.0));
        assert_ne!(Number::Integer(1), Number::Float(1.0));
    }

    #[test]
    fn literal_folds_with_structured_string() {
        let literal = CellValue::Literal("hello".to_string());
        let structured = CellValue::Structured(Value::String("hello".to_string()));
        assert_eq!(literal, structured);
        assert_eq!(structured, literal);
        assert_ne!(literal, CellValue::Literal("other".to_string()));
    }

    #[test]
    fn empty_and_null_are_distinct() {
        assert_ne!(CellValue::Empty, CellValue::Null);
        assert_ne!(CellValue::Empty, CellValue::Structured(Value::String(String::new())));
    }

    #[test]
    fn regex_flags() {
        let re = CellRegex::new("ab+c", "gi");
        assert_eq!(re.pattern(), "ab+c");
        assert!(re.has_flag('g'));
        assert!(re.has_flag('i'));
        assert!(!re.has_flag('m'));
        assert_eq!(re.to_string(), "/ab+c/gi");
    }

    #[test]
    fn regex_compiles_with_supported_flags() {
        let re = CellRegex::new("ab+c", "gi").to_regex().unwrap();
        assert!(re.is_match("xABBC"));

        let bad = CellRegex::new("(", "");
        assert!(bad.to_regex().is_err());
    }

    #[test]
    fn timestamp_rendering() {
        let zoned = Timestamp::Zoned(
            DateTime::parse_from_str("2021-05-04T10:00:00+00:00", "%Y-%m-%dT%H:%M:%S%:z").unwrap(),
        );
        assert_eq!(zoned.to_iso8601(), "2021-05-04T10:00:00Z");

        let naive = Timestamp::Naive(
            NaiveDateTime::parse_from_str("2021-05-04T10:00:00", "%Y-%m-%dT%H:%M:%S").unwrap(),
        );
        assert_eq!(naive.to_iso8601(), "2021-05-04T10:00:00");
        assert_ne!(zoned, naive);
    }

    #[test]
    fn custom_cells_compare_by_identity() {
        #[derive(Debug)]
        struct Marker;

        impl ToCell for Marker {
            fn to_cell(&self, _options: &StringifyOptions) -> String {
                "marker".to_string()
            }
        }

        let a = CellValue::custom(Marker);
        let b = a.clone();
        let c = CellValue::custom(Marker);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn value_display() {
        let mut map = CellMap::new();
        map.insert("a".to_string(), Value::from(1));
        let v = Value::Sequence(vec![Value::from(1), Value::Mapping(map)]);
        assert_eq!(v.to_string(), "[1, {a: 1}]");
    }
}
