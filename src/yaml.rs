//! Structured-data sub-codec integration.
//!
//! The cell mini-language for numbers, booleans, strings, sequences, and
//! mappings is YAML; this module is the single seam between [`Value`] and the
//! serde_yaml collaborator. Both directions go straight through serde —
//! [`Value`] implements `Serialize`/`Deserialize`, so no intermediate
//! representation is needed.
//!
//! Flow-style emission ([`YamlOptions::flow`]) is delegated to serde_json:
//! YAML's flow style is a superset of JSON, so the JSON rendering of a
//! sequence or mapping is already a valid single-line cell that re-parses to
//! the same value. One consequence inherited from JSON: non-finite floats
//! nested inside flow collections degrade to null.

use crate::{Error, Result, Value, YamlOptions};

/// Parses trimmed cell text with the structured-data sub-codec.
///
/// Any failure — syntax error, non-string mapping key, tagged value — is
/// reported as [`Error::Structured`]; the classifier downgrades it to a
/// literal, never propagates it.
pub(crate) fn parse_structured(s: &str) -> Result<Value> {
    serde_yaml::from_str(s).map_err(Error::structured)
}

/// Stringifies a structured value with the sub-codec.
///
/// Block style (the default) always ends with a newline, which the serializer
/// strips; flow style produces a single line with no trailing newline.
pub(crate) fn write_structured(value: &Value, options: &YamlOptions) -> Result<String> {
    if options.flow && matches!(value, Value::Sequence(_) | Value::Mapping(_)) {
        return serde_json::to_string(value).map_err(Error::structured);
    }
    serde_yaml::to_string(value).map_err(Error::structured)
}
