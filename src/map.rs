//! Ordered map type for structured mappings.
//!
//! This module provides [`CellMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for mapping entries. Order matters for cells:
//! a mapping written back to text should list its keys the way the source
//! cell did, so a parse/stringify cycle does not shuffle columns of data
//! that downstream tooling reads positionally.
//!
//! ## Examples
//!
//! ```rust
//! use typed_cell::{CellMap, Value};
//!
//! let mut map = CellMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["name", "age"]);
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

use crate::Value;

/// An insertion-ordered map of string keys to structured values.
///
/// # Examples
///
/// ```rust
/// use typed_cell::{CellMap, Value};
///
/// let mut map = CellMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("first").and_then(|v| v.as_i64()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellMap(IndexMap<String, Value>);

impl CellMap {
    /// Creates an empty `CellMap`.
    #[must_use]
    pub fn new() -> Self {
        CellMap(IndexMap::new())
    }

    /// Creates an empty `CellMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        CellMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for the key if
    /// there was one.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value for the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes the entry for the key, preserving the order of the remaining
    /// entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for CellMap {
    fn from(map: HashMap<String, Value>) -> Self {
        CellMap(map.into_iter().collect())
    }
}

impl From<CellMap> for HashMap<String, Value> {
    fn from(map: CellMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for CellMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CellMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for CellMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        CellMap(IndexMap::from_iter(iter))
    }
}
