//! Ordered persistent-map-like form containers
//!
//! `FormMap` models the keyed state a form editor hands over: an ordered map
//! whose `get` is a literal key lookup (`"author.id"` is one key, not a path)
//! and whose nested lookups go through `get_in`. `FormList` is its indexed
//! counterpart.
//!
//! # Example
//!
//! ```
//! use bibcheck::record::{FormMap, Record};
//! use serde_json::json;
//!
//! let aliases = FormMap::new()
//!     .with("n0", FormMap::new().with("name", "Ursula K. Le Guin"))
//!     .with("n1", FormMap::new().with("name", "Le Guin"));
//!
//! assert_eq!(aliases.len(), 2);
//! assert_eq!(aliases.get_in(&["n1", "name"]).as_str(), Some("Le Guin"));
//! assert_eq!(
//!     aliases.to_value(),
//!     json!({"n0": {"name": "Ursula K. Le Guin"}, "n1": {"name": "Le Guin"}})
//! );
//! ```

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::{Entry, Record};

/// A value stored in a [`FormMap`] or [`FormList`].
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    /// A JSON leaf.
    Scalar(Value),
    /// A nested keyed container.
    Map(FormMap),
    /// A nested indexed container.
    List(FormList),
}

impl FormValue {
    /// A borrowed view of this value.
    pub fn entry(&self) -> Entry<'_> {
        match self {
            FormValue::Scalar(value) => Entry::Value(value),
            FormValue::Map(map) => Entry::Record(map),
            FormValue::List(list) => Entry::Record(list),
        }
    }

    /// Continue a `get_in` walk below this value.
    fn walk<'a>(&'a self, rest: &[&str]) -> Entry<'a> {
        match self {
            FormValue::Scalar(value) => value.get_in(rest),
            FormValue::Map(map) => map.get_in(rest),
            FormValue::List(list) => list.get_in(rest),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            FormValue::Scalar(value) => value.clone(),
            FormValue::Map(map) => map.to_value(),
            FormValue::List(list) => list.to_value(),
        }
    }
}

/// Converts JSON recursively: objects become [`FormMap`]s, arrays become
/// [`FormList`]s, everything else stays a scalar.
impl From<Value> for FormValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(object) => FormValue::Map(FormMap::from(object)),
            Value::Array(items) => FormValue::List(items.into_iter().collect()),
            scalar => FormValue::Scalar(scalar),
        }
    }
}

impl From<FormMap> for FormValue {
    fn from(map: FormMap) -> Self {
        FormValue::Map(map)
    }
}

impl From<FormList> for FormValue {
    fn from(list: FormList) -> Self {
        FormValue::List(list)
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Scalar(Value::from(s))
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        FormValue::Scalar(Value::from(s))
    }
}

impl From<i32> for FormValue {
    fn from(n: i32) -> Self {
        FormValue::Scalar(Value::from(n))
    }
}

impl From<i64> for FormValue {
    fn from(n: i64) -> Self {
        FormValue::Scalar(Value::from(n))
    }
}

impl From<bool> for FormValue {
    fn from(b: bool) -> Self {
        FormValue::Scalar(Value::from(b))
    }
}

/// An insertion-ordered map of form values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormMap {
    entries: IndexMap<String, FormValue>,
}

impl FormMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from JSON.
    ///
    /// Non-object input yields an empty map.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(object) => FormMap::from(object),
            _ => FormMap::new(),
        }
    }

    /// Return a copy of this map with `key` set to `value`.
    ///
    /// An existing key keeps its position.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FormValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to `value`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FormValue>) -> Option<FormValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<FormValue> {
        self.entries.shift_remove(key)
    }

    /// True when `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over keys and values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<Map<String, Value>> for FormMap {
    fn from(object: Map<String, Value>) -> Self {
        object.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<FormValue>> FromIterator<(K, V)> for FormMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FormMap {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Record for FormMap {
    fn get(&self, path: &str) -> Entry<'_> {
        self.entries.get(path).map_or(Entry::Missing, FormValue::entry)
    }

    fn get_in(&self, path: &[&str]) -> Entry<'_> {
        match path.split_first() {
            None => Entry::Record(self),
            Some((head, rest)) => self
                .entries
                .get(*head)
                .map_or(Entry::Missing, |value| value.walk(rest)),
        }
    }

    fn values(&self) -> Box<dyn Iterator<Item = Entry<'_>> + '_> {
        Box::new(self.entries.values().map(FormValue::entry))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn to_value(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }
}

/// An indexed list of form values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormList {
    items: Vec<FormValue>,
}

impl FormList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this list with `value` appended.
    pub fn with(mut self, value: impl Into<FormValue>) -> Self {
        self.items.push(value.into());
        self
    }

    /// Append `value`.
    pub fn push(&mut self, value: impl Into<FormValue>) {
        self.items.push(value.into());
    }

    /// Resolve an index; negative indices count from the end.
    fn item(&self, key: &str) -> Option<&FormValue> {
        let index: isize = key.parse().ok()?;
        let resolved = if index < 0 {
            self.items.len().checked_sub(index.unsigned_abs())?
        } else {
            index as usize
        };
        self.items.get(resolved)
    }
}

impl<V: Into<FormValue>> FromIterator<V> for FormList {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        FormList {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Record for FormList {
    fn get(&self, path: &str) -> Entry<'_> {
        self.item(path).map_or(Entry::Missing, FormValue::entry)
    }

    fn get_in(&self, path: &[&str]) -> Entry<'_> {
        match path.split_first() {
            None => Entry::Record(self),
            Some((head, rest)) => self
                .item(head)
                .map_or(Entry::Missing, |value| value.walk(rest)),
        }
    }

    fn values(&self) -> Box<dyn Iterator<Item = Entry<'_>> + '_> {
        Box::new(self.items.iter().map(FormValue::entry))
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn to_value(&self) -> Value {
        Value::Array(self.items.iter().map(FormValue::to_value).collect())
    }
}
