//! Polymorphic record access
//!
//! Validators read submitted forms through the [`Record`] trait, which hides
//! the concrete container a form arrived in. Two containers are supported:
//!
//! - plain JSON records ([`serde_json::Value`]), where `get` resolves a
//!   dot-separated path such as `"author.id"` or `"languages[0].value"`
//! - the ordered, persistent-map-like [`FormMap`], where `get` is a literal
//!   single-key lookup and `get_in` walks nested containers
//!
//! A lookup never fails: absence is reported as [`Entry::Missing`], or as the
//! caller's default when going through [`get_or`] / [`get_in_or`].
//!
//! # Example
//!
//! ```
//! use bibcheck::record::{get, get_in, FormMap};
//! use serde_json::json;
//!
//! let plain = json!({"author": {"id": "abc"}});
//! let map = FormMap::from_json(plain.clone());
//!
//! assert_eq!(get(&plain, "author.id").as_str(), Some("abc"));
//! assert_eq!(get_in(&map, &["author", "id"]).as_str(), Some("abc"));
//!
//! // A FormMap does not split keys on dots.
//! assert!(get(&map, "author.id").is_missing());
//! ```

mod form_map;
mod json;

pub use form_map::{FormList, FormMap, FormValue};

use std::fmt;
use std::sync::LazyLock;

use serde_json::{Map, Value};

static EMPTY_RECORD: LazyLock<Value> = LazyLock::new(|| Value::Object(Map::new()));

/// A keyed container a form (or part of one) can be read from.
///
/// Implementations decide how a path passed to [`Record::get`] is resolved;
/// everything above this trait is container-agnostic.
pub trait Record: fmt::Debug {
    /// Look up `path`, returning [`Entry::Missing`] when it is absent.
    fn get(&self, path: &str) -> Entry<'_>;

    /// Walk `path` one segment at a time.
    fn get_in(&self, path: &[&str]) -> Entry<'_>;

    /// Iterate over the contained values in the container's own order.
    fn values(&self) -> Box<dyn Iterator<Item = Entry<'_>> + '_>;

    /// Number of contained values.
    fn len(&self) -> usize;

    /// True when the container holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An owned JSON copy of the container, used when reporting failures.
    fn to_value(&self) -> Value;
}

/// A borrowed view of a value read out of a [`Record`].
#[derive(Clone, Copy, Debug)]
pub enum Entry<'a> {
    /// Nothing is stored under the requested path.
    Missing,
    /// A JSON value (scalar, or a plain record).
    Value(&'a Value),
    /// A nested container of another kind.
    Record(&'a dyn Record),
}

impl<'a> Entry<'a> {
    /// A shared empty record, used as the default for absent form sections.
    pub fn empty_record() -> Entry<'static> {
        Entry::Value(&EMPTY_RECORD)
    }

    /// True when nothing was found.
    pub fn is_missing(&self) -> bool {
        matches!(self, Entry::Missing)
    }

    /// True when nothing was found or the stored value is `null`.
    pub fn is_nil(&self) -> bool {
        matches!(self, Entry::Missing | Entry::Value(Value::Null))
    }

    /// The string held by this entry, if it is one.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Entry::Value(value) => value.as_str(),
            _ => None,
        }
    }

    /// The boolean held by this entry, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Entry::Value(value) => value.as_bool(),
            _ => None,
        }
    }

    /// The integer held by this entry, if it is an integral number.
    ///
    /// Floats with no fractional part count as integers, so `2.0` reads as
    /// `2`. Strings never do.
    ///
    /// # Examples
    ///
    /// ```
    /// use bibcheck::record::Entry;
    /// use serde_json::json;
    ///
    /// assert_eq!(Entry::from(&json!(7)).as_integer(), Some(7));
    /// assert_eq!(Entry::from(&json!(2.0)).as_integer(), Some(2));
    /// assert_eq!(Entry::from(&json!(2.5)).as_integer(), None);
    /// assert_eq!(Entry::from(&json!("7")).as_integer(), None);
    /// ```
    pub fn as_integer(&self) -> Option<i128> {
        let Entry::Value(Value::Number(number)) = self else {
            return None;
        };
        if let Some(n) = number.as_i64() {
            return Some(i128::from(n));
        }
        if let Some(n) = number.as_u64() {
            return Some(i128::from(n));
        }
        number
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < 1e36)
            .map(|f| f as i128)
    }

    /// This entry as a record, if it is a container.
    ///
    /// JSON objects and arrays are records; JSON scalars are not.
    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match *self {
            Entry::Record(record) => Some(record),
            Entry::Value(value) if value.is_object() || value.is_array() => Some(value),
            _ => None,
        }
    }

    /// Look up `path` inside this entry, if it is a record.
    pub fn get(&self, path: &str) -> Entry<'a> {
        self.as_record().map_or(Entry::Missing, |record| record.get(path))
    }

    /// Walk `path` inside this entry, if it is a record.
    pub fn get_in(&self, path: &[&str]) -> Entry<'a> {
        self.as_record()
            .map_or(Entry::Missing, |record| record.get_in(path))
    }

    /// True when the entry holds nothing to iterate or read.
    ///
    /// Nil entries, the empty string, empty records and non-string scalars
    /// are empty; non-empty strings and records with entries are not.
    ///
    /// # Examples
    ///
    /// ```
    /// use bibcheck::record::Entry;
    /// use serde_json::json;
    ///
    /// assert!(Entry::Missing.is_empty());
    /// assert!(Entry::from(&json!({})).is_empty());
    /// assert!(Entry::from(&json!([])).is_empty());
    /// assert!(!Entry::from(&json!({"n0": {}})).is_empty());
    /// assert!(!Entry::from(&json!("x")).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        if let Some(record) = self.as_record() {
            return record.is_empty();
        }
        match self {
            Entry::Value(Value::String(s)) => s.is_empty(),
            _ => true,
        }
    }

    /// An owned JSON copy of this entry; missing entries become `null`.
    pub fn to_value(&self) -> Value {
        match self {
            Entry::Missing => Value::Null,
            Entry::Value(value) => (*value).clone(),
            Entry::Record(record) => record.to_value(),
        }
    }

    /// Substitute `default` when this entry is missing.
    pub fn or(self, default: Entry<'a>) -> Entry<'a> {
        if self.is_missing() {
            default
        } else {
            self
        }
    }
}

impl<'a> From<&'a Value> for Entry<'a> {
    fn from(value: &'a Value) -> Self {
        Entry::Value(value)
    }
}

/// Read `path` from `container`.
///
/// Delegates to the container's own [`Record::get`].
pub fn get<'a, R: Record + ?Sized>(container: &'a R, path: &str) -> Entry<'a> {
    container.get(path)
}

/// Read `path` from `container`, substituting `default` when it is absent.
///
/// A stored `null` is returned as-is; only absence triggers the default.
///
/// # Examples
///
/// ```
/// use bibcheck::record::{get_or, Entry};
/// use serde_json::json;
///
/// let section = json!({"ended": null});
/// let fallback = json!(true);
///
/// assert!(get_or(&section, "ended", Entry::from(&fallback)).is_nil());
/// assert_eq!(get_or(&section, "type", Entry::from(&fallback)).as_bool(), Some(true));
/// ```
pub fn get_or<'a, R: Record + ?Sized>(container: &'a R, path: &str, default: Entry<'a>) -> Entry<'a> {
    container.get(path).or(default)
}

/// Walk `path` in `container`.
pub fn get_in<'a, R: Record + ?Sized>(container: &'a R, path: &[&str]) -> Entry<'a> {
    container.get_in(path)
}

/// Walk `path` in `container`, substituting `default` when it is absent.
pub fn get_in_or<'a, R: Record + ?Sized>(
    container: &'a R,
    path: &[&str],
    default: Entry<'a>,
) -> Entry<'a> {
    container.get_in(path).or(default)
}
