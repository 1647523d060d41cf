//! Primitive field validators and the collection validator
//!
//! Every validator here takes the value under test as an [`Entry`] plus the
//! dot-path of the field it came from, and returns `Ok(())` or the first
//! [`ValidationError`] found. Nil means the entry is missing or JSON `null`.
//!
//! # Example
//!
//! ```
//! use bibcheck::record::Entry;
//! use bibcheck::validators::base::{validate_positive_integer, validate_required_string};
//! use serde_json::json;
//!
//! let pages = json!(0);
//! let err = validate_positive_integer(Entry::from(&pages), "editionSection.pages", false).unwrap_err();
//! assert_eq!(err.field(), Some("editionSection.pages"));
//!
//! assert!(validate_positive_integer(Entry::Missing, "editionSection.pages", false).is_ok());
//! assert!(validate_required_string(Entry::Missing, "nameSection.name").is_err());
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::date::iso_date_string_to_object;
use crate::error::{Result, ValidationError};
use crate::predicate::{matches, not_empty, positive, validate_with, Predicate};
use crate::record::Entry;

static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid pattern is valid")
});

fn failure(message: &str, field: &str, value: Entry<'_>) -> ValidationError {
    ValidationError::new(message)
        .in_field(field)
        .with_value(value.to_value())
}

fn required(field: &str) -> ValidationError {
    ValidationError::new("Value is required").in_field(field)
}

/// Nil, or a string of any length.
pub fn validate_optional_string(value: Entry<'_>, field: &str) -> Result<()> {
    if value.is_nil() || value.as_str().is_some() {
        Ok(())
    } else {
        Err(failure("Value must be a string", field, value))
    }
}

/// A string with at least one character.
pub fn validate_required_string(value: Entry<'_>, field: &str) -> Result<()> {
    let error = || failure("Value must be a non-empty string", field, value);
    let s = value.as_str().ok_or_else(error)?;
    validate_with(s, not_empty(), |_| error())?;
    Ok(())
}

/// An integer greater than zero.
///
/// Nil passes unless `required` is set. Numeric strings do not count.
///
/// # Examples
///
/// ```
/// use bibcheck::record::Entry;
/// use bibcheck::validators::base::validate_positive_integer;
/// use serde_json::json;
///
/// let (zero, one, text) = (json!(0), json!(1), json!("1"));
/// assert!(validate_positive_integer(Entry::from(&zero), "f", false).is_err());
/// assert!(validate_positive_integer(Entry::from(&one), "f", false).is_ok());
/// assert!(validate_positive_integer(Entry::from(&text), "f", false).is_err());
/// assert!(validate_positive_integer(Entry::Missing, "f", true).is_err());
/// ```
pub fn validate_positive_integer(value: Entry<'_>, field: &str, required_value: bool) -> Result<()> {
    if value.is_nil() {
        return if required_value { Err(required(field)) } else { Ok(()) };
    }
    match value.as_integer() {
        Some(n) if positive::<i128>().check(&n) => Ok(()),
        _ => Err(failure("Value must be a positive integer", field, value)),
    }
}

/// A UUID in the hyphenated 8-4-4-4-12 hexadecimal form.
///
/// Nil passes unless `required` is set.
pub fn validate_uuid(value: Entry<'_>, field: &str, required_value: bool) -> Result<()> {
    if value.is_nil() {
        return if required_value { Err(required(field)) } else { Ok(()) };
    }
    let error = || failure("Value must be a valid UUID", field, value);
    let s = value.as_str().ok_or_else(error)?;
    validate_with(s, matches(&UUID), |_| error())?;
    Ok(())
}

/// A legal partial date, given as an ISO-like string or a
/// `{year, month, day}` record.
///
/// A failure from the date rules is re-homed onto `field`, keeping its
/// message, with the submitted value attached.
///
/// # Examples
///
/// ```
/// use bibcheck::record::Entry;
/// use bibcheck::validators::base::validate_date;
/// use serde_json::json;
///
/// let bad = json!("2019-02-29");
/// let err = validate_date(Entry::from(&bad), "authorSection.beginDate").unwrap_err();
/// assert_eq!(err.field(), Some("authorSection.beginDate"));
/// assert_eq!(err.value(), Some(&bad));
/// ```
pub fn validate_date(value: Entry<'_>, field: &str) -> Result<()> {
    iso_date_string_to_object(value)
        .validate()
        .map_err(|err| err.in_field(field).with_value(value.to_value()))
}

/// Nil or a boolean.
pub fn validate_boolean(value: Entry<'_>, field: &str) -> Result<()> {
    if value.is_nil() || value.as_bool().is_some() {
        Ok(())
    } else {
        Err(failure("Value must be a boolean", field, value))
    }
}

/// Run `per_item` over every value of a record or collection.
///
/// With `require_non_empty`, an empty (or nil) input fails before anything
/// else. Input that is not a record fails next. Items are then visited in
/// the container's order and the first failure stops the traversal.
///
/// Extra arguments for the per-item validator are captured by the closure.
///
/// # Examples
///
/// ```
/// use bibcheck::record::Entry;
/// use bibcheck::validators::base::{validate_multiple, validate_required_string};
/// use serde_json::json;
///
/// let empty = json!([]);
/// let names = json!({"n0": "Le Guin", "n1": ""});
/// let check = |item: Entry<'_>| validate_required_string(item, "name");
///
/// assert!(validate_multiple(Entry::from(&empty), check, true).is_err());
/// assert!(validate_multiple(Entry::from(&empty), check, false).is_ok());
/// assert!(validate_multiple(Entry::from(&names), check, false).is_err());
/// ```
pub fn validate_multiple<F>(values: Entry<'_>, per_item: F, require_non_empty: bool) -> Result<()>
where
    F: Fn(Entry<'_>) -> Result<()>,
{
    if require_non_empty && values.is_empty() {
        return Err(ValidationError::new("At least one value is required"));
    }

    let record = values.as_record().ok_or_else(|| {
        ValidationError::new("Value must be a collection").with_value(values.to_value())
    })?;
    record.values().try_for_each(per_item)
}

/// Build a reusable collection validator from a per-item validator.
///
/// # Examples
///
/// ```
/// use bibcheck::record::Entry;
/// use bibcheck::validators::base::{multiple, validate_boolean};
/// use serde_json::json;
///
/// let validate_flags = multiple(|item: Entry<'_>| validate_boolean(item, "flag"), false);
///
/// let ok = json!([true, null, false]);
/// let bad = json!([true, "yes"]);
/// assert!(validate_flags(Entry::from(&ok)).is_ok());
/// assert!(validate_flags(Entry::from(&bad)).is_err());
/// ```
pub fn multiple<F>(per_item: F, require_non_empty: bool) -> impl Fn(Entry<'_>) -> Result<()>
where
    F: Fn(Entry<'_>) -> Result<()>,
{
    move |values| validate_multiple(values, &per_item, require_non_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FormMap;
    use serde_json::{json, Value};
    use std::cell::RefCell;

    fn entry(value: &Value) -> Entry<'_> {
        Entry::from(value)
    }

    #[test]
    fn test_optional_string() {
        assert!(validate_optional_string(Entry::Missing, "f").is_ok());
        assert!(validate_optional_string(entry(&Value::Null), "f").is_ok());
        assert!(validate_optional_string(entry(&json!("")), "f").is_ok());
        let err = validate_optional_string(entry(&json!(3)), "f").unwrap_err();
        assert_eq!(err.message(), "Value must be a string");
        assert_eq!(err.value(), Some(&json!(3)));
    }

    #[test]
    fn test_required_string() {
        assert!(validate_required_string(entry(&json!("x")), "f").is_ok());
        assert!(validate_required_string(entry(&json!("")), "f").is_err());
        assert!(validate_required_string(Entry::Missing, "f").is_err());
        assert!(validate_required_string(entry(&json!(["x"])), "f").is_err());
    }

    #[test]
    fn test_positive_integer() {
        assert!(validate_positive_integer(entry(&json!(0)), "f", false).is_err());
        assert!(validate_positive_integer(entry(&json!(1)), "f", false).is_ok());
        assert!(validate_positive_integer(entry(&json!(-1)), "f", false).is_err());
        assert!(validate_positive_integer(entry(&json!(1.5)), "f", false).is_err());
        assert!(validate_positive_integer(entry(&json!(2.0)), "f", false).is_ok());
        assert!(validate_positive_integer(entry(&Value::Null), "f", true).is_err());
        assert!(validate_positive_integer(entry(&Value::Null), "f", false).is_ok());
    }

    #[test]
    fn test_positive_integer_required_message() {
        let err = validate_positive_integer(Entry::Missing, "alias.language", true).unwrap_err();
        assert_eq!(err.message(), "Value is required");
        assert_eq!(err.field(), Some("alias.language"));
        assert_eq!(err.value(), None);
    }

    #[test]
    fn test_uuid() {
        let id = json!("e1a0dd4b-7b43-4ec4-b8b8-1b4c5f1b2f0a");
        assert!(validate_uuid(entry(&id), "f", true).is_ok());
        assert!(validate_uuid(entry(&json!("E1A0DD4B-7B43-4EC4-B8B8-1B4C5F1B2F0A")), "f", true).is_ok());
        assert!(validate_uuid(entry(&json!("e1a0dd4b7b434ec4b8b81b4c5f1b2f0a")), "f", true).is_err());
        assert!(validate_uuid(entry(&json!("not-a-uuid")), "f", false).is_err());
        assert!(validate_uuid(entry(&json!(42)), "f", false).is_err());
        assert!(validate_uuid(Entry::Missing, "f", false).is_ok());
        assert!(validate_uuid(Entry::Missing, "f", true).is_err());
    }

    #[test]
    fn test_date_accepts_strings_and_objects() {
        assert!(validate_date(entry(&json!("2017-11-21")), "f").is_ok());
        assert!(validate_date(entry(&json!({"year": "2017", "month": "", "day": ""})), "f").is_ok());
        assert!(validate_date(entry(&json!("")), "f").is_ok());
        assert!(validate_date(Entry::Missing, "f").is_ok());
    }

    #[test]
    fn test_date_failure_is_rehomed() {
        let value = json!({"year": "2017", "month": "4", "day": "31"});
        let err = validate_date(entry(&value), "publisherSection.endDate").unwrap_err();
        assert_eq!(err.field(), Some("publisherSection.endDate"));
        assert_eq!(err.value(), Some(&value));
        assert_eq!(err.message(), "Day must be between 1 and 30 for the given month");
    }

    #[test]
    fn test_boolean() {
        assert!(validate_boolean(Entry::Missing, "f").is_ok());
        assert!(validate_boolean(entry(&json!(true)), "f").is_ok());
        assert!(validate_boolean(entry(&json!(false)), "f").is_ok());
        assert!(validate_boolean(entry(&json!("true")), "f").is_err());
        assert!(validate_boolean(entry(&json!(1)), "f").is_err());
    }

    #[test]
    fn test_multiple_empty() {
        let empty = json!([]);
        let ok = |_: Entry<'_>| Ok(());
        let err = validate_multiple(entry(&empty), ok, true).unwrap_err();
        assert_eq!(err.message(), "At least one value is required");
        assert!(validate_multiple(entry(&empty), ok, false).is_ok());
        assert!(validate_multiple(entry(&json!({})), ok, false).is_ok());
    }

    #[test]
    fn test_multiple_rejects_non_collections() {
        let ok = |_: Entry<'_>| Ok(());
        let err = validate_multiple(entry(&json!("abc")), ok, false).unwrap_err();
        assert_eq!(err.message(), "Value must be a collection");
        assert!(validate_multiple(Entry::Missing, ok, false).is_err());
        assert!(validate_multiple(entry(&Value::Null), ok, false).is_err());
    }

    #[test]
    fn test_multiple_nil_with_required_reports_emptiness() {
        let ok = |_: Entry<'_>| Ok(());
        let err = validate_multiple(Entry::Missing, ok, true).unwrap_err();
        assert_eq!(err.message(), "At least one value is required");
    }

    #[test]
    fn test_multiple_stops_at_first_failure() {
        let visited = RefCell::new(Vec::new());
        let values = json!({"a": 1, "b": 0, "c": 2});
        let result = validate_multiple(
            entry(&values),
            |item| {
                visited.borrow_mut().push(item.to_value());
                validate_positive_integer(item, "n", true)
            },
            false,
        );
        assert!(result.is_err());
        assert_eq!(*visited.borrow(), vec![json!(1), json!(0)]);
    }

    #[test]
    fn test_multiple_on_form_map() {
        let values = FormMap::new().with("n0", "x").with("n1", "y");
        let check = |item: Entry<'_>| validate_required_string(item, "name");
        assert!(validate_multiple(Entry::Record(&values), check, true).is_ok());
    }

    #[test]
    fn test_multiple_factory() {
        let positives = multiple(|item: Entry<'_>| validate_positive_integer(item, "n", true), true);
        assert!(positives(entry(&json!([1, 2, 3]))).is_ok());
        assert!(positives(entry(&json!([1, -2]))).is_err());
        assert!(positives(entry(&json!([]))).is_err());
    }
}
