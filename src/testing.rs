//! Testing utilities for form validation
//!
//! This module provides a builder for well-formed test submissions and
//! assertion macros over validator results.
//!
//! # Examples
//!
//! ## MockForm Builder
//!
//! ```rust
//! use bibcheck::testing::MockForm;
//! use bibcheck::validators::{validate_form, EntityType};
//! use serde_json::json;
//!
//! let form = MockForm::new(EntityType::Author)
//!     .with_section(json!({"beginDate": "1929", "endDate": "2018"}))
//!     .build();
//!
//! assert!(validate_form(EntityType::Author, &form, None, false).is_ok());
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use bibcheck::{assert_invalid, assert_invalid_field, assert_valid};
//! use bibcheck::record::Entry;
//! use bibcheck::validators::validate_positive_integer;
//! use serde_json::json;
//!
//! let one = json!(1);
//! let zero = json!(0);
//! assert_valid!(validate_positive_integer(Entry::from(&one), "pages", false));
//! assert_invalid!(validate_positive_integer(Entry::from(&zero), "pages", false));
//! assert_invalid_field!(validate_positive_integer(Entry::from(&zero), "pages", false), "pages");
//! ```

use serde_json::{json, Map, Value};

use crate::record::FormMap;
use crate::validators::EntityType;

/// Builder for test submissions.
///
/// A fresh `MockForm` already passes validation for its entity kind: it
/// has a complete name section, and author credits are disabled where the
/// entity carries them. Each `with_*` call replaces one top-level section.
///
/// # Example
///
/// ```rust
/// use bibcheck::testing::MockForm;
/// use bibcheck::validators::EntityType;
/// use serde_json::json;
///
/// let form = MockForm::new(EntityType::Work)
///     .with("annotationSection", json!({"content": "Nebula Award, 1974"}))
///     .build();
///
/// assert_eq!(form["annotationSection"]["content"], "Nebula Award, 1974");
/// assert_eq!(form["workSection"]["authorCreditEnable"], false);
/// ```
#[derive(Debug, Clone)]
pub struct MockForm {
    entity_type: EntityType,
    sections: Map<String, Value>,
}

impl MockForm {
    /// Start a valid, minimal form for `entity_type`.
    pub fn new(entity_type: EntityType) -> Self {
        let mut sections = Map::new();
        sections.insert("aliasEditor".into(), json!({}));
        sections.insert("identifierEditor".into(), json!({}));
        sections.insert(
            "nameSection".into(),
            json!({"name": "Test entity", "sortName": "Test entity", "language": 1}),
        );
        let entity_section = match entity_type {
            EntityType::Series => json!({"orderType": 1, "seriesType": "Work"}),
            kind if kind.has_author_credit() => json!({"authorCreditEnable": false}),
            _ => json!({}),
        };
        sections.insert(entity_type.section_key().into(), entity_section);
        if entity_type.has_author_credit() {
            sections.insert("authorCreditEditor".into(), json!({}));
        }
        sections.insert("submissionSection".into(), json!({"note": ""}));
        Self {
            entity_type,
            sections,
        }
    }

    /// Replace the top-level section stored under `key`.
    pub fn with(mut self, key: impl Into<String>, section: Value) -> Self {
        self.sections.insert(key.into(), section);
        self
    }

    /// Replace the entity's own section.
    pub fn with_section(self, section: Value) -> Self {
        let key = self.entity_type.section_key();
        self.with(key, section)
    }

    /// Drop the top-level section stored under `key`.
    pub fn without(mut self, key: &str) -> Self {
        self.sections.remove(key);
        self
    }

    /// Build the form as a plain JSON record.
    pub fn build(self) -> Value {
        Value::Object(self.sections)
    }

    /// Build the form as a [`FormMap`].
    pub fn build_map(self) -> FormMap {
        FormMap::from(self.sections)
    }
}

/// Assert that a validator accepted its input.
///
/// This macro will panic with the failure if the result is an `Err`.
///
/// # Example
///
/// ```rust
/// use bibcheck::assert_valid;
/// use bibcheck::date::date_validator;
///
/// assert_valid!(date_validator("29", "2", "2020"));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Ok(_) => {}
            ::std::result::Result::Err(e) => {
                panic!("Expected valid, got failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validator rejected its input, evaluating to the failure.
///
/// This macro will panic if the result is `Ok`.
///
/// # Example
///
/// ```rust
/// use bibcheck::assert_invalid;
/// use bibcheck::date::date_validator;
///
/// let err = assert_invalid!(date_validator("29", "2", "2019"));
/// assert_eq!(err.message(), "February 29th only exists in leap years");
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Err(e) => e,
            ::std::result::Result::Ok(v) => {
                panic!("Expected failure, got valid: {:?}", v);
            }
        }
    };
}

/// Assert that a validator rejected its input on a specific field.
///
/// This macro will panic if the result is `Ok` or if the failure names a
/// different field.
///
/// # Example
///
/// ```rust
/// use bibcheck::assert_invalid_field;
/// use bibcheck::date::date_validator;
///
/// assert_invalid_field!(date_validator("31", "4", "2017"), "day");
/// ```
#[macro_export]
macro_rules! assert_invalid_field {
    ($result:expr, $field:expr) => {
        match $result {
            ::std::result::Result::Err(e) => {
                assert_eq!(e.field(), ::std::option::Option::Some($field));
            }
            ::std::result::Result::Ok(v) => {
                panic!(
                    "Expected failure on field {:?}, got valid: {:?}",
                    $field, v
                );
            }
        }
    };
}
