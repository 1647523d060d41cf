//! Validation failures
//!
//! This module provides the `ValidationError` type, the single failure type
//! produced by every validator in this crate. A failure carries a human
//! readable message, the dot-path of the offending field when one is known,
//! and a copy of the offending value.
//!
//! # Examples
//!
//! ```
//! use bibcheck::ValidationError;
//! use serde_json::json;
//!
//! let err = ValidationError::new("Value must be a positive integer")
//!     .in_field("editionSection.pages")
//!     .with_value(json!(-3));
//!
//! assert_eq!(err.message(), "Value must be a positive integer");
//! assert_eq!(err.field(), Some("editionSection.pages"));
//! assert_eq!(err.value(), Some(&json!(-3)));
//! ```

use std::error::Error as StdError;
use std::fmt;

use serde_json::Value;

/// Result alias used by every validator.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// A validation failure raised at the first violation found.
///
/// There is no error code enum: the message is the discriminator for humans
/// and `field` is the discriminator for mapping a failure onto a form field.
///
/// # Examples
///
/// ```
/// use bibcheck::ValidationError;
///
/// let err = ValidationError::new("Value must be a non-empty string")
///     .in_field("nameSection.name");
///
/// assert_eq!(
///     err.to_string(),
///     "nameSection.name: Value must be a non-empty string"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    message: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    field: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    value: Option<Value>,
}

impl ValidationError {
    /// Create a failure with a message and no field or value attached.
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError {
            message: message.into(),
            field: None,
            value: None,
        }
    }

    /// Attach the dot-path of the field that failed.
    ///
    /// Replaces any field set earlier, so an outer validator can re-home a
    /// failure raised by an inner one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bibcheck::ValidationError;
    ///
    /// let err = ValidationError::new("Month must be between 1 and 12")
    ///     .in_field("month")
    ///     .in_field("authorSection.beginDate");
    ///
    /// assert_eq!(err.field(), Some("authorSection.beginDate"));
    /// ```
    pub fn in_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Attach the offending value.
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    /// The human readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The dot-path of the failing field, if known.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// The offending value, if one was recorded.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {}", field, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl StdError for ValidationError {}
