//! Identifier-type catalog entries
//!
//! A catalog is an ordered slice of [`IdentifierType`]s supplied by the
//! caller (typically loaded from a data store). Validation only reads it.
//!
//! # Example
//!
//! ```
//! use bibcheck::catalog::{find_identifier_type, IdentifierType};
//!
//! let catalog = vec![
//!     IdentifierType::new(9, "ISBN-13", r"^97[89]\d{10}$").for_entity("Edition"),
//!     IdentifierType::new(2, "Wikidata ID", r"^Q\d+$"),
//! ];
//!
//! let isbn = find_identifier_type(&catalog, 9).unwrap();
//! assert_eq!(isbn.label, "ISBN-13");
//! assert!(isbn.accepts("9780441478125").unwrap());
//! assert!(find_identifier_type(&catalog, 3).is_none());
//! ```

use regex::Regex;

/// One kind of external identifier and the pattern its values must match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct IdentifierType {
    /// Catalog id, referenced by a submitted identifier's `type`.
    pub id: i64,
    /// Human readable name.
    pub label: String,
    /// Pattern a value of this type must match.
    pub validation_regex: String,
    /// The entity kind this identifier applies to.
    #[cfg_attr(feature = "serde", serde(default))]
    pub entity_type: Option<String>,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    /// Template for linking a value to its external page.
    #[cfg_attr(feature = "serde", serde(default))]
    pub display_template: Option<String>,
    /// Deprecated types stay in the catalog so old identifiers still validate.
    #[cfg_attr(feature = "serde", serde(default))]
    pub deprecated: bool,
}

impl IdentifierType {
    /// Create an entry with no entity type, description or template.
    pub fn new(id: i64, label: impl Into<String>, validation_regex: impl Into<String>) -> Self {
        IdentifierType {
            id,
            label: label.into(),
            validation_regex: validation_regex.into(),
            entity_type: None,
            description: None,
            display_template: None,
            deprecated: false,
        }
    }

    /// Restrict this entry to one entity kind.
    pub fn for_entity(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    /// Compile the validation pattern.
    pub fn regex(&self) -> Result<Regex, regex::Error> {
        Regex::new(&self.validation_regex)
    }

    /// True when `value` matches the validation pattern.
    ///
    /// Fails only when the pattern itself does not compile.
    pub fn accepts(&self, value: &str) -> Result<bool, regex::Error> {
        Ok(self.regex()?.is_match(value))
    }
}

/// Look up a catalog entry by id.
pub fn find_identifier_type(catalog: &[IdentifierType], id: i128) -> Option<&IdentifierType> {
    catalog.iter().find(|t| i128::from(t.id) == id)
}
