//! Form validators
//!
//! Validation is layered:
//!
//! - [`base`] holds the primitive field checks and [`validate_multiple`]
//! - [`common`] composes them into the sections every form shares
//! - one module per entity kind checks that entity's own section and runs
//!   the sections of a whole form in a fixed order
//!
//! Every validator is fail-fast: the first violation is returned and the
//! rest of the form is not looked at.
//!
//! # Example
//!
//! ```
//! use bibcheck::validators::{validate_form, EntityType};
//! use serde_json::json;
//!
//! let form = json!({
//!     "nameSection": {"name": "Tehanu", "sortName": "Tehanu", "language": 120},
//!     "editionGroupSection": {"authorCreditEnable": false},
//! });
//!
//! let kind: EntityType = "edition-group".parse().unwrap();
//! assert!(validate_form(kind, &form, None, false).is_ok());
//! ```

pub mod author;
pub mod base;
pub mod common;
pub mod edition;
pub mod edition_group;
pub mod publisher;
pub mod series;
pub mod work;

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::catalog::IdentifierType;
use crate::error::{Result, ValidationError};
use crate::record::Record;

pub use author::validate_author;
pub use base::{
    multiple, validate_boolean, validate_date, validate_multiple, validate_optional_string,
    validate_positive_integer, validate_required_string, validate_uuid,
};
pub use edition::validate_edition;
pub use edition_group::validate_edition_group;
pub use publisher::validate_publisher;
pub use series::validate_series;
pub use work::validate_work;

/// The kinds of entity a form can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityType {
    /// A person or group credited with works.
    Author,
    /// A concrete published form of a work.
    Edition,
    /// The editions that are the same publication in different formats.
    EditionGroup,
    /// A company or imprint.
    Publisher,
    /// An ordered set of entities.
    Series,
    /// A distinct intellectual creation.
    Work,
}

impl EntityType {
    /// Every entity kind.
    pub const ALL: [EntityType; 6] = [
        EntityType::Author,
        EntityType::Edition,
        EntityType::EditionGroup,
        EntityType::Publisher,
        EntityType::Series,
        EntityType::Work,
    ];

    /// Canonical name, as used in series types and serialized forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Author => "Author",
            EntityType::Edition => "Edition",
            EntityType::EditionGroup => "EditionGroup",
            EntityType::Publisher => "Publisher",
            EntityType::Series => "Series",
            EntityType::Work => "Work",
        }
    }

    /// Key of this entity's own section in a submitted form.
    pub fn section_key(&self) -> &'static str {
        match self {
            EntityType::Author => "authorSection",
            EntityType::Edition => "editionSection",
            EntityType::EditionGroup => "editionGroupSection",
            EntityType::Publisher => "publisherSection",
            EntityType::Series => "seriesSection",
            EntityType::Work => "workSection",
        }
    }

    /// True for the entity kinds whose forms carry author credits.
    pub fn has_author_credit(&self) -> bool {
        matches!(
            self,
            EntityType::Edition | EntityType::EditionGroup | EntityType::Work
        )
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = ValidationError;

    /// Accepts the canonical name in any case, with or without `-` or `_`
    /// between words (`"EditionGroup"`, `"edition-group"`, `"edition_group"`).
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s.chars().filter(|c| *c != '-' && *c != '_').collect();
        EntityType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| {
                ValidationError::new("Unknown entity type")
                    .in_field("entityType")
                    .with_value(Value::from(s))
            })
    }
}

/// Validate `form` as a submission for an entity of kind `entity_type`.
///
/// `identifier_types` enables the catalog checks on identifiers; `is_merge`
/// switches author credits to their merge form.
pub fn validate_form(
    entity_type: EntityType,
    form: &dyn Record,
    identifier_types: Option<&[IdentifierType]>,
    is_merge: bool,
) -> Result<()> {
    match entity_type {
        EntityType::Author => validate_author(form, identifier_types, is_merge),
        EntityType::Edition => validate_edition(form, identifier_types, is_merge),
        EntityType::EditionGroup => validate_edition_group(form, identifier_types, is_merge),
        EntityType::Publisher => validate_publisher(form, identifier_types, is_merge),
        EntityType::Series => validate_series(form, identifier_types, is_merge),
        EntityType::Work => validate_work(form, identifier_types, is_merge),
    }
}

/// Log the outcome of validating a whole form and pass it through.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn traced(entity_type: EntityType, result: Result<()>) -> Result<()> {
    #[cfg(feature = "tracing")]
    match &result {
        Ok(()) => tracing::trace!(entity = %entity_type, "form accepted"),
        Err(err) => tracing::debug!(
            entity = %entity_type,
            field = err.field().unwrap_or_default(),
            reason = err.message(),
            "form rejected"
        ),
    }
    result
}
