//! # bibcheck
//!
//! Fail-fast validation of bibliographic entity forms.
//!
//! A submitted form describes one entity (an author, edition, edition
//! group, publisher, series or work) as a set of sections: aliases,
//! identifiers, a name section, the entity's own section, optional author
//! credits and annotation, and a submission note. Validation walks those
//! sections in a fixed order and stops at the first violation, reporting
//! it as a [`ValidationError`] that names the offending field.
//!
//! Dates are partial and may be historical: `"1969"`, `"1969-03"` and
//! `"-0450"` are all dates, see [`PartialDate`].
//!
//! Forms can be plain JSON ([`serde_json::Value`]) or the ordered
//! [`FormMap`]; every validator reads them through the [`Record`] trait.
//!
//! ## Quick Example
//!
//! ```rust
//! use bibcheck::{validate_form, EntityType};
//! use serde_json::json;
//!
//! let form = json!({
//!     "nameSection": {"name": "Ursula K. Le Guin", "sortName": "Le Guin, Ursula K.", "language": 120},
//!     "authorSection": {"beginDate": "2000", "endDate": "1990", "ended": true},
//! });
//!
//! let err = validate_form(EntityType::Author, &form, None, false).unwrap_err();
//! assert_eq!(err.field(), Some("authorSection.endDate"));
//! assert_eq!(err.message(), "End date must be after begin date");
//! ```
//!
//! ## Features
//!
//! - `tracing`: log accepted and rejected forms through the `tracing` crate
//! - `serde`: `Serialize`/`Deserialize` for dates, failures, catalog
//!   entries and entity kinds

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod date;
pub mod error;
pub mod predicate;
pub mod record;
pub mod testing;
pub mod validators;

// Re-exports
pub use catalog::IdentifierType;
pub use date::PartialDate;
pub use error::{Result, ValidationError};
pub use record::{Entry, FormList, FormMap, Record};
pub use validators::{validate_form, EntityType};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::catalog::IdentifierType;
    pub use crate::date::{date_is_before, date_validator, iso_date_string_to_object, PartialDate};
    pub use crate::error::{Result, ValidationError};
    pub use crate::record::{Entry, FormList, FormMap, Record};
    pub use crate::validators::{
        validate_author, validate_edition, validate_edition_group, validate_form,
        validate_publisher, validate_series, validate_work, EntityType,
    };
}
