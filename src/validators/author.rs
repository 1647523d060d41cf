//! Author forms

use crate::catalog::IdentifierType;
use crate::error::Result;
use crate::record::{Entry, Record};

use super::base::{validate_boolean, validate_date, validate_positive_integer};
use super::common::{
    section, validate_area, validate_end_date, validate_leading_sections,
    validate_submission_section,
};
use super::{traced, EntityType};

/// The `authorSection` of a form.
///
/// Areas are optional references, the dates are partial dates and the end
/// date must come after a legal begin date.
///
/// # Examples
///
/// ```
/// use bibcheck::record::Entry;
/// use bibcheck::validators::author::validate_author_section;
/// use serde_json::json;
///
/// let section = json!({"beginDate": "1929-10-21", "endDate": "2018-01-22", "ended": true});
/// assert!(validate_author_section(Entry::from(&section)).is_ok());
///
/// let section = json!({"beginDate": "2018", "endDate": "1929"});
/// assert!(validate_author_section(Entry::from(&section)).is_err());
/// ```
pub fn validate_author_section(section: Entry<'_>) -> Result<()> {
    validate_area(section.get("beginArea"), "authorSection.beginArea")?;
    validate_date(section.get("beginDate"), "authorSection.beginDate")?;
    validate_area(section.get("endArea"), "authorSection.endArea")?;
    validate_end_date(
        section.get("beginDate"),
        section.get("endDate"),
        "authorSection.endDate",
    )?;
    validate_boolean(section.get("ended"), "authorSection.ended")?;
    validate_positive_integer(section.get("gender"), "authorSection.gender", false)?;
    validate_positive_integer(section.get("type"), "authorSection.type", false)
}

/// Validate a complete author form.
///
/// Authors carry no author credit, so `is_merge` changes nothing.
pub fn validate_author(
    form: &dyn Record,
    identifier_types: Option<&[IdentifierType]>,
    _is_merge: bool,
) -> Result<()> {
    traced(EntityType::Author, validate_author_form(form, identifier_types))
}

fn validate_author_form(form: &dyn Record, identifier_types: Option<&[IdentifierType]>) -> Result<()> {
    validate_leading_sections(form, identifier_types)?;
    validate_author_section(section(form, EntityType::Author.section_key()))?;
    validate_submission_section(section(form, "submissionSection"))
}
