//! Publisher forms

use crate::catalog::IdentifierType;
use crate::error::Result;
use crate::record::{Entry, Record};

use super::base::{validate_boolean, validate_date, validate_positive_integer};
use super::common::{
    section, validate_area, validate_end_date, validate_leading_sections,
    validate_submission_section,
};
use super::{traced, EntityType};

/// The `publisherSection` of a form.
pub fn validate_publisher_section(section: Entry<'_>) -> Result<()> {
    validate_area(section.get("area"), "publisherSection.area")?;
    validate_date(section.get("beginDate"), "publisherSection.beginDate")?;
    validate_end_date(
        section.get("beginDate"),
        section.get("endDate"),
        "publisherSection.endDate",
    )?;
    validate_boolean(section.get("ended"), "publisherSection.ended")?;
    validate_positive_integer(section.get("type"), "publisherSection.type", false)
}

/// Validate a complete publisher form.
pub fn validate_publisher(
    form: &dyn Record,
    identifier_types: Option<&[IdentifierType]>,
    _is_merge: bool,
) -> Result<()> {
    traced(EntityType::Publisher, validate_publisher_form(form, identifier_types))
}

fn validate_publisher_form(
    form: &dyn Record,
    identifier_types: Option<&[IdentifierType]>,
) -> Result<()> {
    validate_leading_sections(form, identifier_types)?;
    validate_publisher_section(section(form, EntityType::Publisher.section_key()))?;
    validate_submission_section(section(form, "submissionSection"))
}
