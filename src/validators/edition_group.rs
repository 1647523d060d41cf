//! Edition group forms

use crate::catalog::IdentifierType;
use crate::error::Result;
use crate::record::{Entry, Record};

use super::base::validate_positive_integer;
use super::common::{
    section, validate_author_credits, validate_leading_sections, validate_submission_section,
};
use super::{traced, EntityType};

/// The `editionGroupSection` of a form.
pub fn validate_edition_group_section(section: Entry<'_>) -> Result<()> {
    validate_positive_integer(section.get("type"), "editionGroupSection.type", false)
}

/// Validate a complete edition group form.
pub fn validate_edition_group(
    form: &dyn Record,
    identifier_types: Option<&[IdentifierType]>,
    is_merge: bool,
) -> Result<()> {
    traced(
        EntityType::EditionGroup,
        validate_edition_group_form(form, identifier_types, is_merge),
    )
}

fn validate_edition_group_form(
    form: &dyn Record,
    identifier_types: Option<&[IdentifierType]>,
    is_merge: bool,
) -> Result<()> {
    let key = EntityType::EditionGroup.section_key();
    let group_section = section(form, key);

    validate_leading_sections(form, identifier_types)?;
    validate_edition_group_section(group_section)?;
    validate_author_credits(form, group_section, key, is_merge)?;
    validate_submission_section(section(form, "submissionSection"))
}
