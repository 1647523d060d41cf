//! Work forms
//!
//! Works are the only entity whose form carries an annotation section.

use crate::catalog::IdentifierType;
use crate::error::Result;
use crate::record::{Entry, Record};

use super::base::validate_positive_integer;
use super::common::{
    section, validate_annotation_section, validate_author_credits, validate_languages,
    validate_leading_sections, validate_submission_section,
};
use super::{traced, EntityType};

/// The `workSection` of a form.
pub fn validate_work_section(section: Entry<'_>) -> Result<()> {
    validate_languages(section.get("languages"), "workSection.languages")?;
    validate_positive_integer(section.get("type"), "workSection.type", false)
}

/// Validate a complete work form.
pub fn validate_work(
    form: &dyn Record,
    identifier_types: Option<&[IdentifierType]>,
    is_merge: bool,
) -> Result<()> {
    traced(
        EntityType::Work,
        validate_work_form(form, identifier_types, is_merge),
    )
}

fn validate_work_form(
    form: &dyn Record,
    identifier_types: Option<&[IdentifierType]>,
    is_merge: bool,
) -> Result<()> {
    let key = EntityType::Work.section_key();
    let work_section = section(form, key);

    validate_leading_sections(form, identifier_types)?;
    validate_work_section(work_section)?;
    validate_author_credits(form, work_section, key, is_merge)?;
    validate_annotation_section(section(form, "annotationSection"))?;
    validate_submission_section(section(form, "submissionSection"))
}
