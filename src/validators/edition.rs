//! Edition forms

use crate::catalog::IdentifierType;
use crate::error::Result;
use crate::record::{Entry, Record};

use super::base::{validate_date, validate_positive_integer};
use super::common::{
    section, validate_author_credits, validate_entity_reference, validate_languages,
    validate_leading_sections, validate_submission_section,
};
use super::{traced, EntityType};

/// Physical and catalog attributes stored as positive integer ids or sizes.
const NUMERIC_FIELDS: [&str; 7] = ["depth", "height", "width", "weight", "pages", "format", "status"];

/// The `editionSection` of a form.
///
/// The edition group reference is only required when the section sets
/// `editionGroupRequired`; the publisher reference is always optional.
///
/// # Examples
///
/// ```
/// use bibcheck::record::Entry;
/// use bibcheck::validators::edition::validate_edition_section;
/// use serde_json::json;
///
/// let section = json!({"pages": 250, "releaseDate": "1968", "editionGroupRequired": true});
/// let err = validate_edition_section(Entry::from(&section)).unwrap_err();
/// assert_eq!(err.field(), Some("editionSection.editionGroup.id"));
/// ```
pub fn validate_edition_section(section: Entry<'_>) -> Result<()> {
    for name in NUMERIC_FIELDS {
        validate_positive_integer(section.get(name), &format!("editionSection.{name}"), false)?;
    }
    validate_languages(section.get("languages"), "editionSection.languages")?;

    let edition_group_required = section.get("editionGroupRequired").as_bool().unwrap_or(false);
    validate_entity_reference(
        section.get("editionGroup"),
        "editionSection.editionGroup",
        edition_group_required,
    )?;
    validate_entity_reference(section.get("publisher"), "editionSection.publisher", false)?;
    validate_date(section.get("releaseDate"), "editionSection.releaseDate")
}

/// Validate a complete edition form.
pub fn validate_edition(
    form: &dyn Record,
    identifier_types: Option<&[IdentifierType]>,
    is_merge: bool,
) -> Result<()> {
    traced(
        EntityType::Edition,
        validate_edition_form(form, identifier_types, is_merge),
    )
}

fn validate_edition_form(
    form: &dyn Record,
    identifier_types: Option<&[IdentifierType]>,
    is_merge: bool,
) -> Result<()> {
    let key = EntityType::Edition.section_key();
    let edition_section = section(form, key);

    validate_leading_sections(form, identifier_types)?;
    validate_edition_section(edition_section)?;
    validate_author_credits(form, edition_section, key, is_merge)?;
    validate_submission_section(section(form, "submissionSection"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const GROUP_ID: &str = "3b5a1d6e-2f8c-4a7d-9e0b-6c1f2d3e4a5b";

    fn form(edition_section: Value, credits: Value) -> Value {
        json!({
            "nameSection": {"name": "A Wizard of Earthsea", "sortName": "Wizard of Earthsea, A", "language": 120},
            "editionSection": edition_section,
            "authorCreditEditor": credits,
        })
    }

    fn credit() -> Value {
        json!({"n0": {"author": {"id": "9d7bd0ba-3ba5-4bd4-9a1e-1e0f4e7bd6a6"}, "name": "Ursula K. Le Guin", "joinPhrase": ""}})
    }

    #[test]
    fn test_disabled_credit_with_empty_editor() {
        let form = form(json!({"authorCreditEnable": false}), json!({}));
        assert!(validate_edition(&form, None, false).is_ok());
    }

    #[test]
    fn test_enabled_credit_with_empty_editor() {
        let form = form(json!({"authorCreditEnable": true}), json!({}));
        let err = validate_edition(&form, None, false).unwrap_err();
        assert_eq!(err.message(), "At least one value is required");

        let form = form_without_flag();
        assert!(validate_edition(&form, None, false).is_err());
    }

    fn form_without_flag() -> Value {
        form(json!({}), json!({}))
    }

    #[test]
    fn test_disabled_credit_with_rows() {
        let form = form(json!({"authorCreditEnable": false}), credit());
        let err = validate_edition(&form, None, false).unwrap_err();
        assert_eq!(err.field(), Some("authorCreditEditor"));
    }

    #[test]
    fn test_full_edition() {
        let section = json!({
            "depth": 20, "height": 180, "width": 110, "weight": 150, "pages": 183,
            "format": 1, "status": 1,
            "languages": [{"value": 120}],
            "editionGroup": {"id": GROUP_ID},
            "editionGroupRequired": true,
            "publisher": null,
            "releaseDate": "1968-11",
        });
        assert!(validate_edition(&form(section, credit()), None, false).is_ok());
    }

    #[test]
    fn test_numeric_fields() {
        let section = json!({"pages": -3});
        let err = validate_edition_section(Entry::from(&section)).unwrap_err();
        assert_eq!(err.field(), Some("editionSection.pages"));

        let section = json!({"weight": "heavy"});
        let err = validate_edition_section(Entry::from(&section)).unwrap_err();
        assert_eq!(err.field(), Some("editionSection.weight"));
    }

    #[test]
    fn test_optional_edition_group() {
        assert!(validate_edition_section(Entry::from(&json!({"editionGroup": null}))).is_ok());
        let err = validate_edition_section(Entry::from(&json!({"editionGroup": {"id": "x"}}))).unwrap_err();
        assert_eq!(err.field(), Some("editionSection.editionGroup.id"));
    }

    #[test]
    fn test_publisher_reference() {
        let section = json!({"publisher": {"id": GROUP_ID}});
        assert!(validate_edition_section(Entry::from(&section)).is_ok());
        let section = json!({"publisher": {"id": null}});
        let err = validate_edition_section(Entry::from(&section)).unwrap_err();
        assert_eq!(err.field(), Some("editionSection.publisher.id"));
    }

    #[test]
    fn test_release_date() {
        let section = json!({"releaseDate": "2019-02-29"});
        let err = validate_edition_section(Entry::from(&section)).unwrap_err();
        assert_eq!(err.field(), Some("editionSection.releaseDate"));
        assert_eq!(err.message(), "February 29th only exists in leap years");
    }

    #[test]
    fn test_languages() {
        let section = json!({"languages": [{"value": 120}, {"value": 0}]});
        let err = validate_edition_section(Entry::from(&section)).unwrap_err();
        assert_eq!(err.field(), Some("editionSection.languages.value"));
    }

    #[test]
    fn test_merge_checks_chosen_credit() {
        let mut form = form(json!({}), json!({}));
        form["authorCredit"] = json!({"id": 17});
        assert!(validate_edition(&form, None, true).is_ok());

        form["authorCredit"] = json!({"id": "17"});
        let err = validate_edition(&form, None, true).unwrap_err();
        assert_eq!(err.field(), Some("authorCredit.id"));
    }
}
