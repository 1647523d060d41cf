//! Validators for the form sections shared by every entity kind
//!
//! Aliases, identifiers, the name section, the annotation, the submission
//! note and author credits look the same on every form. The helpers at the
//! bottom cover the smaller shapes that recur inside entity sections (area
//! and entity references, language lists, begin/end date pairs).

use crate::catalog::{find_identifier_type, IdentifierType};
use crate::date::date_is_before;
use crate::error::{Result, ValidationError};
use crate::record::{get_or, Entry, Record};

use super::base::{
    validate_boolean, validate_date, validate_multiple, validate_optional_string,
    validate_positive_integer, validate_required_string, validate_uuid,
};

/// One row of the alias editor.
pub fn validate_alias(alias: Entry<'_>) -> Result<()> {
    validate_required_string(alias.get("name"), "alias.name")?;
    validate_required_string(alias.get("sortName"), "alias.sortName")?;
    validate_positive_integer(alias.get("language"), "alias.language", true)?;
    validate_boolean(alias.get("primary"), "alias.primary")
}

/// Every row of the alias editor. An empty editor is fine.
pub fn validate_aliases(aliases: Entry<'_>) -> Result<()> {
    validate_multiple(aliases, validate_alias, false)
}

/// The identifier's type id: a required positive integer that, when a
/// catalog is given, must name one of its entries.
pub fn validate_identifier_type(type_id: Entry<'_>, catalog: Option<&[IdentifierType]>) -> Result<()> {
    validate_positive_integer(type_id, "identifier.type", true)?;
    if let Some(catalog) = catalog {
        lookup_type(type_id, catalog)?;
    }
    Ok(())
}

/// The identifier's value: a non-empty string that, when a catalog is
/// given, must match the validation regex of the type it claims.
///
/// A regex that does not compile fails the value, since nothing could ever
/// match it.
///
/// # Examples
///
/// ```
/// use bibcheck::catalog::IdentifierType;
/// use bibcheck::record::Entry;
/// use bibcheck::validators::common::validate_identifier_value;
/// use serde_json::json;
///
/// let catalog = [IdentifierType::new(2, "Wikidata ID", r"^Q\d+$")];
/// let (good, bad, type_id) = (json!("Q42"), json!("42"), json!(2));
///
/// assert!(validate_identifier_value(Entry::from(&good), Entry::from(&type_id), Some(&catalog)).is_ok());
/// assert!(validate_identifier_value(Entry::from(&bad), Entry::from(&type_id), Some(&catalog)).is_err());
/// assert!(validate_identifier_value(Entry::from(&bad), Entry::from(&type_id), None).is_ok());
/// ```
pub fn validate_identifier_value(
    value: Entry<'_>,
    type_id: Entry<'_>,
    catalog: Option<&[IdentifierType]>,
) -> Result<()> {
    validate_required_string(value, "identifier.value")?;
    let Some(catalog) = catalog else {
        return Ok(());
    };

    let identifier_type = lookup_type(type_id, catalog)?;
    let text = value.as_str().unwrap_or_default();
    match identifier_type.accepts(text) {
        Ok(true) => Ok(()),
        Ok(false) | Err(_) => Err(ValidationError::new(
            "Identifier value does not match the required format",
        )
        .in_field("identifier.value")
        .with_value(value.to_value())),
    }
}

/// One row of the identifier editor.
pub fn validate_identifier(identifier: Entry<'_>, catalog: Option<&[IdentifierType]>) -> Result<()> {
    validate_identifier_type(identifier.get("type"), catalog)?;
    validate_identifier_value(identifier.get("value"), identifier.get("type"), catalog)
}

/// Every row of the identifier editor.
pub fn validate_identifiers(identifiers: Entry<'_>, catalog: Option<&[IdentifierType]>) -> Result<()> {
    validate_multiple(identifiers, |row| validate_identifier(row, catalog), false)
}

fn lookup_type<'c>(type_id: Entry<'_>, catalog: &'c [IdentifierType]) -> Result<&'c IdentifierType> {
    type_id
        .as_integer()
        .and_then(|id| find_identifier_type(catalog, id))
        .ok_or_else(|| {
            ValidationError::new("Identifier type does not exist")
                .in_field("identifier.type")
                .with_value(type_id.to_value())
        })
}

/// The default alias of the entity, with its disambiguation comment.
pub fn validate_name_section(section: Entry<'_>) -> Result<()> {
    validate_required_string(section.get("name"), "nameSection.name")?;
    validate_required_string(section.get("sortName"), "nameSection.sortName")?;
    validate_positive_integer(section.get("language"), "nameSection.language", true)?;
    validate_optional_string(section.get("disambiguation"), "nameSection.disambiguation")
}

/// Free-text annotation attached to the entity.
pub fn validate_annotation_section(section: Entry<'_>) -> Result<()> {
    validate_optional_string(section.get("content"), "annotationSection.content")
}

/// The editor's note on the revision.
pub fn validate_submission_section(section: Entry<'_>) -> Result<()> {
    validate_optional_string(section.get("note"), "submissionSection.note")
}

/// One author credit: the credited author, the name they are credited as
/// and the phrase joining them to the next credit.
pub fn validate_author_credit_row(row: Entry<'_>) -> Result<()> {
    validate_uuid(row.get_in(&["author", "id"]), "authorCredit.author.id", true)?;
    validate_required_string(row.get("name"), "authorCredit.name")?;
    validate_optional_string(row.get("joinPhrase"), "authorCredit.joinPhrase")
}

/// The author credit editor.
///
/// When credits are disabled for the form the editor must hold nothing.
/// Otherwise it needs at least one row and every row must be valid.
///
/// # Examples
///
/// ```
/// use bibcheck::record::Entry;
/// use bibcheck::validators::common::validate_author_credit_section;
/// use serde_json::json;
///
/// let empty = json!({});
/// assert!(validate_author_credit_section(Entry::from(&empty), false).is_ok());
/// assert!(validate_author_credit_section(Entry::from(&empty), true).is_err());
/// ```
pub fn validate_author_credit_section(section: Entry<'_>, enabled: bool) -> Result<()> {
    if !enabled {
        return if section.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new("Author credit must be empty when disabled")
                .in_field("authorCreditEditor")
                .with_value(section.to_value()))
        };
    }
    validate_multiple(section, validate_author_credit_row, true)
}

/// In a merge the author credit is picked from the merged entities, so
/// only the chosen credit's id is checked.
pub fn validate_author_credit_section_merge(author_credit: Entry<'_>) -> Result<()> {
    validate_positive_integer(author_credit.get("id"), "authorCredit.id", true)
}

/// Nil, or an area reference with a positive integer `id`.
pub fn validate_area(value: Entry<'_>, field: &str) -> Result<()> {
    if value.is_nil() {
        return Ok(());
    }
    validate_positive_integer(value.get("id"), &format!("{field}.id"), true)
}

/// An entity reference with a UUID `id`. Nil passes unless `required`.
pub fn validate_entity_reference(value: Entry<'_>, field: &str, required: bool) -> Result<()> {
    if value.is_nil() && !required {
        return Ok(());
    }
    validate_uuid(value.get("id"), &format!("{field}.id"), true)
}

/// A list of `{value: language id}` rows. Nil passes.
pub fn validate_languages(languages: Entry<'_>, field: &str) -> Result<()> {
    if languages.is_nil() {
        return Ok(());
    }
    let item_field = format!("{field}.value");
    validate_multiple(
        languages,
        |language| validate_positive_integer(language.get("value"), &item_field, true),
        false,
    )
}

/// The end date of a begin/end pair.
///
/// The end date must be legal on its own. It must also fall after the
/// begin date, but only when the begin date is legal: an illegal begin date
/// cannot be compared and is left for its own check to report.
///
/// # Examples
///
/// ```
/// use bibcheck::record::Entry;
/// use bibcheck::validators::common::validate_end_date;
/// use serde_json::json;
///
/// let (begin, end, illegal) = (json!("2000"), json!("1990"), json!("2000-13"));
/// assert!(validate_end_date(Entry::from(&begin), Entry::from(&end), "endDate").is_err());
/// assert!(validate_end_date(Entry::from(&end), Entry::from(&begin), "endDate").is_ok());
/// assert!(validate_end_date(Entry::from(&illegal), Entry::from(&end), "endDate").is_ok());
/// ```
pub fn validate_end_date(begin: Entry<'_>, end: Entry<'_>, field: &str) -> Result<()> {
    validate_date(end, field)?;
    if validate_date(begin, field).is_err() || date_is_before(begin, end) {
        return Ok(());
    }
    Err(ValidationError::new("End date must be after begin date")
        .in_field(field)
        .with_value(end.to_value()))
}

/// Read a top-level form section, treating an absent one as empty.
pub fn section<'a>(form: &'a dyn Record, key: &str) -> Entry<'a> {
    get_or(form, key, Entry::empty_record())
}

/// The sections every form opens with: aliases, identifiers, then the
/// name section.
pub fn validate_leading_sections(form: &dyn Record, catalog: Option<&[IdentifierType]>) -> Result<()> {
    validate_aliases(section(form, "aliasEditor"))?;
    validate_identifiers(section(form, "identifierEditor"), catalog)?;
    validate_name_section(section(form, "nameSection"))
}

/// Author credits of an entity that carries them.
///
/// In a merge the top-level `authorCredit` is checked. Otherwise the
/// `authorCreditEditor` is checked against the `authorCreditEnable` flag of
/// the entity section, which defaults to enabled.
pub fn validate_author_credits(
    form: &dyn Record,
    entity_section: Entry<'_>,
    section_key: &str,
    is_merge: bool,
) -> Result<()> {
    if is_merge {
        return validate_author_credit_section_merge(form.get("authorCredit"));
    }
    let enable = entity_section.get("authorCreditEnable");
    validate_boolean(enable, &format!("{section_key}.authorCreditEnable"))?;
    validate_author_credit_section(
        section(form, "authorCreditEditor"),
        enable.as_bool().unwrap_or(true),
    )
}
