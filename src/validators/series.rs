//! Series forms

use crate::catalog::IdentifierType;
use crate::error::{Result, ValidationError};
use crate::predicate::{one_of, validate_with};
use crate::record::{Entry, Record};

use super::base::validate_positive_integer;
use super::common::{section, validate_leading_sections, validate_submission_section};
use super::{traced, EntityType};

/// Entity kinds a series can collect.
pub const SERIES_TYPES: [&str; 5] = ["Author", "Work", "Edition", "EditionGroup", "Publisher"];

/// The kind of entity a series collects. Required.
pub fn validate_series_type(value: Entry<'_>, field: &str) -> Result<()> {
    let error = || {
        ValidationError::new("Value must be one of Author, Work, Edition, EditionGroup, Publisher")
            .in_field(field)
            .with_value(value.to_value())
    };
    let series_type = value.as_str().ok_or_else(error)?;
    validate_with(series_type, one_of(&SERIES_TYPES), |_| error())?;
    Ok(())
}

/// The `seriesSection` of a form.
///
/// # Examples
///
/// ```
/// use bibcheck::record::Entry;
/// use bibcheck::validators::series::validate_series_section;
/// use serde_json::json;
///
/// let section = json!({"orderType": 1, "seriesType": "Work"});
/// assert!(validate_series_section(Entry::from(&section)).is_ok());
///
/// let section = json!({"orderType": 1, "seriesType": "Series"});
/// assert!(validate_series_section(Entry::from(&section)).is_err());
/// ```
pub fn validate_series_section(section: Entry<'_>) -> Result<()> {
    validate_positive_integer(section.get("orderType"), "seriesSection.orderType", true)?;
    validate_series_type(section.get("seriesType"), "seriesSection.seriesType")
}

/// Validate a complete series form.
pub fn validate_series(
    form: &dyn Record,
    identifier_types: Option<&[IdentifierType]>,
    _is_merge: bool,
) -> Result<()> {
    traced(EntityType::Series, validate_series_form(form, identifier_types))
}

fn validate_series_form(form: &dyn Record, identifier_types: Option<&[IdentifierType]>) -> Result<()> {
    validate_leading_sections(form, identifier_types)?;
    validate_series_section(section(form, EntityType::Series.section_key()))?;
    validate_submission_section(section(form, "submissionSection"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_series_type_is_an_entity_kind() {
        for name in SERIES_TYPES {
            let kind: EntityType = name.parse().unwrap();
            assert_eq!(kind.as_str(), name);
        }
    }

    #[test]
    fn test_series_type_is_case_sensitive() {
        let value = json!("work");
        assert!(validate_series_type(Entry::from(&value), "seriesType").is_err());
    }

    #[test]
    fn test_series_type_required() {
        let section = json!({"orderType": 2});
        let err = validate_series_section(Entry::from(&section)).unwrap_err();
        assert_eq!(err.field(), Some("seriesSection.seriesType"));
        assert_eq!(err.value(), Some(&serde_json::Value::Null));
    }

    #[test]
    fn test_order_type_required() {
        let section = json!({"seriesType": "Edition"});
        let err = validate_series_section(Entry::from(&section)).unwrap_err();
        assert_eq!(err.field(), Some("seriesSection.orderType"));
        assert_eq!(err.message(), "Value is required");
    }

    #[test]
    fn test_series_form() {
        let form = json!({
            "aliasEditor": {"a0": {"name": "Earthsea", "sortName": "Earthsea", "language": 120, "primary": false}},
            "nameSection": {"name": "Earthsea Cycle", "sortName": "Earthsea Cycle", "language": 120},
            "seriesSection": {"orderType": 1, "seriesType": "Work"},
        });
        assert!(validate_series(&form, None, false).is_ok());
    }
}
