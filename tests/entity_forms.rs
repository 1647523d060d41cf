//! End-to-end validation of whole entity forms

use bibcheck::testing::MockForm;
use bibcheck::validators::{validate_author, validate_edition, validate_form, EntityType};
use bibcheck::{assert_invalid, assert_invalid_field, assert_valid, IdentifierType};
use serde_json::json;

const AUTHOR_ID: &str = "b1f4e7a2-5c3d-4e8f-9a0b-1c2d3e4f5a6b";

fn catalog() -> Vec<IdentifierType> {
    vec![
        IdentifierType::new(1, "ISNI", r"^\d{15}[\dX]$").for_entity("Author"),
        IdentifierType::new(10, "ISBN-13", r"^97[89]\d{10}$").for_entity("Edition"),
    ]
}

#[test]
fn author_end_date_before_begin_date() {
    let form = MockForm::new(EntityType::Author)
        .with_section(json!({"beginDate": "2000", "endDate": "1990", "ended": true}))
        .build();
    let err = assert_invalid!(validate_author(&form, None, false));
    assert_eq!(err.message(), "End date must be after begin date");

    let form = MockForm::new(EntityType::Author)
        .with_section(json!({"beginDate": "2000", "endDate": "2010", "ended": true}))
        .build();
    assert_valid!(validate_author(&form, None, false));
}

#[test]
fn edition_author_credit_flag() {
    let form = MockForm::new(EntityType::Edition)
        .with("authorCreditEditor", json!({}))
        .with_section(json!({"authorCreditEnable": false}))
        .build();
    assert_valid!(validate_edition(&form, None, false));

    let form = MockForm::new(EntityType::Edition)
        .with("authorCreditEditor", json!({}))
        .with_section(json!({"authorCreditEnable": true}))
        .build();
    let err = assert_invalid!(validate_edition(&form, None, false));
    assert_eq!(err.message(), "At least one value is required");

    let form = MockForm::new(EntityType::Edition)
        .with("authorCreditEditor", json!({}))
        .with_section(json!({}))
        .build();
    assert_invalid!(validate_edition(&form, None, false));
}

#[test]
fn edition_with_everything() {
    let form = MockForm::new(EntityType::Edition)
        .with(
            "aliasEditor",
            json!({"a0": {"name": "Earthsea", "sortName": "Earthsea", "language": 120, "primary": false}}),
        )
        .with(
            "identifierEditor",
            json!({"i0": {"type": 10, "value": "9780553383041"}}),
        )
        .with_section(json!({
            "pages": 183,
            "format": 2,
            "languages": [{"value": 120}],
            "releaseDate": {"year": 1968, "month": 11, "day": null},
        }))
        .with(
            "authorCreditEditor",
            json!({"n0": {"author": {"id": AUTHOR_ID}, "name": "Ursula K. Le Guin", "joinPhrase": ""}}),
        )
        .build();
    assert_valid!(validate_edition(&form, Some(&catalog()), false));
}

#[test]
fn identifier_catalog_checks() {
    let form = MockForm::new(EntityType::Author)
        .with("identifierEditor", json!({"i0": {"type": 1, "value": "0000000121464388"}}))
        .build();
    assert_valid!(validate_author(&form, Some(&catalog()), false));

    let form = MockForm::new(EntityType::Author)
        .with("identifierEditor", json!({"i0": {"type": 1, "value": "not an isni"}}))
        .build();
    assert_invalid_field!(validate_author(&form, Some(&catalog()), false), "identifier.value");
    // Without a catalog only the shape is checked.
    assert_valid!(validate_author(&form, None, false));

    let form = MockForm::new(EntityType::Author)
        .with("identifierEditor", json!({"i0": {"type": 77, "value": "x"}}))
        .build();
    let err = assert_invalid!(validate_author(&form, Some(&catalog()), false));
    assert_eq!(err.message(), "Identifier type does not exist");
}

#[test]
fn first_failure_wins() {
    let form = MockForm::new(EntityType::Publisher)
        .with("aliasEditor", json!({"a0": {"name": "", "sortName": "", "language": 0}}))
        .with("nameSection", json!({}))
        .with_section(json!({"type": -1}))
        .build();
    let err = assert_invalid!(validate_form(EntityType::Publisher, &form, None, false));
    assert_eq!(err.field(), Some("alias.name"));
}

#[test]
fn merge_mode_uses_chosen_author_credit() {
    let form = MockForm::new(EntityType::Work)
        .with_section(json!({}))
        .with("authorCredit", json!({"id": 42}))
        .build();
    assert_valid!(validate_form(EntityType::Work, &form, None, true));
    assert_invalid!(validate_form(EntityType::Work, &form, None, false));

    let form = MockForm::new(EntityType::Work).with_section(json!({})).build();
    assert_invalid_field!(validate_form(EntityType::Work, &form, None, true), "authorCredit.id");
}

#[test]
fn series_requires_known_series_type() {
    let form = MockForm::new(EntityType::Series)
        .with_section(json!({"orderType": 2, "seriesType": "Magazine"}))
        .build();
    assert_invalid_field!(
        validate_form(EntityType::Series, &form, None, false),
        "seriesSection.seriesType"
    );

    let form = MockForm::new(EntityType::Series)
        .with_section(json!({"orderType": 2}))
        .build();
    assert_invalid!(validate_form(EntityType::Series, &form, None, false));
}

#[test]
fn work_annotation_must_be_text() {
    let form = MockForm::new(EntityType::Work)
        .with("annotationSection", json!({"content": {"text": "nested"}}))
        .build();
    assert_invalid_field!(
        validate_form(EntityType::Work, &form, None, false),
        "annotationSection.content"
    );
}

#[test]
fn annotation_ignored_outside_works() {
    let form = MockForm::new(EntityType::Edition)
        .with("annotationSection", json!({"content": 5}))
        .build();
    assert_valid!(validate_form(EntityType::Edition, &form, None, false));
}

#[test]
fn sections_that_are_not_records() {
    let form = MockForm::new(EntityType::Author)
        .with("aliasEditor", json!("Le Guin"))
        .build();
    let err = assert_invalid!(validate_author(&form, None, false));
    assert_eq!(err.message(), "Value must be a collection");

    let form = MockForm::new(EntityType::Author)
        .with("aliasEditor", json!(null))
        .build();
    assert_invalid!(validate_author(&form, None, false));
}

#[cfg(feature = "serde")]
#[test]
fn failure_serializes_for_clients() {
    let form = MockForm::new(EntityType::Edition)
        .with_section(json!({"authorCreditEnable": false, "pages": 0}))
        .build();
    let err = assert_invalid!(validate_edition(&form, None, false));
    let payload = serde_json::to_value(&err).unwrap();
    assert_eq!(
        payload,
        json!({"message": "Value must be a positive integer", "field": "editionSection.pages", "value": 0})
    );
}
