//! Property-based tests for partial dates

use bibcheck::date::{date_is_before, date_validator, is_null_date, PartialDate};
use bibcheck::record::Entry;
use proptest::prelude::*;
use serde_json::json;

/// (year, month, day) with a signed year and optional month and day.
fn date_parts() -> impl Strategy<Value = (i64, Option<u32>, Option<u32>)> {
    (
        prop_oneof![-9999i64..=-1, 1i64..=9999],
        proptest::option::of(1u32..=12),
        1u32..=28,
        any::<bool>(),
    )
        .prop_map(|(year, month, day, with_day)| {
            let day = month.and(with_day.then_some(day));
            (year, month, day)
        })
}

fn iso(year: i64, month: Option<u32>, day: Option<u32>) -> String {
    let mut s = if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("{:04}", year)
    };
    if let Some(month) = month {
        s.push_str(&format!("-{:02}", month));
    }
    if let Some(day) = day {
        s.push_str(&format!("-{:02}", day));
    }
    s
}

proptest! {
    #[test]
    fn prop_parse_signs_year_and_defaults_missing_parts((year, month, day) in date_parts()) {
        let date = PartialDate::parse(&iso(year, month, day));

        let expected_year = if year < 0 { year.to_string() } else { format!("{:04}", year) };
        prop_assert_eq!(&date.year, &expected_year);
        prop_assert_eq!(&date.month, &month.map(|m| format!("{:02}", m)).unwrap_or_default());
        prop_assert_eq!(&date.day, &day.map(|d| format!("{:02}", d)).unwrap_or_default());
        prop_assert!(!date.is_null());
    }

    #[test]
    fn prop_generated_dates_are_legal((year, month, day) in date_parts()) {
        let date = PartialDate::parse(&iso(year, month, day));
        prop_assert!(date.validate().is_ok());
        prop_assert_eq!(date.to_iso_string(), iso(year, month, day));
    }

    #[test]
    fn prop_is_before_is_irreflexive((year, month, day) in date_parts()) {
        let value = json!(iso(year, month, day));
        prop_assert!(!date_is_before(Entry::from(&value), Entry::from(&value)));
    }

    #[test]
    fn prop_null_operand_is_always_before((year, month, day) in date_parts()) {
        let value = json!(iso(year, month, day));
        let empty = json!("");
        prop_assert!(date_is_before(Entry::from(&empty), Entry::from(&value)));
        prop_assert!(date_is_before(Entry::from(&value), Entry::from(&empty)));
        prop_assert!(date_is_before(Entry::Missing, Entry::from(&value)));
    }

    #[test]
    fn prop_is_before_matches_tuple_order(
        a in (-3000i64..=3000, 1u32..=12, 1u32..=28),
        b in (-3000i64..=3000, 1u32..=12, 1u32..=28),
    ) {
        prop_assume!(a.0 != 0 && b.0 != 0);
        let first = json!(iso(a.0, Some(a.1), Some(a.2)));
        let second = json!(iso(b.0, Some(b.1), Some(b.2)));
        prop_assert_eq!(date_is_before(Entry::from(&first), Entry::from(&second)), a < b);
    }

    #[test]
    fn prop_day_needs_month(day in 1u32..=31, year in 1i64..=9999) {
        let err = date_validator(&day.to_string(), "", &year.to_string()).unwrap_err();
        prop_assert_eq!(err.field(), Some("month"));
    }

    #[test]
    fn prop_month_out_of_range_fails(month in 13u32..=1000, year in 1i64..=9999) {
        let err = date_validator("", &month.to_string(), &year.to_string()).unwrap_err();
        prop_assert_eq!(err.field(), Some("month"));
    }
}

#[test]
fn null_date_detection() {
    let empty = json!({"year": "", "month": "", "day": ""});
    let with_year = json!({"year": "1066", "month": "", "day": ""});
    assert!(is_null_date(Entry::from(&empty)));
    assert!(!is_null_date(Entry::from(&with_year)));
}

#[test]
fn leap_years() {
    assert!(date_validator("29", "2", "2000").is_ok());
    assert!(date_validator("29", "2", "2020").is_ok());
    assert!(date_validator("29", "2", "1900").is_err());
    assert!(date_validator("29", "2", "2019").is_err());
    assert!(date_validator("29", "2", "-4").is_ok());
    assert!(date_validator("29", "2", "-100").is_err());
}
