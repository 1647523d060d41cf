//! Partial calendar dates
//!
//! Bibliographic dates are often incomplete: a birth year with no month, a
//! publication month with no day, or a year before the common era. This
//! module models such a date as a [`PartialDate`] of three string
//! components, any of which may be empty, and provides:
//!
//! - parsing from ISO-like strings (`"1969"`, `"1969-03"`, `"-0044-03-15"`)
//!   or from an already split `{year, month, day}` record
//! - nullness (every component empty)
//! - calendar legality, with day-requires-month-requires-year
//! - a strict ordering between two partial dates
//!
//! # Example
//!
//! ```
//! use bibcheck::date::{date_validator, PartialDate};
//!
//! let ides = PartialDate::parse("-0044-03-15");
//! assert_eq!(ides.year, "-44");
//! assert_eq!(ides.month, "03");
//! assert_eq!(ides.day, "15");
//!
//! assert!(date_validator("29", "2", "2020").is_ok());
//! assert!(date_validator("29", "2", "2019").is_err());
//!
//! let born = PartialDate::parse("1929-10");
//! let died = PartialDate::parse("2018-01-22");
//! assert!(born.is_before(&died));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{Result, ValidationError};
use crate::predicate::{between, divisible_by, le, validate_with, Predicate, PredicateExt};
use crate::record::{Entry, Record};

/// Decimal number syntax accepted for a date component.
static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("decimal pattern is valid")
});

/// A calendar date whose components may be missing.
///
/// Each component is either empty (unspecified) or a decimal digit string;
/// the year may carry a leading `-` for years before the common era.
/// Nothing about legality is enforced on construction, see
/// [`PartialDate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartialDate {
    /// The year, signed for BC years, or empty.
    pub year: String,
    /// The month, `1`-`12`, or empty.
    pub month: String,
    /// The day of the month, or empty.
    pub day: String,
}

impl PartialDate {
    /// Build a date from its components.
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        PartialDate {
            year: year.into(),
            month: month.into(),
            day: day.into(),
        }
    }

    /// Parse an ISO-like date string.
    ///
    /// The string is split on `-`. A leading `-` marks a BC year: the empty
    /// first segment is dropped and the year is negated, losing any zero
    /// padding (`"-0044"` becomes year `"-44"`). Missing trailing segments
    /// stay empty, so `"1969"` has no month or day.
    ///
    /// # Examples
    ///
    /// ```
    /// use bibcheck::date::PartialDate;
    ///
    /// assert_eq!(PartialDate::parse("2017-11"), PartialDate::new("2017", "11", ""));
    /// assert_eq!(PartialDate::parse("-500"), PartialDate::new("-500", "", ""));
    /// assert!(PartialDate::parse("").is_null());
    /// ```
    pub fn parse(value: &str) -> Self {
        if value.is_empty() {
            return PartialDate::default();
        }

        let mut segments: Vec<String> = value.split('-').map(str::to_owned).collect();
        if segments.first().is_some_and(String::is_empty) {
            segments.remove(0);
            if let Some(year) = segments.first_mut() {
                *year = negate_year(year);
            }
        }

        let mut segments = segments.into_iter();
        PartialDate {
            year: segments.next().unwrap_or_default(),
            month: segments.next().unwrap_or_default(),
            day: segments.next().unwrap_or_default(),
        }
    }

    /// True when no component is specified.
    pub fn is_null(&self) -> bool {
        self.year.is_empty() && self.month.is_empty() && self.day.is_empty()
    }

    /// True when year, month and day are all specified.
    pub fn is_complete(&self) -> bool {
        !self.year.is_empty() && !self.month.is_empty() && !self.day.is_empty()
    }

    /// Check calendar legality, see [`date_validator`].
    pub fn validate(&self) -> Result<()> {
        date_validator(&self.day, &self.month, &self.year)
    }

    /// Strict ordering between two dates, see [`date_is_before`].
    ///
    /// An unspecified date never conflicts, so either operand being null
    /// makes this true.
    pub fn is_before(&self, end: &PartialDate) -> bool {
        if self.is_null() || end.is_null() {
            return true;
        }

        let begin = (
            coerce_integer(&self.year),
            coerce_integer(&self.month),
            coerce_integer(&self.day),
        );
        let end = (
            coerce_integer(&end.year),
            coerce_integer(&end.month),
            coerce_integer(&end.day),
        );
        begin < end
    }

    /// Render as `YYYY[-MM[-DD]]`.
    ///
    /// The year is zero padded to four digits with a leading `-` for BC
    /// years; month and day are zero padded to two. Only the leading run of
    /// specified components is rendered, and components that are not
    /// integers are copied verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use bibcheck::date::PartialDate;
    ///
    /// assert_eq!(PartialDate::new("-44", "3", "15").to_iso_string(), "-0044-03-15");
    /// assert_eq!(PartialDate::new("1969", "", "").to_iso_string(), "1969");
    /// assert_eq!(PartialDate::default().to_iso_string(), "");
    /// ```
    pub fn to_iso_string(&self) -> String {
        if self.year.is_empty() {
            return String::new();
        }

        let mut out = match component_integer(&self.year) {
            Some(year) if year < 0 => format!("-{:04}", year.unsigned_abs()),
            Some(year) => format!("{:04}", year),
            None => self.year.clone(),
        };
        for component in [&self.month, &self.day] {
            if component.is_empty() {
                break;
            }
            match component_integer(component) {
                Some(n) => out.push_str(&format!("-{:02}", n)),
                None => {
                    out.push('-');
                    out.push_str(component);
                }
            }
        }
        out
    }

    fn from_record(record: &dyn Record) -> Self {
        PartialDate {
            year: component_text(record.get_in(&["year"])),
            month: component_text(record.get_in(&["month"])),
            day: component_text(record.get_in(&["day"])),
        }
    }
}

impl fmt::Display for PartialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl FromStr for PartialDate {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(PartialDate::parse(s))
    }
}

impl From<&str> for PartialDate {
    fn from(s: &str) -> Self {
        PartialDate::parse(s)
    }
}

/// Negate a BC year segment, keeping only its leading integer.
fn negate_year(segment: &str) -> String {
    match parse_int_prefix(segment) {
        Some(0) => "0".to_string(),
        Some(n) => (-n).to_string(),
        None => format!("-{}", segment),
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits.
fn parse_int_prefix(segment: &str) -> Option<i128> {
    let trimmed = segment.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let n: i128 = unsigned[..digits_end].parse().ok()?;
    Some(if negative { -n } else { n })
}

/// Read a component as an integer, with number-coercion leniency.
///
/// Surrounding whitespace is ignored, a blank string reads as zero and an
/// integral decimal such as `"11.0"` or `"1e3"` counts as an integer.
fn component_integer(component: &str) -> Option<i128> {
    let trimmed = component.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if !DECIMAL.is_match(trimmed) {
        return None;
    }
    let n: f64 = trimmed.parse().ok()?;
    (n.is_finite() && n.fract() == 0.0).then_some(n as i128)
}

/// Read a component for comparison: truncated towards zero, anything
/// non-numeric reads as zero.
fn coerce_integer(component: &str) -> i128 {
    let trimmed = component.trim();
    if !DECIMAL.is_match(trimmed) {
        return 0;
    }
    trimmed.parse::<f64>().map_or(0, |n| n.trunc() as i128)
}

fn component_text(entry: Entry<'_>) -> String {
    match entry {
        Entry::Missing | Entry::Value(Value::Null) => String::new(),
        Entry::Value(Value::String(s)) => s.clone(),
        Entry::Value(Value::Number(n)) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && n.is_f64() => format!("{}", f as i128),
            _ => n.to_string(),
        },
        other => other.to_value().to_string(),
    }
}

fn is_date_shaped(record: &dyn Record) -> bool {
    ["year", "month", "day"]
        .iter()
        .all(|key| !record.get_in(&[*key]).is_missing())
}

/// Normalize a string or `{year, month, day}` record into a [`PartialDate`].
///
/// Strings go through [`PartialDate::parse`]. A record holding `year`,
/// `month` and `day` keys is taken as-is, with numbers rendered in decimal
/// and nulls read as unspecified. Anything else is the null date.
///
/// # Examples
///
/// ```
/// use bibcheck::date::{iso_date_string_to_object, PartialDate};
/// use bibcheck::record::Entry;
/// use serde_json::json;
///
/// let from_string = json!("1984-06");
/// let from_object = json!({"year": 1984, "month": "06", "day": null});
/// let from_number = json!(1984);
///
/// assert_eq!(iso_date_string_to_object(Entry::from(&from_string)), PartialDate::new("1984", "06", ""));
/// assert_eq!(iso_date_string_to_object(Entry::from(&from_object)), PartialDate::new("1984", "06", ""));
/// assert!(iso_date_string_to_object(Entry::from(&from_number)).is_null());
/// ```
pub fn iso_date_string_to_object(value: Entry<'_>) -> PartialDate {
    if let Some(s) = value.as_str() {
        return PartialDate::parse(s);
    }
    match value.as_record() {
        Some(record) if is_date_shaped(record) => PartialDate::from_record(record),
        _ => PartialDate::default(),
    }
}

/// True when `value` normalizes to a date with no component specified.
///
/// # Examples
///
/// ```
/// use bibcheck::date::is_null_date;
/// use bibcheck::record::Entry;
/// use serde_json::json;
///
/// let empty = json!({"year": "", "month": "", "day": ""});
/// let year_only = json!({"year": "2020", "month": "", "day": ""});
///
/// assert!(is_null_date(Entry::from(&empty)));
/// assert!(!is_null_date(Entry::from(&year_only)));
/// assert!(is_null_date(Entry::Missing));
/// ```
pub fn is_null_date(value: Entry<'_>) -> bool {
    iso_date_string_to_object(value).is_null()
}

/// Check that `day`, `month` and `year` form a legal partial date.
///
/// Empty components are unspecified. A day needs a month and a month needs
/// a year. A specified year may be any integer; a month must be in 1-12; a
/// day must be in 1-31, at most 30 in April, June, September and November,
/// and at most 29 in February, where the 29th exists only in leap years.
///
/// The returned failure's `field` names the component at fault (`"year"`,
/// `"month"` or `"day"`).
///
/// # Examples
///
/// ```
/// use bibcheck::date::date_validator;
///
/// assert!(date_validator("", "", "2017").is_ok());
/// assert!(date_validator("", "11", "2017").is_ok());
/// assert!(date_validator("21", "11", "2017").is_ok());
///
/// let err = date_validator("31", "4", "2017").unwrap_err();
/// assert_eq!(err.field(), Some("day"));
///
/// let err = date_validator("1", "", "2017").unwrap_err();
/// assert_eq!(err.field(), Some("month"));
/// ```
pub fn date_validator(day: &str, month: &str, year: &str) -> Result<()> {
    if year.is_empty() {
        if !month.is_empty() || !day.is_empty() {
            return Err(ValidationError::new(
                "Year must be entered if month or day is entered",
            )
            .in_field("year"));
        }
        return Ok(());
    }
    let year = component_integer(year).ok_or_else(|| {
        ValidationError::new("Year is not a valid integer")
            .in_field("year")
            .with_value(Value::from(year))
    })?;

    if month.is_empty() {
        if !day.is_empty() {
            return Err(
                ValidationError::new("Month must be entered if day is entered").in_field("month"),
            );
        }
        return Ok(());
    }
    let month_text = month;
    let month = component_integer(month)
        .ok_or(())
        .and_then(|m| validate_with(&m, between(1, 12), |_| ()).copied())
        .map_err(|_| {
            ValidationError::new("Month must be an integer between 1 and 12")
                .in_field("month")
                .with_value(Value::from(month_text))
        })?;

    if day.is_empty() {
        return Ok(());
    }
    let day_text = day;
    let day_error = |message: &str| {
        ValidationError::new(message)
            .in_field("day")
            .with_value(Value::from(day_text))
    };
    let day = component_integer(day)
        .ok_or(())
        .and_then(|d| validate_with(&d, between(1, 31), |_| ()).copied())
        .map_err(|_| day_error("Day must be an integer between 1 and 31"))?;

    if matches!(month, 4 | 6 | 9 | 11) {
        validate_with(&day, le(30), |_| {
            day_error("Day must be between 1 and 30 for the given month")
        })?;
    } else if month == 2 {
        validate_with(&day, le(29), |_| day_error("February has at most 29 days"))?;
        let leap_year = divisible_by(400).or(divisible_by(4).and(divisible_by(100).not()));
        if day == 29 && !leap_year.check(&year) {
            return Err(day_error("February 29th only exists in leap years"));
        }
    }

    Ok(())
}

/// True when `begin` falls strictly before `end`.
///
/// Both values are normalized with [`iso_date_string_to_object`]. If either
/// is the null date the pair counts as ordered, since an unknown date never
/// conflicts. Otherwise year, month and day are compared in turn as
/// integers, with unspecified or non-numeric components reading as zero.
/// Equal dates are not before each other.
///
/// No legality check is made; callers validate each date first.
///
/// # Examples
///
/// ```
/// use bibcheck::date::date_is_before;
/// use bibcheck::record::Entry;
/// use serde_json::json;
///
/// let (a, b) = (json!("1990"), json!("2000-01"));
/// assert!(date_is_before(Entry::from(&a), Entry::from(&b)));
/// assert!(!date_is_before(Entry::from(&b), Entry::from(&a)));
/// assert!(!date_is_before(Entry::from(&a), Entry::from(&a)));
/// assert!(date_is_before(Entry::Missing, Entry::from(&a)));
/// ```
pub fn date_is_before(begin: Entry<'_>, end: Entry<'_>) -> bool {
    iso_date_string_to_object(begin).is_before(&iso_date_string_to_object(end))
}
