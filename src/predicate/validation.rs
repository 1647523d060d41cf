//! Result integration for predicates
//!
//! This module turns a failed predicate check into an error value, so field
//! validators can be written as a chain of `?`-propagated checks.

use super::combinators::Predicate;

/// Validate a value using a predicate.
///
/// Returns `Ok(value)` if the predicate is satisfied, otherwise `Err(error)`.
///
/// # Example
///
/// ```rust
/// use bibcheck::predicate::*;
///
/// assert_eq!(validate(&7, between(1, 12), "bad month"), Ok(&7));
/// assert_eq!(validate(&13, between(1, 12), "bad month"), Err("bad month"));
/// ```
pub fn validate<'v, T, E, P>(value: &'v T, predicate: P, error: E) -> Result<&'v T, E>
where
    T: ?Sized,
    P: Predicate<T>,
{
    if predicate.check(value) {
        Ok(value)
    } else {
        Err(error)
    }
}

/// Validate a value with an error factory.
///
/// Like `validate`, but the error is only built when the check fails, and
/// the factory can see the offending value.
///
/// # Example
///
/// ```rust
/// use bibcheck::predicate::*;
///
/// let result = validate_with("", not_empty(), |s: &str| format!("{:?} is empty", s));
/// assert_eq!(result, Err("\"\" is empty".to_string()));
/// ```
pub fn validate_with<'v, T, E, P, F>(value: &'v T, predicate: P, error_fn: F) -> Result<&'v T, E>
where
    T: ?Sized,
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(value) {
        Ok(value)
    } else {
        Err(error_fn(value))
    }
}
