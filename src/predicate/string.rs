//! String predicates
//!
//! Predicates used by the string, UUID, identifier and series-type checks.

use regex::Regex;

use super::combinators::Predicate;

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

/// Create a predicate that checks if a string is not empty.
///
/// # Example
///
/// ```rust
/// use bibcheck::predicate::*;
///
/// assert!(not_empty().check("Le Guin"));
/// assert!(!not_empty().check(""));
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks if a string matches a regular expression.
#[derive(Clone, Copy, Debug)]
pub struct Matches<'r>(pub &'r Regex);

impl Predicate<str> for Matches<'_> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

/// Create a predicate that checks if a string matches `regex`.
///
/// The match is unanchored unless the pattern anchors itself.
///
/// # Example
///
/// ```rust
/// use bibcheck::predicate::*;
/// use regex::Regex;
///
/// let isbn13 = Regex::new(r"^97[89]\d{10}$").unwrap();
/// assert!(matches(&isbn13).check("9780441478125"));
/// assert!(!matches(&isbn13).check("0441478123"));
/// ```
pub fn matches(regex: &Regex) -> Matches<'_> {
    Matches(regex)
}

/// Predicate that checks if a string is one of a fixed set.
#[derive(Clone, Copy, Debug)]
pub struct OneOf<'a>(pub &'a [&'a str]);

impl Predicate<str> for OneOf<'_> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.iter().any(|allowed| *allowed == value)
    }
}

/// Create a predicate that checks if a string equals one of `allowed`.
///
/// # Example
///
/// ```rust
/// use bibcheck::predicate::*;
///
/// let kinds = one_of(&["Author", "Work"]);
/// assert!(kinds.check("Work"));
/// assert!(!kinds.check("work"));
/// ```
pub fn one_of<'a>(allowed: &'a [&'a str]) -> OneOf<'a> {
    OneOf(allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;

    #[test]
    fn test_not_empty() {
        assert!(not_empty().check("hello"));
        assert!(!not_empty().check(""));
    }

    #[test]
    fn test_matches_unanchored() {
        let re = Regex::new(r"\d+").unwrap();
        assert!(matches(&re).check("abc123"));
        assert!(!matches(&re).check("abc"));
    }

    #[test]
    fn test_one_of() {
        let p = one_of(&["a", "b"]);
        assert!(p.check("a"));
        assert!(!p.check("c"));
        assert!(!p.check(""));
    }

    #[test]
    fn test_not_empty_and_matches() {
        let re = Regex::new(r"^\w*$").unwrap();
        let p = PredicateExt::<str>::and(not_empty(), matches(&re));
        assert!(p.check("abc"));
        assert!(!p.check(""));
        assert!(!p.check("a b"));
    }
}
