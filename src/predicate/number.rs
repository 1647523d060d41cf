//! Number predicates
//!
//! Comparison predicates used for range checks on date components and
//! integer fields.

use super::combinators::Predicate;
use std::cmp::PartialOrd;

/// Predicate for greater than. Backs [`positive`].
#[derive(Clone, Copy, Debug)]
pub struct Gt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Gt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value > self.0
    }
}

/// Create a predicate that checks if value is strictly above `value`.
///
/// # Example
///
/// ```rust
/// use bibcheck::predicate::*;
///
/// assert!(gt(5).check(&6));
/// assert!(!gt(5).check(&5));
/// ```
pub fn gt<T: PartialOrd + Send + Sync>(value: T) -> Gt<T> {
    Gt(value)
}

/// Predicate for an inclusive upper bound, such as the last day of a month.
#[derive(Clone, Copy, Debug)]
pub struct Le<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Le<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value <= self.0
    }
}

/// Create a predicate that checks if value is at most `value`.
///
/// # Example
///
/// ```rust
/// use bibcheck::predicate::*;
///
/// assert!(le(30).check(&30));
/// assert!(!le(30).check(&31));
/// ```
pub fn le<T: PartialOrd + Send + Sync>(value: T) -> Le<T> {
    Le(value)
}

/// Predicate for an inclusive range, such as the months of a year.
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate that checks if value is between min and max (inclusive).
///
/// # Example
///
/// ```rust
/// use bibcheck::predicate::*;
///
/// let month = between(1, 12);
/// assert!(month.check(&1));
/// assert!(month.check(&12));
/// assert!(!month.check(&0));
/// assert!(!month.check(&13));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

/// Create a predicate that checks if value is positive (greater than zero).
///
/// # Example
///
/// ```rust
/// use bibcheck::predicate::*;
///
/// let p = positive::<i128>();
/// assert!(p.check(&1));
/// assert!(!p.check(&0));
/// assert!(!p.check(&-1));
/// ```
pub fn positive<T>() -> Gt<T>
where
    T: PartialOrd + Default + Send + Sync,
{
    Gt(T::default())
}

/// Predicate for divisibility.
#[derive(Clone, Copy, Debug)]
pub struct DivisibleBy(pub i128);

impl Predicate<i128> for DivisibleBy {
    #[inline]
    fn check(&self, value: &i128) -> bool {
        self.0 != 0 && value.rem_euclid(self.0) == 0
    }
}

/// Create a predicate that checks if value is a multiple of `divisor`.
///
/// Works for negative values too, so BC years follow the same calendar
/// arithmetic as AD years. A zero divisor never matches.
///
/// # Example
///
/// ```rust
/// use bibcheck::predicate::*;
///
/// assert!(divisible_by(4).check(&2020));
/// assert!(divisible_by(4).check(&-8));
/// assert!(!divisible_by(4).check(&2019));
/// ```
pub fn divisible_by(divisor: i128) -> DivisibleBy {
    DivisibleBy(divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gt() {
        assert!(gt(5).check(&6));
        assert!(!gt(5).check(&5));
        assert!(!gt(5).check(&4));
    }

    #[test]
    fn test_le() {
        assert!(le(5).check(&5));
        assert!(!le(5).check(&6));
    }

    #[test]
    fn test_between() {
        let p = between(1, 31);
        assert!(p.check(&1));
        assert!(p.check(&31));
        assert!(!p.check(&0));
        assert!(!p.check(&32));
    }

    #[test]
    fn test_positive() {
        let p = positive::<i128>();
        assert!(p.check(&1));
        assert!(!p.check(&0));
        assert!(!p.check(&-1));
    }

    #[test]
    fn test_divisible_by() {
        assert!(divisible_by(100).check(&1900));
        assert!(divisible_by(100).check(&0));
        assert!(divisible_by(400).check(&-400));
        assert!(!divisible_by(400).check(&-100));
        assert!(!divisible_by(0).check(&0));
    }
}
