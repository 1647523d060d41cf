//! Predicate combinators for composable validation logic
//!
//! Field rules in this crate are built from small predicates combined with
//! `and`, `or` and `not`, then turned into a [`crate::ValidationError`] with
//! [`validate_with`] when they fail.
//!
//! # Example
//!
//! ```rust
//! use bibcheck::predicate::*;
//!
//! let is_leap_year = divisible_by(400).or(divisible_by(4).and(divisible_by(100).not()));
//! let day_of_short_month = between(1, 30);
//!
//! assert!(is_leap_year.check(&2000));
//! assert!(!is_leap_year.check(&1900));
//! assert!(day_of_short_month.check(&30));
//! assert!(!day_of_short_month.check(&31));
//! ```

mod combinators;
mod number;
mod string;
mod validation;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{And, Not, Or};

// Re-export string predicates
pub use string::{matches, not_empty, one_of, Matches, NotEmpty, OneOf};

// Re-export number predicates
pub use number::{between, divisible_by, gt, le, positive, Between, DivisibleBy, Gt, Le};

// Re-export validation integration
pub use validation::{validate, validate_with};
