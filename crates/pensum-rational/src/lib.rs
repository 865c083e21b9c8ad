//! # pensum-rational
//!
//! Exact arbitrary precision rational arithmetic.
//!
//! Every [`Rational`] is kept in canonical form: fully reduced, with a
//! positive denominator. Construction and division are the only fallible
//! operations; all comparisons are exact at any magnitude.
//!
//! ## Example
//!
//! ```rust
//! use pensum_rational::{Rational, RationalRange};
//!
//! let half: Rational = "1/2".parse().unwrap();
//! let third: Rational = "1/3".parse().unwrap();
//!
//! assert_eq!(&half + &third, Rational::from_i64(5, 6));
//! assert_eq!((&half - &third).to_string(), "1/6");
//!
//! let range = RationalRange::new(third, Rational::from_i64(2, 3));
//! assert!(range.contains(&half));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod range;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::RationalError;
pub use range::RationalRange;
pub use rational::Rational;
