//! Inclusive ranges of rational values.

use std::fmt;
use std::ops::{Bound, RangeBounds, RangeInclusive};

use crate::rational::Rational;

/// An inclusive interval `[lower, upper]` over rational values.
///
/// Membership is decided by exact numeric comparison. A range whose
/// lower bound exceeds its upper bound is constructible and contains
/// nothing.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RationalRange {
    lower: Rational,
    upper: Rational,
}

impl RationalRange {
    /// Creates a new inclusive range from `lower` to `upper`.
    #[must_use]
    pub fn new(lower: Rational, upper: Rational) -> Self {
        Self { lower, upper }
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub fn lower(&self) -> &Rational {
        &self.lower
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    pub fn upper(&self) -> &Rational {
        &self.upper
    }

    /// Returns true if no value lies in the range.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower > self.upper
    }

    /// Returns true if `value` lies in the range, bounds included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pensum_rational::{Rational, RationalRange};
    ///
    /// let range = RationalRange::new(Rational::from_i64(1, 3), Rational::from_i64(2, 3));
    /// assert!(range.contains(&Rational::from_i64(1, 2)));
    /// assert!(!range.contains(&Rational::from_i64(3, 4)));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &Rational) -> bool {
        self.lower <= *value && *value <= self.upper
    }
}

impl fmt::Display for RationalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

impl From<RangeInclusive<Rational>> for RationalRange {
    fn from(range: RangeInclusive<Rational>) -> Self {
        let (lower, upper) = range.into_inner();
        Self { lower, upper }
    }
}

impl RangeBounds<Rational> for RationalRange {
    fn start_bound(&self) -> Bound<&Rational> {
        Bound::Included(&self.lower)
    }

    fn end_bound(&self) -> Bound<&Rational> {
        Bound::Included(&self.upper)
    }
}
