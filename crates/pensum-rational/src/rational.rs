//! Arbitrary precision rational numbers.
//!
//! This module provides exact fraction arithmetic on top of `dashu`
//! big integers. Every produced value is canonical: reduced to lowest
//! terms with a positive denominator.

use dashu::base::{Abs, Gcd};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::RationalError;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive
/// denominator, so structural equality and hashing coincide with
/// numeric equality. Values are immutable; every operation returns a
/// new rational.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: IBig,
    denom: IBig,
}

impl Rational {
    /// Creates a rational from numerator and denominator, reducing to
    /// canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is
    /// zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pensum_rational::Rational;
    ///
    /// let r = Rational::new(2, 4).unwrap();
    /// assert_eq!(r.to_string(), "1/2");
    /// assert!(Rational::new(1, 0).is_err());
    /// ```
    pub fn new(
        numerator: impl Into<IBig>,
        denominator: impl Into<IBig>,
    ) -> Result<Self, RationalError> {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator == IBig::ZERO {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        Self::reduced(IBig::from(numerator), IBig::from(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: impl Into<IBig>) -> Self {
        Self {
            numer: n.into(),
            denom: IBig::ONE,
        }
    }

    /// Reduces a raw pair to canonical form.
    ///
    /// The denominator must already be known to be non-zero.
    fn reduced(numer: IBig, denom: IBig) -> Self {
        debug_assert!(denom != IBig::ZERO, "denominator cannot be zero");
        let g = IBig::from(numer.clone().gcd(denom.clone()));
        let mut numer = numer / &g;
        let mut denom = denom / &g;
        if denom < IBig::ZERO {
            numer = -numer;
            denom = -denom;
        }
        Self { numer, denom }
    }

    /// Returns the numerator of the canonical form. The sign of the
    /// rational lives here.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        &self.numer
    }

    /// Returns the denominator of the canonical form, always positive.
    #[must_use]
    pub fn denominator(&self) -> &IBig {
        &self.denom
    }

    /// Consumes the rational and returns its `(numerator, denominator)`
    /// pair.
    #[must_use]
    pub fn into_parts(self) -> (IBig, IBig) {
        (self.numer, self.denom)
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denom == IBig::ONE
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<IBig> {
        if self.is_integer() {
            Some(self.numer.clone())
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.clone().abs(),
            denom: self.denom.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self.numer.cmp(&IBig::ZERO) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numer < IBig::ZERO
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if this rational is
    /// zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        if self.numer == IBig::ZERO {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduced(self.denom.clone(), self.numer.clone()))
    }

    /// Divides by another rational.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `rhs` is a
    /// zero-valued rational.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, RationalError> {
        if rhs.numer == IBig::ZERO {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduced(
            &self.numer * &rhs.denom,
            &self.denom * &rhs.numer,
        ))
    }

    /// Computes self^exp for non-negative exp.
    ///
    /// Canonical form is preserved: coprime parts stay coprime under
    /// powers and the denominator stays positive.
    #[must_use]
    pub fn pow(&self, exp: usize) -> Self {
        Self {
            numer: self.numer.pow(exp),
            denom: self.denom.pow(exp),
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            numer: IBig::ZERO,
            denom: IBig::ONE,
        }
    }

    fn is_zero(&self) -> bool {
        self.numer == IBig::ZERO
    }
}

impl One for Rational {
    fn one() -> Self {
        Self {
            numer: IBig::ONE,
            denom: IBig::ONE,
        }
    }

    fn is_one(&self) -> bool {
        self.numer == IBig::ONE && self.denom == IBig::ONE
    }
}

impl Default for Rational {
    /// The zero rational. A derived default would produce a zero
    /// denominator.
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Parses `"N"` or `"N/D"` where each token is an optional sign
    /// followed by one or more decimal digits. A sign carried on the
    /// denominator token combines with the numerator's (`"1/-2"`
    /// equals `"-1/2"`).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::ParseError`] on malformed input and
    /// [`RationalError::DivisionByZero`] for a zero denominator token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // dashu's from_str_radix reads Rust-literal underscores, which
        // the plain N/D grammar must not admit.
        let parse = |token: &str| {
            let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(RationalError::ParseError(s.to_owned()));
            }
            IBig::from_str_radix(token, 10).map_err(|_| RationalError::ParseError(s.to_owned()))
        };
        match s.split_once('/') {
            Some((numer, denom)) => Self::new(parse(numer)?, parse(denom)?),
            None => Ok(Self::from_integer(parse(s)?)),
        }
    }
}

impl Ord for Rational {
    /// Orders by numeric value via cross multiplication, which is
    /// exact at any magnitude. Both denominators are positive in
    /// canonical form, so the cross products compare directly.
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Arithmetic operations
impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::reduced(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        &self + rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::reduced(
            &self.numer * &rhs.denom - &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        &self - rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::reduced(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        &self * rhs
    }
}

impl Div for &Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics if `rhs` is a zero-valued rational; use
    /// [`Rational::checked_div`] for a fallible division.
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs)
            .expect("division by zero-valued rational")
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div<&Rational> for Rational {
    type Output = Self;

    fn div(self, rhs: &Rational) -> Self::Output {
        &self / rhs
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numer: -self.numer.clone(),
            denom: self.denom.clone(),
        }
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl From<IBig> for Rational {
    fn from(n: IBig) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(IBig::from(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(IBig::from(n))
    }
}
