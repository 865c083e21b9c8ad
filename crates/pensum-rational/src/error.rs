//! Errors reported by rational construction, parsing, and division.

use thiserror::Error;

/// Errors that can occur when building or dividing rationals.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RationalError {
    /// A zero denominator was supplied at construction, or a division by a
    /// zero-valued rational was attempted.
    #[error("division by zero")]
    DivisionByZero,

    /// Input text does not match the `N` or `N/D` grammar.
    #[error("invalid rational literal `{0}`")]
    ParseError(String),
}
