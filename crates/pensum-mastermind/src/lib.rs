//! # pensum-mastermind
//!
//! Scoring for the Mastermind code-breaking game.
//!
//! A guess is compared against the secret code letter by letter:
//! letters matching at the same position score as *right position*;
//! of the remaining letters, each one that also occurs somewhere in
//! the remainder of the other code scores as *wrong position*, with
//! every letter occurrence counted at most once.
//!
//! ## Example
//!
//! ```rust
//! use pensum_mastermind::{evaluate_guess, Evaluation};
//!
//! let score = evaluate_guess("BCDF", "ACEB").unwrap();
//! assert_eq!(score, Evaluation { right_position: 1, wrong_position: 1 });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

#[cfg(test)]
mod proptests;

/// Errors that can occur while scoring a guess.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EvaluateError {
    /// The guess does not have the same number of letters as the
    /// secret.
    #[error("secret has {secret} letters but guess has {guess}")]
    LengthMismatch {
        /// Letter count of the secret code.
        secret: usize,
        /// Letter count of the guess.
        guess: usize,
    },
}

/// The score of a single guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Evaluation {
    /// Letters matching the secret at the same position.
    pub right_position: usize,
    /// Remaining letters present in the secret at another position.
    pub wrong_position: usize,
}

impl Evaluation {
    /// Returns true if the guess matched the whole secret.
    #[must_use]
    pub fn is_win(&self, code_length: usize) -> bool {
        self.right_position == code_length
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} right, {} wrong",
            self.right_position, self.wrong_position
        )
    }
}

/// Scores `guess` against `secret`.
///
/// Positional matches are consumed first; every remaining letter of
/// the guess then matches at most one remaining occurrence of the same
/// letter in the secret, so the wrong-position count is the multiset
/// intersection of the leftovers.
///
/// # Errors
///
/// Returns [`EvaluateError::LengthMismatch`] if the two codes differ
/// in length.
pub fn evaluate_guess(secret: &str, guess: &str) -> Result<Evaluation, EvaluateError> {
    let secret: Vec<char> = secret.chars().collect();
    let guess: Vec<char> = guess.chars().collect();
    if secret.len() != guess.len() {
        return Err(EvaluateError::LengthMismatch {
            secret: secret.len(),
            guess: guess.len(),
        });
    }

    let right_position = secret.iter().zip(&guess).filter(|(s, g)| s == g).count();

    let mut leftovers: FxHashMap<char, usize> = FxHashMap::default();
    for (s, g) in secret.iter().zip(&guess) {
        if s != g {
            *leftovers.entry(*s).or_insert(0) += 1;
        }
    }

    let mut wrong_position = 0;
    for (s, g) in secret.iter().zip(&guess) {
        if s == g {
            continue;
        }
        if let Some(count) = leftovers.get_mut(g) {
            if *count > 0 {
                *count -= 1;
                wrong_position += 1;
            }
        }
    }

    Ok(Evaluation {
        right_position,
        wrong_position,
    })
}
