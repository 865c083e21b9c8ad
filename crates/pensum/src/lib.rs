//! # Pensum
//!
//! A collection of small, self-contained programming exercises, each
//! one a pure function or value type over in-memory data.
//!
//! ## Exercises
//!
//! - **Rational arithmetic**: exact fractions over arbitrary-precision
//!   integers, always reduced, with parsing and range membership
//! - **Mastermind**: scoring a guess against a secret code
//! - **Nice strings**: a three-property string classifier
//! - **Taxi park**: collection queries over a taxi-trip dataset
//! - **Game of Fifteen**: the 4×4 sliding puzzle and its
//!   permutation-parity solvability check
//!
//! ## Quick Start
//!
//! ```rust
//! use pensum::prelude::*;
//!
//! let half: Rational = "1/2".parse()?;
//! let third: Rational = "1/3".parse()?;
//! assert_eq!((&half + &third).to_string(), "5/6");
//! # Ok::<(), RationalError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use pensum_fifteen as fifteen;
pub use pensum_mastermind as mastermind;
pub use pensum_nicestring as nicestring;
pub use pensum_rational as rational;
pub use pensum_taxipark as taxipark;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use pensum_fifteen::{
        Cell, Direction, Game, GameBoard, GameOfFifteen, GameOfFifteenInitializer,
        RandomInitializer, SquareBoard, is_even, new_game_of_fifteen,
    };
    pub use pensum_mastermind::{EvaluateError, Evaluation, evaluate_guess};
    pub use pensum_nicestring::is_nice;
    pub use pensum_rational::{Rational, RationalError, RationalRange};
    pub use pensum_taxipark::{Driver, Passenger, TaxiPark, Trip};
}
