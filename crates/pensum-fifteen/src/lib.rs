//! # pensum-fifteen
//!
//! The Game of Fifteen: a 4×4 sliding-tile puzzle played on a square
//! board abstraction, plus the permutation-parity check that decides
//! whether a starting arrangement is solvable at all.
//!
//! The crate splits into:
//!
//! - [`board`]: 1-based square boards and a generic game board holding
//!   an optional value per cell;
//! - [`game`]: the [`game::Game`] trait every game implements;
//! - [`parity`]: [`parity::is_even`], permutation parity by inversion
//!   count;
//! - [`fifteen`]: the puzzle itself and its initializers.
//!
//! ```rust
//! use pensum_fifteen::fifteen::{GameOfFifteen, GameOfFifteenInitializer};
//! use pensum_fifteen::game::Game;
//!
//! struct Solved;
//!
//! impl GameOfFifteenInitializer for Solved {
//!     fn initial_permutation(&self) -> &[u8] {
//!         const TILES: [u8; 15] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
//!         &TILES
//!     }
//! }
//!
//! let mut game = GameOfFifteen::new(Solved);
//! game.initialize();
//! assert!(game.has_won());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod fifteen;
pub mod game;
pub mod parity;

#[cfg(test)]
mod proptests;

pub use board::{Cell, Direction, GameBoard, SquareBoard};
pub use fifteen::{GameOfFifteen, GameOfFifteenInitializer, RandomInitializer, new_game_of_fifteen};
pub use game::Game;
pub use parity::is_even;
