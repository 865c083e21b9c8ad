//! The Game of Fifteen itself: a 4×4 board holding tiles `1..=15` and
//! one blank cell, solved by sliding tiles until they read in order.

use std::fmt;
use std::iter;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Cell, Direction, GameBoard};
use crate::game::Game;
use crate::parity::is_even;

/// Side length of the board.
const WIDTH: usize = 4;
/// Highest tile value; the sixteenth cell stays blank.
const TILES: u8 = 15;

/// Supplies the starting arrangement of tiles, row-major with the
/// blank cell last.
///
/// The permutation must be even, otherwise the solved position is
/// unreachable (see [`is_even`]).
pub trait GameOfFifteenInitializer {
    /// The starting permutation of `1..=15`.
    fn initial_permutation(&self) -> &[u8];
}

/// Draws a random, always solvable starting permutation of `1..=15`.
pub struct RandomInitializer {
    permutation: Vec<u8>,
}

impl RandomInitializer {
    /// Shuffles with a fresh thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }

    /// Shuffles with the given generator, so a seeded generator yields
    /// a reproducible board.
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut permutation: Vec<u8> = (1..=TILES).collect();
        permutation.shuffle(rng);
        // Swapping one adjacent pair flips the parity, turning an
        // unsolvable draw into a solvable one.
        if !is_even(&permutation) {
            permutation.swap(0, 1);
        }
        Self { permutation }
    }
}

impl Default for RandomInitializer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameOfFifteenInitializer for RandomInitializer {
    fn initial_permutation(&self) -> &[u8] {
        &self.permutation
    }
}

/// The classic 15-puzzle.
///
/// A move names the direction a tile slides: moving [`Direction::Up`]
/// slides the tile below the blank upwards into it. Moves whose source
/// cell would lie off the board leave the position unchanged.
pub struct GameOfFifteen<I> {
    initializer: I,
    board: GameBoard<u8>,
}

impl<I> GameOfFifteen<I> {
    /// Creates a game; call [`Game::initialize`] before playing.
    #[must_use]
    pub fn new(initializer: I) -> Self {
        Self {
            initializer,
            board: GameBoard::new(WIDTH),
        }
    }

    fn blank(&self) -> Option<Cell> {
        self.board.find(|value| value.is_none())
    }
}

impl<I: GameOfFifteenInitializer> Game for GameOfFifteen<I> {
    fn initialize(&mut self) {
        let mut values = self.initializer.initial_permutation().iter().copied();
        let cells: Vec<Cell> = self.board.cells().collect();
        for cell in cells {
            self.board.set(cell, values.next());
        }
    }

    fn can_move(&self) -> bool {
        true
    }

    fn has_won(&self) -> bool {
        self.board
            .cells()
            .map(|cell| self.board.get(cell).copied())
            .eq((1..=TILES).map(Some).chain(iter::once(None)))
    }

    fn process_move(&mut self, direction: Direction) {
        let blank = match self.blank() {
            Some(cell) => cell,
            None => return,
        };
        if let Some(tile) = self.board.neighbour(blank, direction.reversed()) {
            let value = self.board.get(tile).copied();
            self.board.set(blank, value);
            self.board.set(tile, None);
        }
    }

    fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.board
            .cell(row, col)
            .and_then(|cell| self.board.get(cell).copied())
    }
}

impl<I> fmt::Display for GameOfFifteen<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=WIDTH {
            for col in 1..=WIDTH {
                if col > 1 {
                    f.write_str(" ")?;
                }
                let value = self
                    .board
                    .cell(row, col)
                    .and_then(|cell| self.board.get(cell));
                match value {
                    Some(tile) => write!(f, "{tile:>2}")?,
                    None => f.write_str(" .")?,
                }
            }
            if row < WIDTH {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

/// Creates a game with a random solvable start.
#[must_use]
pub fn new_game_of_fifteen() -> GameOfFifteen<RandomInitializer> {
    GameOfFifteen::new(RandomInitializer::new())
}
