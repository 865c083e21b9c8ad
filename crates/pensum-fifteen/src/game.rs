//! The common interface of the board games in this collection.

use crate::board::Direction;

/// A grid game driven by directional moves.
///
/// Rows and columns are 1-based, like everything in [`crate::board`].
pub trait Game {
    /// Puts the board into its starting position.
    fn initialize(&mut self);

    /// True while the player may keep moving.
    fn can_move(&self) -> bool;

    /// True once the winning position has been reached.
    fn has_won(&self) -> bool;

    /// Applies one move in the given direction. Moves that are not
    /// possible in the current position leave the board unchanged.
    fn process_move(&mut self, direction: Direction);

    /// The value shown at `(row, col)`, or `None` for an empty cell.
    fn get(&self, row: usize, col: usize) -> Option<u8>;
}
