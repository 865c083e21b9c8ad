//! Scripted Game of Fifteen: scramble the solved board with a few
//! moves, then undo them in reverse order.

use pensum::prelude::*;

struct Solved;

impl GameOfFifteenInitializer for Solved {
    fn initial_permutation(&self) -> &[u8] {
        const TILES: [u8; 15] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
        &TILES
    }
}

fn main() {
    let mut game = GameOfFifteen::new(Solved);
    game.initialize();
    println!("start:\n{game}\n");

    let scramble = [
        Direction::Right,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];
    for direction in scramble {
        game.process_move(direction);
    }
    println!("scrambled (won: {}):\n{game}\n", game.has_won());

    for direction in scramble.iter().rev() {
        game.process_move(direction.reversed());
    }
    println!("undone (won: {}):\n{game}", game.has_won());
}
