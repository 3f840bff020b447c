#![cfg(feature = "std")]
//! Console rendering for demo games.

use crate::board::{CellState, KnownBoard};
use crate::coord::Coord;
use crate::probability::ProbabilityMap;

/// Print the knowledge grid: `.` unknown, `o` miss, `x` hit.
pub fn print_known_board(board: &KnownBoard) {
    print!("   ");
    for c in 0..board.size() {
        print!(" {}", (b'A' + c as u8) as char);
    }
    println!();
    for r in 0..board.size() {
        print!("{:2} ", r + 1);
        for c in 0..board.size() {
            let ch = match board.state(Coord::new(r, c)) {
                Some(CellState::Miss) => 'o',
                Some(CellState::Hit) => 'x',
                _ => '.',
            };
            print!(" {}", ch);
        }
        println!();
    }
}

/// Print the normalized probability distribution.
pub fn print_probability_board(map: &ProbabilityMap) {
    println!("\nProbability distribution:");
    print!("   ");
    for c in 0..map.size() {
        print!(" {:>4}", (b'A' + c as u8) as char);
    }
    println!();
    for r in 0..map.size() {
        print!("{:2} ", r + 1);
        for c in 0..map.size() {
            print!(" {:4.2}", map.get(Coord::new(r, c)));
        }
        println!();
    }
}
