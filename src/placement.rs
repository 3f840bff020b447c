//! Placement counting over the knowledge grid.

use alloc::vec;
use alloc::vec::Vec;

use crate::board::{CellState, KnownBoard};
use crate::coord::Coord;

/// Orientation of a candidate placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// For every cell, count the valid placements of the remaining ship lengths
/// that would cover it. A placement is valid when none of its cells is a
/// recorded Miss; Hit cells stay compatible because the segment there may
/// belong to this or another undiscovered ship.
///
/// The counts aggregate every length and orientation into one row-major
/// grid. Mutual exclusivity between overlapping placements of different
/// ships is deliberately not modeled.
pub fn placement_counts(board: &KnownBoard, lengths: &[usize]) -> Vec<u32> {
    let size = board.size();
    let mut counts = vec![0u32; size * size];

    for &len in lengths {
        if len == 0 || len > size {
            continue;
        }
        for orient in [Orientation::Horizontal, Orientation::Vertical] {
            let (max_row, max_col) = match orient {
                Orientation::Horizontal => (size, size - len + 1),
                Orientation::Vertical => (size - len + 1, size),
            };
            for r in 0..max_row {
                for c in 0..max_col {
                    if placement_blocked(board, r, c, len, orient) {
                        continue;
                    }
                    for k in 0..len {
                        let (rr, cc) = cell_at(r, c, k, orient);
                        counts[rr * size + cc] += 1;
                    }
                }
            }
        }
    }
    counts
}

fn cell_at(r: usize, c: usize, k: usize, orient: Orientation) -> (usize, usize) {
    match orient {
        Orientation::Horizontal => (r, c + k),
        Orientation::Vertical => (r + k, c),
    }
}

fn placement_blocked(board: &KnownBoard, r: usize, c: usize, len: usize, orient: Orientation) -> bool {
    (0..len).any(|k| {
        let (rr, cc) = cell_at(r, c, k, orient);
        board.state(Coord::new(rr, cc)) == Some(CellState::Miss)
    })
}
