//! Per-cell knowledge grid for the unseen opponent board.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::EngineError;
use crate::config::MAX_BOARD_SIZE;
use crate::coord::Coord;

/// What is known about a single cell. Sunk ships are tracked at the fleet
/// level, never per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Unknown,
    Miss,
    Hit,
}

/// Knowledge grid of side `size`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownBoard {
    size: usize,
    cells: Vec<CellState>,
}

impl KnownBoard {
    /// Panics if `size` is zero or exceeds [`MAX_BOARD_SIZE`]: coordinate
    /// labels address columns with a single letter.
    pub fn new(size: usize) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&size),
            "board size must be between 1 and {}",
            MAX_BOARD_SIZE
        );
        Self {
            size,
            cells: vec![CellState::Unknown; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// State at `coord`, or `None` when out of bounds.
    pub fn state(&self, coord: Coord) -> Option<CellState> {
        if self.in_bounds(coord) {
            Some(self.cells[coord.row * self.size + coord.col])
        } else {
            None
        }
    }

    /// Record a shot result. `Unknown -> Miss/Hit` and reapplying the same
    /// state are the only accepted transitions; anything else is rejected
    /// before the grid is touched.
    pub fn mark(&mut self, coord: Coord, state: CellState) -> Result<(), EngineError> {
        if state == CellState::Unknown {
            return Err(EngineError::ConflictingMark);
        }
        if !self.in_bounds(coord) {
            return Err(EngineError::OutOfBounds);
        }
        let idx = coord.row * self.size + coord.col;
        match self.cells[idx] {
            CellState::Unknown => {
                self.cells[idx] = state;
                Ok(())
            }
            current if current == state => Ok(()),
            _ => Err(EngineError::ConflictingMark),
        }
    }

    pub fn is_unknown(&self, coord: Coord) -> bool {
        self.state(coord) == Some(CellState::Unknown)
    }

    /// Lazy row-major iterator over all Unknown cells. Restartable: each
    /// call yields a fresh pass over the grid.
    pub fn unknown_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == CellState::Unknown)
            .map(move |(i, _)| Coord::new(i / size, i % size))
    }

    pub fn unknown_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|s| **s == CellState::Unknown)
            .count()
    }
}
