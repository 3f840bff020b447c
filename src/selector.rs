//! Target selection over the probability map.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::KnownBoard;
use crate::common::{EngineError, Feedback};
use crate::coord::Coord;
use crate::probability::ProbabilityMap;

/// Pick the next target from `map`. The highest weight wins, ties resolved
/// by lowest row then lowest column; a degenerate map falls back to a
/// uniform choice over the remaining Unknown cells.
pub fn select_target<R: Rng + ?Sized>(
    map: &ProbabilityMap,
    board: &KnownBoard,
    rng: &mut R,
) -> Result<Coord, EngineError> {
    let mut best: Option<Coord> = None;
    let mut best_weight = 0.0;
    for (coord, weight) in map.iter() {
        if weight > best_weight {
            best_weight = weight;
            best = Some(coord);
        }
    }
    match best {
        Some(coord) => Ok(coord),
        None => uniform_unknown(board, rng),
    }
}

/// Uniform choice over Unknown cells, or `NoValidMoves` once none remain.
fn uniform_unknown<R: Rng + ?Sized>(
    board: &KnownBoard,
    rng: &mut R,
) -> Result<Coord, EngineError> {
    let remaining = board.unknown_count();
    if remaining == 0 {
        return Err(EngineError::NoValidMoves);
    }
    let pick = rng.random_range(0..remaining);
    board
        .unknown_cells()
        .nth(pick)
        .ok_or(EngineError::NoValidMoves)
}

/// Strategy seam for choosing targets. The probability-map strategy is the
/// default; the neighbor probe reproduces the simpler hunt heuristic and is
/// kept as an independent variant rather than merged into the map.
pub trait TargetStrategy: Send {
    /// Observe the result of the previous shot.
    fn observe(&mut self, _coord: Coord, _feedback: Feedback) {}

    /// Choose the next target.
    fn pick(
        &mut self,
        rng: &mut SmallRng,
        map: &ProbabilityMap,
        board: &KnownBoard,
    ) -> Result<Coord, EngineError>;
}

/// Default strategy: argmax over the blended probability map.
#[derive(Debug, Default)]
pub struct ProbabilityStrategy;

impl TargetStrategy for ProbabilityStrategy {
    fn pick(
        &mut self,
        rng: &mut SmallRng,
        map: &ProbabilityMap,
        board: &KnownBoard,
    ) -> Result<Coord, EngineError> {
        select_target(map, board, rng)
    }
}

/// After a hit, probe the four orthogonal neighbors (east, south, west,
/// north, in that order) before falling back to a uniform random cell.
/// Ignores the probability map entirely.
#[derive(Debug, Default)]
pub struct NeighborProbeStrategy {
    last_hit: Option<Coord>,
}

impl NeighborProbeStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TargetStrategy for NeighborProbeStrategy {
    fn observe(&mut self, coord: Coord, feedback: Feedback) {
        // A sunk ship ends the probe; only a plain hit keeps it anchored.
        self.last_hit = match feedback {
            Feedback::Hit => Some(coord),
            _ => None,
        };
    }

    fn pick(
        &mut self,
        rng: &mut SmallRng,
        _map: &ProbabilityMap,
        board: &KnownBoard,
    ) -> Result<Coord, EngineError> {
        if let Some(hit) = self.last_hit {
            const PROBES: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
            for (dr, dc) in PROBES {
                let r = hit.row as isize + dr;
                let c = hit.col as isize + dc;
                if r < 0 || c < 0 {
                    continue;
                }
                let coord = Coord::new(r as usize, c as usize);
                if board.is_unknown(coord) {
                    return Ok(coord);
                }
            }
        }
        uniform_unknown(board, rng)
    }
}
