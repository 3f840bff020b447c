//! Probability map derivation and pattern blending.

use alloc::vec;
use alloc::vec::Vec;

use crate::board::KnownBoard;
use crate::coord::Coord;
use crate::patterns::PatternMemory;
use crate::placement::placement_counts;

/// Normalized belief over the opponent board. After every recompute either
/// every entry is zero (degenerate, no valid move exists) or the entries sum
/// to one within floating tolerance; resolved cells always carry exactly
/// zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityMap {
    size: usize,
    weights: Vec<f64>,
}

impl ProbabilityMap {
    /// All-zero map, the degenerate "no information" state.
    pub fn zero(size: usize) -> Self {
        Self {
            size,
            weights: vec![0.0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight at `coord`, zero when out of bounds.
    pub fn get(&self, coord: Coord) -> f64 {
        if coord.row < self.size && coord.col < self.size {
            self.weights[coord.row * self.size + coord.col]
        } else {
            0.0
        }
    }

    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn is_degenerate(&self) -> bool {
        self.total() == 0.0
    }

    /// Row-major iterator over (coord, weight).
    pub fn iter(&self) -> impl Iterator<Item = (Coord, f64)> + '_ {
        let size = self.size;
        self.weights
            .iter()
            .enumerate()
            .map(move |(i, w)| (Coord::new(i / size, i % size), *w))
    }
}

/// Rebuild the belief map from placement counts and learned patterns.
///
/// Counts are normalized into a distribution, then every pattern label whose
/// cell is still Unknown scales that cell by `1 + score * learning_rate`,
/// floored at zero so a learned failure can never produce negative weight.
/// Resolved cells are re-zeroed after the blend and the map is renormalized;
/// a zero total short-circuits to the degenerate map rather than dividing.
pub fn calc_probability_map(
    board: &KnownBoard,
    lengths: &[usize],
    patterns: &PatternMemory,
    learning_rate: f64,
) -> ProbabilityMap {
    let size = board.size();
    let counts = placement_counts(board, lengths);
    let count_total: u64 = counts.iter().map(|&c| c as u64).sum();
    if count_total == 0 {
        return ProbabilityMap::zero(size);
    }

    let mut weights: Vec<f64> = counts
        .iter()
        .map(|&c| c as f64 / count_total as f64)
        .collect();

    for (label, score) in patterns.iter() {
        let Ok(coord) = Coord::from_label(label, size) else {
            continue;
        };
        if !board.is_unknown(coord) {
            continue;
        }
        let idx = coord.row * size + coord.col;
        weights[idx] = (weights[idx] * (1.0 + score * learning_rate)).max(0.0);
    }

    // The blend must not reintroduce weight on resolved cells.
    for (i, w) in weights.iter_mut().enumerate() {
        if !board.is_unknown(Coord::new(i / size, i % size)) {
            *w = 0.0;
        }
    }

    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return ProbabilityMap::zero(size);
    }
    for w in weights.iter_mut() {
        *w /= total;
    }
    ProbabilityMap { size, weights }
}
