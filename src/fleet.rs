//! Remaining enemy fleet as a bare multiset of ship lengths.

use alloc::vec::Vec;

use crate::config::FLEET_LENGTHS;

/// Ordered multiset of ship lengths still afloat.
///
/// A sunk notification carries no information about which length went down,
/// so [`Fleet::record_sunk`] removes the last entry. That is a heuristic
/// guess, not an inference; replacing it would require per-ship identity
/// tracking that the feedback stream cannot support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    lengths: Vec<usize>,
}

impl Fleet {
    /// The standard five-ship fleet.
    pub fn standard() -> Self {
        Self {
            lengths: FLEET_LENGTHS.to_vec(),
        }
    }

    pub fn new(lengths: &[usize]) -> Self {
        Self {
            lengths: lengths.to_vec(),
        }
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Drop one ship after a sunk notification, returning its length.
    pub fn record_sunk(&mut self) -> Option<usize> {
        self.lengths.pop()
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::standard()
    }
}
