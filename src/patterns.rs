//! Learned success scores for move labels, persisted across games.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::common::{Feedback, StoreError};

/// Mapping from move label to an unbounded success score. Ordered so that
/// iteration, and therefore probability blending, is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternMemory {
    scores: BTreeMap<String, f64>,
}

impl PatternMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_scores(scores: BTreeMap<String, f64>) -> Self {
        Self { scores }
    }

    pub fn scores(&self) -> &BTreeMap<String, f64> {
        &self.scores
    }

    pub fn score(&self, label: &str) -> Option<f64> {
        self.scores.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Fold one finished game into the score table. A label whose feedback
    /// read `hit` or `hit and sunk` is pushed up by the learning rate;
    /// anything else, the game-winning `last ship sunk` included, is pulled
    /// down at half strength. Entries start at zero.
    pub fn learn(&mut self, move_log: &[(String, Feedback)], learning_rate: f64) {
        for (label, feedback) in move_log {
            let entry = self.scores.entry(label.clone()).or_insert(0.0);
            if matches!(feedback, Feedback::Hit | Feedback::HitAndSunk) {
                *entry += learning_rate;
            } else {
                *entry -= learning_rate * 0.5;
            }
        }
    }
}

/// Persistence seam for [`PatternMemory`].
///
/// `load` distinguishes an absent store (`Ok(None)`, degrades to an empty
/// memory) from an unreadable one (`Err`). `save` is synchronous and its
/// failures must be surfaced, never swallowed. One writer at a time.
pub trait PatternStore: Send {
    fn load(&self) -> Result<Option<PatternMemory>, StoreError>;
    fn save(&mut self, patterns: &PatternMemory) -> Result<(), StoreError>;
}

/// Volatile store for tests and throwaway games.
#[derive(Debug, Default)]
pub struct MemoryPatternStore {
    saved: Option<PatternMemory>,
}

impl MemoryPatternStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patterns(patterns: PatternMemory) -> Self {
        Self {
            saved: Some(patterns),
        }
    }
}

impl PatternStore for MemoryPatternStore {
    fn load(&self) -> Result<Option<PatternMemory>, StoreError> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, patterns: &PatternMemory) -> Result<(), StoreError> {
        self.saved = Some(patterns.clone());
        Ok(())
    }
}
