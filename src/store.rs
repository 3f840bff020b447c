#![cfg(feature = "std")]
//! File-backed pattern store: a single bincode blob on disk.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::StoreError;
use crate::patterns::{PatternMemory, PatternStore};

/// On-disk form of the score table.
#[derive(Serialize, Deserialize)]
struct StoredScores {
    scores: BTreeMap<String, f64>,
}

/// Pattern store persisted as one bincode-encoded score map.
///
/// A missing file is not an error; a present but undecodable file is.
pub struct FilePatternStore {
    path: PathBuf,
}

impl FilePatternStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PatternStore for FilePatternStore {
    fn load(&self) -> Result<Option<PatternMemory>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Load(e.to_string())),
        };
        let stored: StoredScores =
            bincode::deserialize(&bytes).map_err(|e| StoreError::Load(e.to_string()))?;
        Ok(Some(PatternMemory::from_scores(stored.scores)))
    }

    fn save(&mut self, patterns: &PatternMemory) -> Result<(), StoreError> {
        let stored = StoredScores {
            scores: patterns.scores().clone(),
        };
        let bytes =
            bincode::serialize(&stored).map_err(|e| StoreError::Save(e.to_string()))?;
        fs::write(&self.path, bytes).map_err(|e| StoreError::Save(e.to_string()))
    }
}
