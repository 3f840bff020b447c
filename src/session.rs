//! One game: feedback bookkeeping, recompute scheduling, end-of-game
//! learning.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use rand::rngs::SmallRng;

use crate::board::{CellState, KnownBoard};
use crate::common::{EngineError, Feedback};
use crate::config::DEFAULT_LEARNING_RATE;
use crate::coord::Coord;
use crate::fleet::Fleet;
use crate::patterns::{PatternMemory, PatternStore};
use crate::probability::{calc_probability_map, ProbabilityMap};
use crate::selector::{ProbabilityStrategy, TargetStrategy};

/// Lifecycle of a session. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Finished,
}

/// Orchestrates a single game against one opponent board.
///
/// Owns the knowledge grid, fleet bookkeeping, and move log exclusively.
/// The pattern store is injected at construction and written exactly once,
/// when the last ship goes down.
pub struct GameSession {
    board: KnownBoard,
    fleet: Fleet,
    move_log: Vec<(String, Feedback)>,
    patterns: PatternMemory,
    store: Box<dyn PatternStore>,
    strategy: Box<dyn TargetStrategy>,
    learning_rate: f64,
    prob: ProbabilityMap,
    state: SessionState,
}

impl GameSession {
    /// Start a session over a `size`x`size` board with the standard fleet
    /// and the probability-map strategy. The store is read once here: an
    /// absent store degrades to an empty memory, an unreadable one is a
    /// real error.
    pub fn new(size: usize, store: Box<dyn PatternStore>) -> Result<Self, EngineError> {
        Self::with_strategy(size, store, Box::new(ProbabilityStrategy))
    }

    pub fn with_strategy(
        size: usize,
        store: Box<dyn PatternStore>,
        strategy: Box<dyn TargetStrategy>,
    ) -> Result<Self, EngineError> {
        let patterns = store.load()?.unwrap_or_default();
        let board = KnownBoard::new(size);
        let fleet = Fleet::standard();
        let prob = calc_probability_map(&board, fleet.lengths(), &patterns, DEFAULT_LEARNING_RATE);
        Ok(Self {
            board,
            fleet,
            move_log: Vec::new(),
            patterns,
            store,
            strategy,
            learning_rate: DEFAULT_LEARNING_RATE,
            prob,
            state: SessionState::Active,
        })
    }

    pub fn set_learning_rate(&mut self, rate: f64) {
        self.learning_rate = rate;
        if self.state == SessionState::Active {
            self.recompute();
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn board(&self) -> &KnownBoard {
        &self.board
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn probability_map(&self) -> &ProbabilityMap {
        &self.prob
    }

    pub fn move_log(&self) -> &[(String, Feedback)] {
        &self.move_log
    }

    pub fn patterns(&self) -> &PatternMemory {
        &self.patterns
    }

    /// Apply one opponent-reported result.
    ///
    /// The board mutation is validated before any bookkeeping, so a bad
    /// coordinate or conflicting mark leaves the session untouched. A
    /// last-ship-sunk feedback runs the learning step, flushes the store,
    /// and finishes the session; every other feedback triggers a recompute.
    pub fn apply_feedback(&mut self, coord: Coord, feedback: Feedback) -> Result<(), EngineError> {
        if self.state == SessionState::Finished {
            return Err(EngineError::SessionFinished);
        }
        let mark = if feedback.is_hit() {
            CellState::Hit
        } else {
            CellState::Miss
        };
        self.board.mark(coord, mark)?;
        self.move_log.push((coord.to_label(), feedback));
        self.strategy.observe(coord, feedback);
        if feedback.is_sunk() {
            self.fleet.record_sunk();
        }
        if feedback == Feedback::LastShipSunk {
            self.finish()
        } else {
            self.recompute();
            Ok(())
        }
    }

    /// Ask the strategy for the next shot.
    pub fn next_target(&mut self, rng: &mut SmallRng) -> Result<Coord, EngineError> {
        if self.state == SessionState::Finished {
            return Err(EngineError::SessionFinished);
        }
        self.strategy.pick(rng, &self.prob, &self.board)
    }

    fn recompute(&mut self) {
        self.prob = calc_probability_map(
            &self.board,
            self.fleet.lengths(),
            &self.patterns,
            self.learning_rate,
        );
    }

    /// End-of-game learning: fold the move log into the pattern memory,
    /// clear the log, flush the store. Runs exactly once.
    fn finish(&mut self) -> Result<(), EngineError> {
        self.state = SessionState::Finished;
        self.patterns.learn(&self.move_log, self.learning_rate);
        self.move_log.clear();
        self.store.save(&self.patterns)?;
        Ok(())
    }
}
