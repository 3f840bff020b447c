//! Contract for the external reinforcement-learning collaborator.
//!
//! The sub-agent itself lives outside this crate; the engine only ever
//! hands it a board snapshot and feeds rewards back.

use crate::board::KnownBoard;

/// Two-method contract implemented by the reinforcement-learning sub-agent.
pub trait Agent {
    /// Choose the next action given the current knowledge grid.
    fn choose_action(&mut self, snapshot: &KnownBoard) -> (usize, usize);

    /// Update internal weights after acting at (row, col).
    fn update(&mut self, row: usize, col: usize, reward: f64);
}

/// Reward granted for a raw result label. Unrecognized labels earn nothing.
pub fn reward_for(result: &str) -> f64 {
    match result {
        "miss" => -1.0,
        "hit" => 1.0,
        "hit and sunk" => 2.0,
        "last ship sunk" => 5.0,
        _ => 0.0,
    }
}
