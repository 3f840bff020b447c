use std::sync::{Arc, Mutex};

use harpoon::protocol::{parse_line, Request};
use harpoon::{
    CellState, Coord, EngineError, Feedback, GameSession, MemoryPatternStore, PatternMemory,
    PatternStore, SessionState, StoreError,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Store whose contents stay visible to the test after the session takes
/// ownership of its handle.
#[derive(Clone, Default)]
struct SharedStore(Arc<Mutex<Option<PatternMemory>>>);

impl PatternStore for SharedStore {
    fn load(&self) -> Result<Option<PatternMemory>, StoreError> {
        Ok(self.0.lock().unwrap().clone())
    }

    fn save(&mut self, patterns: &PatternMemory) -> Result<(), StoreError> {
        *self.0.lock().unwrap() = Some(patterns.clone());
        Ok(())
    }
}

fn apply_wire(session: &mut GameSession, line: &str) {
    match parse_line(line, session.board().size()).unwrap() {
        Request::Result { feedback, coord } => session.apply_feedback(coord, feedback).unwrap(),
        Request::Prompt => {}
    }
}

#[test]
fn miss_collapses_cell_and_redirects_targeting() {
    let mut session = GameSession::new(10, Box::new(MemoryPatternStore::new())).unwrap();
    apply_wire(&mut session, "miss;A1");

    let a1 = Coord::new(0, 0);
    assert_eq!(session.board().state(a1), Some(CellState::Miss));
    assert_eq!(session.probability_map().get(a1), 0.0);

    let mut rng = SmallRng::seed_from_u64(0);
    let next = session.next_target(&mut rng).unwrap();
    assert_ne!(next.to_label(), "A1");
}

#[test]
fn sunk_feedback_pops_exactly_one_ship() {
    let mut session = GameSession::new(10, Box::new(MemoryPatternStore::new())).unwrap();
    let before = session.fleet().len();

    apply_wire(&mut session, "hit;E5");
    assert_eq!(session.fleet().len(), before);

    apply_wire(&mut session, "hit and sunk;E5");
    assert_eq!(session.fleet().len(), before - 1);

    assert_eq!(
        session.move_log(),
        &[
            (String::from("E5"), Feedback::Hit),
            (String::from("E5"), Feedback::HitAndSunk),
        ]
    );
}

#[test]
fn repeated_hit_mark_is_idempotent() {
    // "hit" then "hit and sunk" on the same cell reapplies Hit; that must
    // not be treated as a conflict.
    let mut session = GameSession::new(10, Box::new(MemoryPatternStore::new())).unwrap();
    apply_wire(&mut session, "hit;E5");
    apply_wire(&mut session, "hit and sunk;E5");
    assert_eq!(
        session.board().state(Coord::new(4, 4)),
        Some(CellState::Hit)
    );
}

#[test]
fn last_ship_sunk_learns_persists_and_finishes() {
    let store = SharedStore::default();
    let mut session = GameSession::new(10, Box::new(store.clone())).unwrap();

    apply_wire(&mut session, "miss;A1");
    apply_wire(&mut session, "hit;E5");
    apply_wire(&mut session, "hit and sunk;E6");
    apply_wire(&mut session, "miss;B2");
    apply_wire(&mut session, "last ship sunk;J10");

    assert_eq!(session.state(), SessionState::Finished);
    assert!(session.move_log().is_empty());

    let persisted = store.0.lock().unwrap().clone().expect("patterns persisted");
    assert!((persisted.score("A1").unwrap() + 0.05).abs() < 1e-12);
    assert!((persisted.score("E5").unwrap() - 0.1).abs() < 1e-12);
    assert!((persisted.score("E6").unwrap() - 0.1).abs() < 1e-12);
    assert!((persisted.score("B2").unwrap() + 0.05).abs() < 1e-12);
    // The winning shot reads "last ship sunk", which scores down like a miss.
    assert!((persisted.score("J10").unwrap() + 0.05).abs() < 1e-12);

    // Terminal: further feedback and targeting are rejected.
    assert_eq!(
        session.apply_feedback(Coord::new(2, 2), Feedback::Miss),
        Err(EngineError::SessionFinished)
    );
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        session.next_target(&mut rng),
        Err(EngineError::SessionFinished)
    );
}

#[test]
fn new_session_reloads_learned_patterns() {
    let store = SharedStore::default();
    {
        let mut session = GameSession::new(10, Box::new(store.clone())).unwrap();
        apply_wire(&mut session, "hit;E5");
        apply_wire(&mut session, "last ship sunk;E6");
    }

    let session = GameSession::new(10, Box::new(store)).unwrap();
    assert!(session.patterns().score("E5").unwrap() > 0.0);
}

#[test]
fn conflicting_feedback_leaves_session_intact() {
    let mut session = GameSession::new(10, Box::new(MemoryPatternStore::new())).unwrap();
    apply_wire(&mut session, "miss;A1");

    let err = session
        .apply_feedback(Coord::new(0, 0), Feedback::Hit)
        .unwrap_err();
    assert_eq!(err, EngineError::ConflictingMark);

    // The rejected feedback must not have been logged.
    assert_eq!(session.move_log().len(), 1);
    assert_eq!(session.board().state(Coord::new(0, 0)), Some(CellState::Miss));
}
