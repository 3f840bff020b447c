//! Common types: shot feedback labels and engine errors.

use alloc::string::String;

/// Result of a shot as reported by the opponent board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Shot missed all ships.
    Miss,
    /// Shot hit an undepleted ship segment.
    Hit,
    /// Shot hit and completed a ship.
    HitAndSunk,
    /// Shot sank the final ship; the game is over.
    LastShipSunk,
}

impl Feedback {
    /// Parse a wire label. The labels carry spaces, not hyphens.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        match s {
            "miss" => Ok(Feedback::Miss),
            "hit" => Ok(Feedback::Hit),
            "hit and sunk" => Ok(Feedback::HitAndSunk),
            "last ship sunk" => Ok(Feedback::LastShipSunk),
            other => Err(ParseError::BadFeedback(String::from(other))),
        }
    }

    /// Wire label for this feedback.
    pub fn as_str(&self) -> &'static str {
        match self {
            Feedback::Miss => "miss",
            Feedback::Hit => "hit",
            Feedback::HitAndSunk => "hit and sunk",
            Feedback::LastShipSunk => "last ship sunk",
        }
    }

    /// Whether the shot connected with a ship segment.
    pub fn is_hit(&self) -> bool {
        !matches!(self, Feedback::Miss)
    }

    /// Whether this feedback removes a ship from the fleet.
    pub fn is_sunk(&self) -> bool {
        matches!(self, Feedback::HitAndSunk | Feedback::LastShipSunk)
    }
}

/// Errors produced while decoding a protocol line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input line was empty.
    EmptyLine,
    /// Result label is not one of the four known outcomes.
    BadFeedback(String),
    /// Coordinate label is malformed or out of bounds.
    BadCoord(String),
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::EmptyLine => write!(f, "empty input line"),
            ParseError::BadFeedback(s) => write!(f, "unknown result label: {:?}", s),
            ParseError::BadCoord(s) => write!(f, "invalid coordinate label: {:?}", s),
        }
    }
}

/// Errors from the pattern store. An absent store is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Store exists but could not be read or decoded.
    Load(String),
    /// Store could not be written.
    Save(String),
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StoreError::Load(s) => write!(f, "failed to load pattern store: {}", s),
            StoreError::Save(s) => write!(f, "failed to save pattern store: {}", s),
        }
    }
}

/// Errors surfaced by the targeting engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed protocol input.
    Parse(ParseError),
    /// No Unknown cell remains to target; the game must end.
    NoValidMoves,
    /// Coordinates fall outside the board.
    OutOfBounds,
    /// A resolved cell cannot be overwritten with a conflicting state.
    ConflictingMark,
    /// Feedback arrived after the session already finished.
    SessionFinished,
    /// Pattern store failure during load or end-of-game flush.
    Store(StoreError),
}

impl From<ParseError> for EngineError {
    fn from(err: ParseError) -> Self {
        EngineError::Parse(err)
    }
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        EngineError::Store(err)
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::Parse(e) => write!(f, "parse error: {}", e),
            EngineError::NoValidMoves => write!(f, "no valid moves remain"),
            EngineError::OutOfBounds => write!(f, "coordinates are out of bounds"),
            EngineError::ConflictingMark => write!(f, "cell already resolved with a different state"),
            EngineError::SessionFinished => write!(f, "session is finished"),
            EngineError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}
