//! Line-oriented wire protocol: one result in, one target out.

use crate::common::{Feedback, ParseError};
use crate::coord::Coord;

/// One parsed client line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Bare result label with no coordinates: applies no feedback and only
    /// requests a target. This is how the opening shot of a game is asked
    /// for.
    Prompt,
    /// Result of the previous shot at `coord`.
    Result { feedback: Feedback, coord: Coord },
}

/// Parse `"<result>;<coords>"`, where `<coords>` and the `;` may be absent.
pub fn parse_line(line: &str, board_size: usize) -> Result<Request, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::EmptyLine);
    }
    match line.split_once(';') {
        Some((result, coords)) => {
            let feedback = Feedback::parse(result.trim())?;
            let coord = Coord::from_label(coords, board_size)?;
            Ok(Request::Result { feedback, coord })
        }
        None => {
            // Label must still be well-formed even when it carries nothing.
            Feedback::parse(line)?;
            Ok(Request::Prompt)
        }
    }
}
