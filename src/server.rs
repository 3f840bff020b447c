#![cfg(feature = "std")]
//! Session loop over a line transport.

use log::{info, warn};
use rand::rngs::SmallRng;

use crate::common::EngineError;
use crate::protocol::{parse_line, Request};
use crate::session::{GameSession, SessionState};
use crate::transport::LineTransport;

/// Drive one game over `transport` until the peer disconnects, the game
/// ends, or the board is exhausted.
///
/// Protocol errors answer with a one-line diagnostic and close the
/// connection gracefully; they never tear down engine state. A store
/// failure during the end-of-game flush is the one condition reported as a
/// hard error to the caller.
pub async fn serve_session<T: LineTransport + ?Sized>(
    session: &mut GameSession,
    transport: &mut T,
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    loop {
        let Some(line) = transport.recv_line().await? else {
            info!("peer disconnected");
            return Ok(());
        };
        let request = match parse_line(&line, session.board().size()) {
            Ok(request) => request,
            Err(e) => {
                warn!("malformed line {:?}: {}", line.trim_end(), e);
                transport.send_line(&format!("error: {}", e)).await?;
                return Ok(());
            }
        };

        if let Request::Result { feedback, coord } = request {
            info!("feedback {} at {}", feedback.as_str(), coord);
            match session.apply_feedback(coord, feedback) {
                Ok(()) => {}
                Err(EngineError::Store(e)) => return Err(anyhow::anyhow!(e)),
                Err(e) => {
                    warn!("rejected feedback: {}", e);
                    transport.send_line(&format!("error: {}", e)).await?;
                    return Ok(());
                }
            }
        }

        if session.state() == SessionState::Finished {
            info!("game over, patterns persisted");
            return Ok(());
        }

        match session.next_target(rng) {
            Ok(coord) => {
                let label = coord.to_label();
                info!("target {}", label);
                transport.send_line(&label).await?;
            }
            Err(EngineError::NoValidMoves) => {
                info!("board exhausted, closing");
                return Ok(());
            }
            Err(e) => return Err(anyhow::anyhow!(e)),
        }
    }
}
