//! Deferred computer turns.
//!
//! The computer's move is held back by a randomized "thinking" delay. The
//! event loop hands this module an owned board snapshot and keeps ignoring
//! board input until the chosen cell comes back over the channel, so the
//! live session is never touched from two places. Once scheduled a move
//! always completes; there is no cancellation path.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tracing::{debug, error, instrument};

use crate::game::{Board, Brain, Mark};

/// Events delivered from a scheduled computer turn back to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The brain finished thinking and chose a cell.
    ComputerMove(usize),
}

/// Schedules the computer's next move: sleep for `think_time`, run the
/// brain against the snapshot, and deliver the choice.
///
/// The seed keeps the spawned task deterministic under a seeded session
/// without sharing an RNG across tasks.
#[instrument(skip(board, event_tx))]
pub fn schedule_move(
    board: Board,
    mark: Mark,
    think_time: Duration,
    seed: u64,
    event_tx: mpsc::UnboundedSender<GameEvent>,
) {
    tokio::spawn(async move {
        debug!(?think_time, "computer thinking");
        tokio::time::sleep(think_time).await;

        let mut rng = StdRng::seed_from_u64(seed);
        match Brain::new(&board, mark).choose(&mut rng) {
            Some(index) => {
                debug!(index, "computer chose");
                let _ = event_tx.send(GameEvent::ComputerMove(index));
            }
            // The loop never schedules a turn on a full board.
            None => error!("brain invoked with no open cells"),
        }
    });
}
