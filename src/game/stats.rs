//! Running win/loss/tie counters for the process lifetime.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Cumulative game statistics from the human player's perspective.
///
/// Ties are derived rather than stored: games played minus wins and
/// losses. Counters live in memory only and survive board resets for the
/// lifetime of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameStats {
    /// Total finished games.
    games_played: u32,
    /// Games the human won.
    wins: u32,
    /// Games the human lost.
    losses: u32,
}

impl GameStats {
    /// Creates zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished game the human won.
    #[instrument(skip(self))]
    pub fn record_win(&mut self) {
        self.games_played += 1;
        self.wins += 1;
    }

    /// Records a finished game the human lost.
    #[instrument(skip(self))]
    pub fn record_loss(&mut self) {
        self.games_played += 1;
        self.losses += 1;
    }

    /// Records a tied game.
    #[instrument(skip(self))]
    pub fn record_tie(&mut self) {
        self.games_played += 1;
    }

    /// Tied games: everything played that was neither won nor lost.
    pub fn ties(&self) -> u32 {
        self.games_played - self.wins - self.losses
    }

    /// Win rate as a percentage of non-tied games, 0 when none have been
    /// decided yet.
    pub fn win_rate(&self) -> f64 {
        let decided = self.games_played - self.ties();
        if decided == 0 {
            0.0
        } else {
            (self.wins as f64 / decided as f64) * 100.0
        }
    }

    /// The win rate formatted for display, e.g. `"85.7%"`.
    pub fn formatted_win_rate(&self) -> String {
        format!("{:.1}%", self.win_rate())
    }
}
