//! Turn sequencing and terminal-state bookkeeping for a single game.

use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, warn};

use crate::game::{Board, GameResult, GameStats, Mark, PlaceError};

/// The mark the human plays. The human always moves first.
pub const HUMAN_MARK: Mark = Mark::X;
/// The mark the computer plays.
pub const COMPUTER_MARK: Mark = Mark::O;

/// Error returned when a move request violates turn or placement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// The game has already reached a terminal state.
    #[display("the game is already over")]
    GameOver,
    /// The requesting side is not the one to move.
    #[display("it is not {mark}'s turn")]
    OutOfTurn {
        /// The mark that tried to move.
        mark: Mark,
    },
    /// The board rejected the placement.
    #[display("{_0}")]
    #[from]
    Rejected(PlaceError),
}

/// One human-versus-computer game plus the running statistics.
///
/// The session owns the board, tracks whose turn it is, detects terminal
/// states, and records each finished game into [`GameStats`] exactly once.
/// Resetting rebuilds the board and its lines wholesale while the counters
/// carry over.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    humans_turn: bool,
    result: Option<GameResult>,
    stats: GameStats,
}

impl GameSession {
    /// Starts a fresh session with zeroed statistics.
    #[instrument]
    pub fn new() -> Self {
        info!("starting new session");
        Self {
            board: Board::new(),
            humans_turn: true,
            result: None,
            stats: GameStats::new(),
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The terminal result, or `None` while the game is in progress.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// The cumulative statistics.
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// True while no terminal state has been reached.
    pub fn in_progress(&self) -> bool {
        self.result.is_none()
    }

    /// True when the human is the side to move.
    pub fn is_humans_turn(&self) -> bool {
        self.humans_turn
    }

    /// Applies a human placement at `index`.
    ///
    /// # Errors
    ///
    /// Rejected when the game is over, it is the computer's turn, or the
    /// board refuses the cell. State is untouched on rejection.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, index: usize) -> Result<(), MoveError> {
        if !self.humans_turn {
            warn!(index, "human move while computer to play");
            return Err(MoveError::OutOfTurn { mark: HUMAN_MARK });
        }
        self.apply(index, HUMAN_MARK)
    }

    /// Applies the computer's chosen cell.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`GameSession::human_move`]; with the engine fed a
    /// valid snapshot these never fire.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.humans_turn {
            warn!(index, "computer move while human to play");
            return Err(MoveError::OutOfTurn {
                mark: COMPUTER_MARK,
            });
        }
        self.apply(index, COMPUTER_MARK)
    }

    fn apply(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        if self.result.is_some() {
            warn!(index, %mark, "move after terminal state");
            return Err(MoveError::GameOver);
        }
        self.board.place(index, mark)?;
        debug!(index, %mark, "move applied");
        self.check_terminal();
        self.humans_turn = !self.humans_turn;
        Ok(())
    }

    /// Checks for a completed line or a full board and, on the transition
    /// into a terminal state, highlights the winning cells and records the
    /// result.
    fn check_terminal(&mut self) {
        if let Some(winner) = self.board.winner() {
            self.board.mark_winning_lines();
            self.finish(match winner {
                Mark::X => GameResult::X,
                Mark::O => GameResult::O,
            });
        } else if self.board.is_full() {
            self.finish(GameResult::Tie);
        }
    }

    fn finish(&mut self, result: GameResult) {
        if self.result.is_some() {
            return;
        }
        self.result = Some(result);
        match result {
            GameResult::X => self.stats.record_win(),
            GameResult::O => self.stats.record_loss(),
            GameResult::Tie => self.stats.record_tie(),
        }
        info!(?result, games_played = self.stats.games_played(), "game finished");
    }

    /// Starts the next game: fresh board and lines, cleared result, human
    /// to move. Statistics carry over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("resetting board");
        self.board = Board::new();
        self.result = None;
        self.humans_turn = true;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
