//! Application state behind the render loop.

use tracing::{debug, warn};

use super::computer::GameEvent;
use crate::game::GameResult;
use crate::session::GameSession;

/// Main application state: the session plus everything the renderer needs.
pub struct App {
    session: GameSession,
    cursor: usize,
    thinking: bool,
    status: String,
}

impl App {
    /// Creates the application with a fresh session and the cursor on the
    /// center cell.
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            cursor: 4,
            thinking: false,
            status: "Your move — you are X.".to_string(),
        }
    }

    /// The running session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The cursor's cell index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True while a scheduled computer move is outstanding.
    pub fn thinking(&self) -> bool {
        self.thinking
    }

    /// The status line shown under the board.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: crossterm::event::KeyCode) {
        self.cursor = super::input::move_cursor(self.cursor, key);
    }

    /// Attempts a human placement at `index`.
    ///
    /// Returns true when the move was applied and the computer now has a
    /// turn to take; the caller is then responsible for scheduling it.
    pub fn human_place(&mut self, index: usize) -> bool {
        if self.thinking {
            debug!(index, "input ignored while computer is thinking");
            return false;
        }
        if !self.session.in_progress() {
            self.status = "Game over — press r to play again.".to_string();
            return false;
        }
        match self.session.human_move(index) {
            Ok(()) => {
                if self.session.in_progress() {
                    self.thinking = true;
                }
                self.refresh_status();
                self.thinking
            }
            Err(error) => {
                debug!(index, %error, "placement ignored");
                false
            }
        }
    }

    /// Handles an event from a scheduled computer turn.
    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::ComputerMove(index) => {
                self.thinking = false;
                if let Err(error) = self.session.computer_move(index) {
                    warn!(index, %error, "computer move rejected");
                }
                self.refresh_status();
            }
        }
    }

    /// Starts the next game once the current one has finished. Mirrors the
    /// reset control only appearing after a result.
    pub fn reset(&mut self) {
        if self.session.in_progress() {
            return;
        }
        self.session.reset();
        self.cursor = 4;
        self.status = "New game — your move.".to_string();
    }

    fn refresh_status(&mut self) {
        self.status = match self.session.result() {
            Some(GameResult::X) => "You win! Press r to play again, q to quit.".to_string(),
            Some(GameResult::O) => "Computer wins. Press r to play again, q to quit.".to_string(),
            Some(GameResult::Tie) => "Cat's game. Press r to play again, q to quit.".to_string(),
            None if self.thinking => "Computer is thinking…".to_string(),
            None => "Your move.".to_string(),
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
