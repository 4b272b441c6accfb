//! Single-player tic-tac-toe with a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **game**: the core. Line generation over the grid, the cell arena,
//!   the tiered move-selection engine, and running statistics
//! - **session**: turn sequencing, terminal-state detection, and
//!   exactly-once stats recording
//! - **tui**: ratatui front end. Rendering, input, and the deferred
//!   computer turn
//!
//! # Example
//!
//! ```
//! use noughts::game::{Board, Brain, Mark};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! # fn main() -> Result<(), noughts::game::PlaceError> {
//! let mut board = Board::new();
//! board.place(4, Mark::X)?;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let reply = Brain::new(&board, Mark::O)
//!     .choose(&mut rng)
//!     .expect("open cells remain");
//! assert!(board.is_open(reply));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod game;
pub mod session;
pub mod tui;

pub use game::{Board, Brain, Cell, GameResult, GameStats, Lines, Mark, PlaceError};
pub use session::{COMPUTER_MARK, GameSession, HUMAN_MARK, MoveError};
