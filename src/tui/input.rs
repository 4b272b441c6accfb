//! Keyboard cursor movement over the grid.

use crossterm::event::KeyCode;

use crate::game::{CELL_COUNT, COLUMNS, ROWS};

/// Moves the cursor index by one cell for an arrow key, staying on the
/// grid. Any other key leaves the cursor where it is.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    debug_assert!(cursor < CELL_COUNT);
    let column = cursor % COLUMNS;
    let row = cursor / COLUMNS;

    match key {
        KeyCode::Left if column > 0 => cursor - 1,
        KeyCode::Right if column < COLUMNS - 1 => cursor + 1,
        KeyCode::Up if row > 0 => cursor - COLUMNS,
        KeyCode::Down if row < ROWS - 1 => cursor + COLUMNS,
        _ => cursor,
    }
}
