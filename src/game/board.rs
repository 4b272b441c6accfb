//! Board state: the cell arena plus the line views over it.

use derive_more::{Display, Error};
use tracing::{instrument, trace};

use super::lines::Lines;
use super::types::{Cell, Mark};

/// Grid width.
pub const COLUMNS: usize = 3;
/// Grid height.
pub const ROWS: usize = 3;
/// Total cell count.
pub const CELL_COUNT: usize = COLUMNS * ROWS;

/// Error returned when a placement request cannot be applied.
///
/// The session's turn and occupancy checks mean a well-behaved caller never
/// sees these; they exist so a bad request is rejected instead of corrupting
/// the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// The index is outside the grid.
    #[display("cell index {index} is out of range")]
    OutOfRange {
        /// The offending index.
        index: usize,
    },
    /// The cell already holds a mark.
    #[display("cell {index} is already occupied")]
    Occupied {
        /// The offending index.
        index: usize,
    },
}

/// The 3×3 grid as an arena of cells, with the row/column/diagonal index
/// sets computed once at construction.
///
/// Lines hold indices, never cell copies, so every query reads the current
/// arena state without resynchronization. Resetting a game replaces the
/// whole board rather than patching cells in place.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Cell>,
    lines: Lines,
}

impl Board {
    /// Creates an empty board with freshly generated lines.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::default(); CELL_COUNT],
            lines: Lines::generate(COLUMNS, ROWS),
        }
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `index`, if in range.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// The line index sets for this board.
    pub fn lines(&self) -> &Lines {
        &self.lines
    }

    /// True when the cell at `index` exists and holds no mark.
    pub fn is_open(&self, index: usize) -> bool {
        self.cell(index).is_some_and(Cell::is_open)
    }

    /// Places `mark` at `index`.
    ///
    /// # Errors
    ///
    /// Rejects the request when `index` is out of range or the cell is
    /// already occupied; the arena is left untouched.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), PlaceError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(PlaceError::OutOfRange { index })?;
        if !cell.is_open() {
            return Err(PlaceError::Occupied { index });
        }
        cell.set_mark(mark);
        trace!(index, %mark, "mark placed");
        Ok(())
    }

    /// Indices of all open cells.
    pub fn open_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_open())
            .map(|(index, _)| index)
            .collect()
    }

    /// True when no cell is open.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_open())
    }

    /// The mark owning `line`, if every cell in it holds that mark.
    pub fn line_owner(&self, line: &[usize]) -> Option<Mark> {
        let first = self.cells[line[0]].mark()?;
        line[1..]
            .iter()
            .all(|&index| self.cells[index].mark() == Some(first))
            .then_some(first)
    }

    /// True when every cell in `line` holds the same non-empty mark.
    pub fn is_line_complete(&self, line: &[usize]) -> bool {
        self.line_owner(line).is_some()
    }

    /// True when `line` is still winnable by `mark`: at least one open cell
    /// and no cell of the opposing mark.
    pub fn is_line_live(&self, line: &[usize], mark: Mark) -> bool {
        let mut open = 0;
        for &index in line {
            match self.cells[index].mark() {
                None => open += 1,
                Some(occupant) if occupant != mark => return false,
                Some(_) => {}
            }
        }
        open > 0
    }

    /// Indices of the open cells in `line`.
    pub fn open_cells_in(&self, line: &[usize]) -> Vec<usize> {
        line.iter()
            .copied()
            .filter(|&index| self.cells[index].is_open())
            .collect()
    }

    /// How many cells of `line` hold `mark`.
    pub fn count_in_line(&self, line: &[usize], mark: Mark) -> usize {
        line.iter()
            .filter(|&&index| self.cells[index].mark() == Some(mark))
            .count()
    }

    /// Scans every line for a completed one and returns its owner.
    pub fn winner(&self) -> Option<Mark> {
        self.lines.all().find_map(|line| self.line_owner(line))
    }

    /// Sets the display flag on every cell of each completed line.
    ///
    /// Returns true when at least one line was complete.
    #[instrument(skip(self))]
    pub fn mark_winning_lines(&mut self) -> bool {
        let winning: Vec<usize> = self
            .lines
            .all()
            .filter(|line| self.line_owner(line).is_some())
            .flatten()
            .copied()
            .collect();
        for &index in &winning {
            self.cells[index].set_in_winning_line();
        }
        !winning.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
