//! Row, column, and diagonal index generation for a grid.

use derive_getters::Getters;
use tracing::instrument;

/// Index sets for every winnable line of a grid.
///
/// Lines reference cells by flat index into the board's cell arena, so they
/// stay valid across placements and only need regenerating when the board
/// itself is rebuilt. Generation is a pure function of the dimensions.
///
/// Diagonal generation is defined for square grids only; rows and columns
/// work for any rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Lines {
    /// Row index lists, top to bottom.
    rows: Vec<Vec<usize>>,
    /// Column index lists, left to right.
    columns: Vec<Vec<usize>>,
    /// The descending and ascending diagonals.
    diagonals: Vec<Vec<usize>>,
}

impl Lines {
    /// Computes the line index sets for a `columns` × `rows` grid.
    #[instrument]
    pub fn generate(columns: usize, rows: usize) -> Self {
        debug_assert!(columns >= 2 && rows >= 2, "grid must be at least 2x2");
        debug_assert_eq!(columns, rows, "diagonals are only defined for square grids");

        let total = columns * rows;

        let row_lines = (0..total)
            .step_by(columns)
            .map(|start| (start..(start + columns).min(total)).collect())
            .collect();

        let column_lines = (0..columns)
            .map(|c| (c..total).step_by(columns).collect())
            .collect();

        let descending: Vec<usize> = (0..total).step_by(columns + 1).collect();

        // Walk up from the bottom-left corner; the stride lands on every
        // cell of the ascending diagonal, excluding index 0.
        let step = columns - 1;
        let mut ascending = Vec::new();
        let mut index = total - columns;
        while index > 0 {
            ascending.push(index);
            if index < step {
                break;
            }
            index -= step;
        }
        ascending.sort_unstable();

        Self {
            rows: row_lines,
            columns: column_lines,
            diagonals: vec![descending, ascending],
        }
    }

    /// Iterates every line in a fixed order: rows, then columns, then
    /// diagonals.
    pub fn all(&self) -> impl Iterator<Item = &[usize]> {
        self.rows
            .iter()
            .chain(self.columns.iter())
            .chain(self.diagonals.iter())
            .map(Vec::as_slice)
    }

    /// Counts how many lines each of the `total_cells` cells belongs to.
    pub fn membership_counts(&self, total_cells: usize) -> Vec<usize> {
        let mut counts = vec![0; total_cells];
        for line in self.all() {
            for &index in line {
                counts[index] += 1;
            }
        }
        counts
    }
}
