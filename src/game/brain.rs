//! The move-selection engine: a tiered heuristic over the line views.

use derive_new::new;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

use super::board::{Board, CELL_COUNT};
use super::types::Mark;

/// Heuristic move selector for the computer opponent.
///
/// Borrows a board snapshot and the mark it plays; [`Brain::choose`] is a
/// pure function of that snapshot and the supplied RNG, holding no memory
/// between invocations. Tiers are evaluated in strict priority order and
/// the first tier producing candidates wins; ties within a tier break by
/// uniform random choice through the injected RNG, which keeps every
/// decision reproducible under a seeded generator.
#[derive(Debug, Clone, Copy, new)]
pub struct Brain<'a> {
    board: &'a Board,
    mark: Mark,
}

impl Brain<'_> {
    /// Picks the next cell for this brain's mark.
    ///
    /// Returns `None` only when the board has no open cell, which callers
    /// are expected to rule out before invoking the engine.
    #[instrument(skip(self, rng), fields(mark = %self.mark))]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        self.winning_move(rng)
            .or_else(|| self.blocking_move(rng))
            .or_else(|| self.intersection_move(rng))
            .or_else(|| self.center_move())
            .or_else(|| self.random_open(rng))
    }

    /// Cells that would complete a line for `mark`: the single open cell of
    /// any line where `mark` already holds the other two.
    fn completing_cells(&self, mark: Mark) -> Vec<usize> {
        self.board
            .lines()
            .all()
            .filter(|line| self.board.count_in_line(line, mark) == 2)
            .flat_map(|line| self.board.open_cells_in(line))
            .collect()
    }

    /// Tier 1: take a win. Several simultaneous winning cells are equally
    /// good, so pick one at random.
    fn winning_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let wins = self.completing_cells(self.mark);
        let choice = wins.choose(rng).copied();
        if let Some(index) = choice {
            debug!(index, candidates = wins.len(), "win tier");
        }
        choice
    }

    /// Tier 2: block the opponent's completion. A single threat is forced;
    /// a double threat picks one block at random, which cannot save the
    /// game. Accepted limitation of the heuristic.
    fn blocking_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let blocks = self.completing_cells(self.mark.opponent());
        let choice = match blocks.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => blocks.choose(rng).copied(),
        };
        if let Some(index) = choice {
            debug!(index, candidates = blocks.len(), "block tier");
        }
        choice
    }

    /// Tier 3: occupy the most contested intersection of the opponent's
    /// live lines, neutralizing several potential threats at once.
    ///
    /// A line counts as opponent-live when it holds at least one opponent
    /// mark, none of ours, and an open cell; an untouched line carries no
    /// threat yet.
    fn intersection_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let opponent = self.mark.opponent();
        let live: Vec<&[usize]> = self
            .board
            .lines()
            .all()
            .filter(|line| {
                self.board.count_in_line(line, opponent) > 0
                    && self.board.is_line_live(line, opponent)
            })
            .collect();

        let mut contested = [0usize; CELL_COUNT];
        for (position, first) in live.iter().enumerate() {
            for second in &live[position + 1..] {
                for &index in *first {
                    if second.contains(&index) {
                        contested[index] += 1;
                    }
                }
            }
        }

        let open_contested: Vec<usize> = (0..CELL_COUNT)
            .filter(|&index| contested[index] > 0 && self.board.is_open(index))
            .collect();
        let best = open_contested
            .iter()
            .map(|&index| contested[index])
            .max()?;
        let candidates: Vec<usize> = open_contested
            .into_iter()
            .filter(|&index| contested[index] == best)
            .collect();

        let choice = candidates.choose(rng).copied();
        if let Some(index) = choice {
            debug!(index, contest_count = best, "intersection tier");
        }
        choice
    }

    /// Tier 4: prefer the cell lying on the most lines (the center on a
    /// 3×3 grid) when it is still open.
    fn center_move(&self) -> Option<usize> {
        let counts = self.board.lines().membership_counts(CELL_COUNT);
        let best = *counts.iter().max()?;
        let choice = (0..CELL_COUNT)
            .find(|&index| counts[index] == best && self.board.is_open(index));
        if let Some(index) = choice {
            debug!(index, "center tier");
        }
        choice
    }

    /// Tier 5: any open cell.
    fn random_open<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let choice = self.board.open_cells().choose(rng).copied();
        if let Some(index) = choice {
            debug!(index, "random tier");
        }
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(index, mark) in marks {
            board.place(index, mark).unwrap();
        }
        board
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_takes_the_single_winning_cell() {
        // O holds two of the middle row; 5 completes it.
        let board = board_with(&[(3, Mark::O), (4, Mark::O), (0, Mark::X), (1, Mark::X)]);
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(Brain::new(&board, Mark::O).choose(&mut rng), Some(5));
        }
    }

    #[test]
    fn test_win_beats_block() {
        // Both sides threaten to complete; O must finish its own line
        // rather than block X.
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (3, Mark::O),
            (4, Mark::O),
            (8, Mark::X),
        ]);
        assert_eq!(Brain::new(&board, Mark::O).choose(&mut rng()), Some(5));
    }

    #[test]
    fn test_blocks_the_single_threat() {
        // X holds 0 and 1; O holds the center. The only threat is cell 2.
        let board = board_with(&[(0, Mark::X), (1, Mark::X), (4, Mark::O)]);
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(Brain::new(&board, Mark::O).choose(&mut rng), Some(2));
        }
    }

    #[test]
    fn test_double_threat_blocks_one_of_them() {
        // X threatens on the top row (2) and the left column (6).
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (3, Mark::X),
            (4, Mark::O),
            (8, Mark::O),
        ]);
        let choice = Brain::new(&board, Mark::O).choose(&mut rng()).unwrap();
        assert!([2, 6].contains(&choice), "picked {choice}, expected a block");
    }

    #[test]
    fn test_intersection_of_live_lines() {
        // X-live lines: top row (via 0), left column (via 0), middle row
        // (via 5). Open intersections reduce to cell 3, where the left
        // column crosses the middle row.
        let board = board_with(&[(0, Mark::X), (5, Mark::X), (8, Mark::O)]);
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(Brain::new(&board, Mark::O).choose(&mut rng), Some(3));
        }
    }

    #[test]
    fn test_falls_through_to_center() {
        // X's live lines all cross at the occupied corner, so the fork
        // tier is empty and the center is taken.
        let board = board_with(&[(0, Mark::X)]);
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(Brain::new(&board, Mark::O).choose(&mut rng), Some(4));
        }
    }

    #[test]
    fn test_center_taken_falls_through_to_random() {
        // First move after the human takes the center: no win, block, or
        // fork applies, and the center is gone, so any of the remaining
        // eight cells is legal.
        let board = board_with(&[(4, Mark::X)]);
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let choice = Brain::new(&board, Mark::X.opponent()).choose(&mut rng).unwrap();
            assert_ne!(choice, 4);
            assert!(board.is_open(choice));
        }
    }

    #[test]
    fn test_choice_is_reproducible_under_a_seed() {
        let board = board_with(&[(4, Mark::X)]);
        let brain = Brain::new(&board, Mark::O);
        let first = brain.choose(&mut StdRng::seed_from_u64(7));
        let second = brain.choose(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_board_yields_none() {
        // Caller contract violation; the engine reports it as None instead
        // of panicking.
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::X),
            (4, Mark::O),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ]);
        assert_eq!(Brain::new(&board, Mark::O).choose(&mut rng()), None);
    }

    #[test]
    fn test_last_open_cell_is_found() {
        // Every line through the one open cell is dead, so the choice
        // falls all the way to the random tier with a single candidate.
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::O),
            (4, Mark::O),
            (5, Mark::X),
            (7, Mark::X),
            (8, Mark::O),
        ]);
        let choice = Brain::new(&board, Mark::O).choose(&mut rng());
        assert_eq!(choice, Some(6));
    }
}
