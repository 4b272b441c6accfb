//! Scenario tests for the move-selection cascade.

use noughts::{Board, Brain, Mark};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn board_with(marks: &[(usize, Mark)]) -> Board {
    let mut board = Board::new();
    for &(index, mark) in marks {
        board.place(index, mark).unwrap();
    }
    board
}

#[test]
fn test_block_beats_everything_but_a_win() {
    // X holds the top row's 0 and 1, O holds the center. Cell 2 is not a
    // winning move for O, so this must come from the block tier.
    let board = board_with(&[(0, Mark::X), (1, Mark::X), (4, Mark::O)]);
    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(
            Brain::new(&board, Mark::O).choose(&mut rng),
            Some(2),
            "forced block is deterministic"
        );
    }
}

#[test]
fn test_win_preferred_over_block() {
    // O can finish the middle row even though X also threatens.
    let board = board_with(&[
        (0, Mark::X),
        (1, Mark::X),
        (8, Mark::X),
        (3, Mark::O),
        (4, Mark::O),
    ]);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(Brain::new(&board, Mark::O).choose(&mut rng), Some(5));
}

#[test]
fn test_intersection_move_covers_two_threat_lines() {
    // X's live lines that still cross on an open cell meet at 3.
    let board = board_with(&[(0, Mark::X), (5, Mark::X), (8, Mark::O)]);
    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(Brain::new(&board, Mark::O).choose(&mut rng), Some(3));
    }
}

#[test]
fn test_first_reply_to_center_opening_is_random() {
    // Opening scenario: the human takes the center. No win, block, or
    // fork applies and the center is occupied, so the engine falls
    // through to a uniformly random open cell.
    let board = board_with(&[(4, Mark::X)]);
    let mut seen = std::collections::HashSet::new();
    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let choice = Brain::new(&board, Mark::O).choose(&mut rng).unwrap();
        assert_ne!(choice, 4);
        assert!(board.is_open(choice));
        seen.insert(choice);
    }
    assert!(seen.len() > 1, "tie-break actually varies across seeds");
}

#[test]
fn test_corner_opening_draws_the_center_reply() {
    let board = board_with(&[(0, Mark::X)]);
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(Brain::new(&board, Mark::O).choose(&mut rng), Some(4));
}

#[test]
fn test_choice_is_always_an_open_cell() {
    // Random playthroughs: whatever the position, the engine's answer is
    // a legal cell.
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut mark = Mark::X;
        while !board.is_full() {
            let choice = Brain::new(&board, mark).choose(&mut rng).unwrap();
            assert!(board.is_open(choice), "seed {seed}: chose occupied {choice}");
            board.place(choice, mark).unwrap();
            mark = mark.opponent();
        }
        assert_eq!(Brain::new(&board, mark).choose(&mut rng), None);
    }
}
