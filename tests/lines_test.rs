//! Tests for grid line generation.

use noughts::Lines;

#[test]
fn test_three_by_three_produces_eight_lines() {
    let lines = Lines::generate(3, 3);
    assert_eq!(lines.rows().len(), 3);
    assert_eq!(lines.columns().len(), 3);
    assert_eq!(lines.diagonals().len(), 2);
    assert_eq!(lines.all().count(), 8);
    assert!(lines.all().all(|line| line.len() == 3));
}

#[test]
fn test_every_index_is_covered() {
    let lines = Lines::generate(3, 3);
    let mut covered = [false; 9];
    for line in lines.all() {
        for &index in line {
            covered[index] = true;
        }
    }
    assert!(covered.iter().all(|&seen| seen));
}

#[test]
fn test_each_index_appears_once_per_category() {
    let lines = Lines::generate(3, 3);
    for category in [lines.rows(), lines.columns()] {
        let mut counts = [0u32; 9];
        for line in category {
            for &index in line {
                counts[index] += 1;
            }
        }
        assert_eq!(counts, [1; 9]);
    }
}

#[test]
fn test_diagonals_cross_at_the_center() {
    let lines = Lines::generate(3, 3);
    assert_eq!(lines.diagonals()[0], vec![0, 4, 8]);
    assert_eq!(lines.diagonals()[1], vec![2, 4, 6]);
}
