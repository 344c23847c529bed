//! Heuristic computer opponent.
//!
//! A fixed priority list, checked top to bottom against the empty cells:
//!
//! 1. complete a line for the computer,
//! 2. block a line the opponent could complete next turn,
//! 3. take the center,
//! 4. take a random empty corner,
//! 5. take a random empty edge.
//!
//! There is no look-ahead. An opponent who sets up a fork will beat it.

use crate::cell::Cell;
use crate::rules::has_line;
use crate::types::{Board, Mark};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks the computer's next cell, or `None` when the board is full.
///
/// Only the corner and edge tiers consult `rng`; the rest is deterministic.
#[instrument(skip(board, rng))]
pub fn choose_computer_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Mark,
    opponent: Mark,
    rng: &mut R,
) -> Option<Cell> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    if let Some(cell) = completing_cell(board, &empty, computer) {
        debug!(%cell, "Taking winning cell");
        return Some(cell);
    }

    if let Some(cell) = completing_cell(board, &empty, opponent) {
        debug!(%cell, "Blocking opponent");
        return Some(cell);
    }

    if board.is_empty(Cell::CENTER) {
        debug!("Taking center");
        return Some(Cell::CENTER);
    }

    let corners: Vec<Cell> = empty.iter().copied().filter(|c| c.is_corner()).collect();
    if let Some(&cell) = corners.choose(rng) {
        debug!(%cell, options = corners.len(), "Taking corner");
        return Some(cell);
    }

    let edges: Vec<Cell> = empty.iter().copied().filter(|c| c.is_edge()).collect();
    if let Some(&cell) = edges.choose(rng) {
        debug!(%cell, options = edges.len(), "Taking edge");
        return Some(cell);
    }

    None
}

/// First empty cell (row-major) that would give `mark` a line.
fn completing_cell(board: &Board, empty: &[Cell], mark: Mark) -> Option<Cell> {
    empty
        .iter()
        .copied()
        .find(|cell| has_line(&board.with(*cell, mark), mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn pick(diagram: &str) -> Option<Cell> {
        let board: Board = diagram.parse().unwrap();
        choose_computer_move(&board, Mark::O, Mark::X, &mut rng())
    }

    #[test]
    fn test_empty_board_takes_center() {
        assert_eq!(pick("... / ... / ..."), Some(Cell::Center));
    }

    #[test]
    fn test_win_preferred_over_block() {
        // X threatens the top row, O can finish the middle row.
        assert_eq!(pick("XX. / OO. / X.."), Some(Cell::MiddleRight));
    }

    #[test]
    fn test_blocks_when_no_win() {
        assert_eq!(pick("XX. / .O. / ..."), Some(Cell::TopRight));
    }

    #[test]
    fn test_first_winning_cell_in_row_major_order() {
        // O can win at TopRight (column) or BottomLeft (row); TopRight comes first.
        assert_eq!(pick("XX. / X.O / .OO"), Some(Cell::TopRight));
    }

    #[test]
    fn test_corner_after_center_taken() {
        for seed in 0..32 {
            let board: Board = "... / .X. / ...".parse().unwrap();
            let cell = choose_computer_move(&board, Mark::O, Mark::X, &mut StdRng::seed_from_u64(seed));
            assert!(cell.is_some_and(Cell::is_corner), "seed {seed} picked {cell:?}");
        }
    }

    #[test]
    fn test_edge_when_center_and_corners_gone() {
        // Only the two column-1 edges are left and neither completes a line.
        let board: Board = "X.O / OXX / X.O".parse().unwrap();
        let cell = choose_computer_move(&board, Mark::O, Mark::X, &mut rng());
        assert!(cell.is_some_and(|c| board.is_empty(c) && c.is_edge()), "picked {cell:?}");
    }

    #[test]
    fn test_full_board_returns_none() {
        assert_eq!(pick("XOX / XOO / OXX"), None);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board: Board = "... / .X. / ...".parse().unwrap();
        let a = choose_computer_move(&board, Mark::O, Mark::X, &mut StdRng::seed_from_u64(9));
        let b = choose_computer_move(&board, Mark::O, Mark::X, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
