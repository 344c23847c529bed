//! Win detection logic for tic-tac-toe.

use crate::cell::Cell;
use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Returns the mark holding the first complete line, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.mark();
        }
    }

    None
}

/// Whether `mark` holds any complete line.
#[instrument(skip(board))]
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let owned = Square::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|cell| board.get(*cell) == owned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX / .O. / O..".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert!(has_line(&board, Mark::X));
        assert!(!has_line(&board, Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "X.O / XO. / O.X".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX. / OO. / ...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
