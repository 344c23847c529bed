//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here is cached: every call
//! looks at the squares as they are now.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_line};

use crate::types::{Board, GameResult};
use tracing::instrument;

/// Classifies a board.
///
/// The first completed line in scan order (rows, then columns, then
/// diagonals) decides the winner. A board on which both marks hold a line
/// cannot arise through [`GameEngine`](crate::GameEngine); such a board is
/// still answered by that scan order rather than treated as an error.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(winner) = check_winner(board) {
        GameResult::won_by(winner)
    } else if is_draw(board) {
        GameResult::Tie
    } else {
        GameResult::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark};

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameResult::InProgress);
    }

    #[test]
    fn test_every_line_wins_for_either_mark() {
        for mark in [Mark::X, Mark::O] {
            for line in LINES {
                let mut board = Board::new();
                for cell in line {
                    board = board.with(cell, mark);
                }
                assert_eq!(evaluate(&board), GameResult::won_by(mark), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_line_with_filler_still_wins() {
        // O across the middle row, X scattered elsewhere.
        let board: Board = "X.X / OOO / X..".parse().unwrap();
        assert_eq!(evaluate(&board), GameResult::OWins);
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board: Board = "XOX / XOO / OXX".parse().unwrap();
        assert_eq!(evaluate(&board), GameResult::Tie);
    }

    #[test]
    fn test_win_on_full_board_beats_tie() {
        let board: Board = "XXX / OOX / XOO".parse().unwrap();
        assert_eq!(evaluate(&board), GameResult::XWins);
    }

    #[test]
    fn test_double_line_resolved_by_scan_order() {
        // Unreachable in play: O's top row is found before X's bottom row.
        let mut board = Board::new();
        for cell in [Cell::TopLeft, Cell::TopCenter, Cell::TopRight] {
            board = board.with(cell, Mark::O);
        }
        for cell in [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight] {
            board = board.with(cell, Mark::X);
        }
        assert_eq!(evaluate(&board), GameResult::OWins);
    }
}
