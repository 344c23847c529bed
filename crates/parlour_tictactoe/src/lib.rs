//! Pure tic-tac-toe game logic.
//!
//! This crate owns the board, the rules and the turn bookkeeping for a
//! 3x3 game, plus the heuristic used by the computer opponent. It performs
//! no I/O: front-ends hold a [`GameEngine`], feed it moves and render the
//! state it hands back.
//!
//! # Example
//!
//! ```
//! use parlour_tictactoe::{GameEngine, GameResult};
//!
//! let mut engine = GameEngine::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     engine.apply_move(row, col);
//! }
//! assert_eq!(engine.result(), GameResult::XWins);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cell;
mod engine;
pub mod rules;
mod strategy;
mod types;

pub use action::{Move, MoveRejection};
pub use cell::Cell;
pub use engine::{GameEngine, MoveOutcome, SnapshotError};
pub use rules::evaluate;
pub use strategy::choose_computer_move;
pub use types::{Board, BoardParseError, GameResult, Mark, Square};
