//! Contestant trait and implementations.

mod computer;
mod human;

pub use computer::Computer;
pub use human::Human;

use anyhow::Result;
use parlour_tictactoe::GameEngine;

/// What a contestant wants to do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Place a mark at `(row, col)`. Coordinates are not pre-checked; the
    /// engine ignores anything off the board.
    Play {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// Leave the game.
    Abandon,
}

/// Line-oriented question/answer channel to the people at the table.
pub trait Prompt {
    /// Shows `question` and waits for one line; `None` once input is closed.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;

    /// Shows a message.
    fn tell(&mut self, message: &str) -> Result<()>;
}

/// Anyone who can take a turn.
pub trait Contestant {
    /// Decides the next turn for the side to move.
    fn choose(&mut self, engine: &GameEngine, prompt: &mut dyn Prompt) -> Result<Turn>;

    /// Display name.
    fn name(&self) -> &str;
}
