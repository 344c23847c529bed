//! Heuristic computer contestant.

use super::{Contestant, Prompt, Turn};
use anyhow::Result;
use parlour_tictactoe::{GameEngine, Mark, choose_computer_move};
use rand::Rng;
use tracing::{debug, instrument};

/// Plays `mark` using the fixed win/block/center/corner/edge heuristic.
pub struct Computer<R> {
    name: String,
    mark: Mark,
    rng: R,
}

impl<R: Rng> Computer<R> {
    /// Creates a computer contestant.
    pub fn new(name: impl Into<String>, mark: Mark, rng: R) -> Self {
        Self {
            name: name.into(),
            mark,
            rng,
        }
    }
}

impl<R: Rng> Contestant for Computer<R> {
    #[instrument(skip(self, engine, _prompt), fields(computer = %self.name, mark = %self.mark))]
    fn choose(&mut self, engine: &GameEngine, _prompt: &mut dyn Prompt) -> Result<Turn> {
        let cell = choose_computer_move(engine.board(), self.mark, self.mark.opponent(), &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(%cell, "Computer chose cell");
        Ok(Turn::Play {
            row: cell.row(),
            col: cell.col(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
