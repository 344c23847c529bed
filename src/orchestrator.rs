//! Game orchestration between two contestants.

use crate::contestants::{Contestant, Prompt, Turn};
use anyhow::Result;
use parlour_tictactoe::{Board, GameEngine, GameResult, Mark, Move, MoveOutcome, MoveRejection};
use tracing::{debug, info, instrument};

/// Something that happened during a match, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MoveMade {
        /// Who played it.
        player: String,
        /// The move.
        mv: Move,
    },
    /// A requested move was ignored by the engine.
    MoveIgnored {
        /// Who asked.
        player: String,
        /// Why it was ignored.
        reason: MoveRejection,
    },
    /// The board after a change.
    BoardChanged(Board),
    /// The game reached a terminal state.
    GameOver {
        /// Final result.
        result: GameResult,
        /// Name of the winner, `None` on a tie.
        winner: Option<String>,
    },
    /// A contestant walked away before the end.
    Abandoned {
        /// Who left.
        player: String,
    },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::MoveMade { player, mv } => {
                write!(f, "{} ({}) played {}", player, mv.mark, mv.cell.label())
            }
            GameEvent::MoveIgnored { player, reason } => write!(f, "{}: {}", player, reason),
            GameEvent::BoardChanged(board) => write!(f, "\n{}\n", board),
            GameEvent::GameOver {
                winner: Some(name), ..
            } => write!(f, "{} won the match", name),
            GameEvent::GameOver { winner: None, .. } => write!(f, "Tie Game"),
            GameEvent::Abandoned { player } => write!(f, "{} left the game", player),
        }
    }
}

/// How a match ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Played to a terminal state.
    Finished(GameResult),
    /// Someone left first.
    Abandoned {
        /// Who left.
        player: String,
    },
}

/// One game between two contestants over a single engine.
pub struct Match {
    engine: GameEngine,
    player_x: Box<dyn Contestant>,
    player_o: Box<dyn Contestant>,
    events: Vec<GameEvent>,
}

impl Match {
    /// Creates a match with a fresh engine.
    pub fn new(player_x: Box<dyn Contestant>, player_o: Box<dyn Contestant>) -> Self {
        Self {
            engine: GameEngine::new(),
            player_x,
            player_o,
            events: Vec::new(),
        }
    }

    /// The engine as it stands.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Everything that has happened so far.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Name of the contestant playing `mark`.
    pub fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_x.name(),
            Mark::O => self.player_o.name(),
        }
    }

    /// Plays until the game ends or a contestant leaves.
    ///
    /// Each turn is handled to completion before the next contestant is
    /// asked. A move the engine ignores goes back to the same contestant.
    #[instrument(skip_all)]
    pub fn run(&mut self, prompt: &mut dyn Prompt) -> Result<MatchOutcome> {
        info!(
            x = self.player_x.name(),
            o = self.player_o.name(),
            "Starting match"
        );
        self.emit(prompt, GameEvent::BoardChanged(*self.engine.board()))?;

        loop {
            let Some(mark) = self.engine.to_move() else {
                let result = self.engine.result();
                let winner = result.winner().map(|m| self.name_of(m).to_string());
                self.emit(prompt, GameEvent::GameOver { result, winner })?;
                info!(%result, "Match finished");
                return Ok(MatchOutcome::Finished(result));
            };

            let contestant = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let player = contestant.name().to_string();
            debug!(%player, %mark, "Waiting for move");

            let (row, col) = match contestant.choose(&self.engine, prompt)? {
                Turn::Play { row, col } => (row, col),
                Turn::Abandon => {
                    self.emit(prompt, GameEvent::Abandoned { player: player.clone() })?;
                    info!(%player, "Match abandoned");
                    return Ok(MatchOutcome::Abandoned { player });
                }
            };

            match self.engine.apply_move(row, col) {
                MoveOutcome::Placed { mv, .. } => {
                    self.emit(prompt, GameEvent::MoveMade { player, mv })?;
                    self.emit(prompt, GameEvent::BoardChanged(*self.engine.board()))?;
                }
                MoveOutcome::Ignored { reason, .. } => {
                    self.emit(prompt, GameEvent::MoveIgnored { player, reason })?;
                }
            }
        }
    }

    fn emit(&mut self, prompt: &mut dyn Prompt, event: GameEvent) -> Result<()> {
        prompt.tell(&event.to_string())?;
        self.events.push(event);
        Ok(())
    }
}
