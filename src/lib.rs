//! Parlour - terminal tic-tac-toe and quiz games.
//!
//! The game rules live in [`parlour_tictactoe`] and [`parlour_quiz`]; this
//! crate wires them to a console.
//!
//! # Architecture
//!
//! - **Contestants**: humans typing moves, or the heuristic computer
//! - **Match**: drives one tic-tac-toe game between two contestants
//! - **Console**: line-oriented runners for both games
//! - **Config**: TOML settings with command-line overrides
//!
//! # Example
//!
//! ```
//! use parlour::{Console, GameMode, ParlourConfig, run_tictactoe};
//!
//! # fn example() -> anyhow::Result<()> {
//! // Two players at one keyboard: X takes the top row.
//! let input = "1\n4\n2\n5\n3\n";
//! let mut console = Console::new(input.as_bytes(), Vec::new());
//! run_tictactoe(&mut console, GameMode::Multi, &ParlourConfig::default())?;
//! let transcript = String::from_utf8(console.into_output())?;
//! assert!(transcript.contains("Player 1 won the match"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod contestants;
mod logging;
mod mode;
mod orchestrator;

// Crate-level exports - Configuration
pub use config::{
    BuiltinBank, ConfigError, ConfigSource, FirstPlayer, ParlourConfig, PlayerNames,
};

// Crate-level exports - Console front-end
pub use console::{Console, run_quiz, run_tictactoe};

// Crate-level exports - Contestants
pub use contestants::{Computer, Contestant, Human, Prompt, Turn};

// Crate-level exports - Logging
pub use logging::init_tracing;

// Crate-level exports - Orchestration
pub use mode::GameMode;
pub use orchestrator::{GameEvent, Match, MatchOutcome};
