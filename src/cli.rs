//! Command-line interface for parlour.

use clap::{Parser, Subcommand};
use parlour::{BuiltinBank, FirstPlayer, GameMode};
use std::path::PathBuf;

/// Parlour - tic-tac-toe and a quiz in the terminal
#[derive(Parser, Debug)]
#[command(name = "parlour")]
#[command(about = "Terminal tic-tac-toe and quiz games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "parlour.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe
    Tictactoe {
        /// Against the computer or another person
        #[arg(short, long, value_enum, default_value_t = GameMode::Single)]
        mode: GameMode,

        /// Who plays X in single-player mode
        #[arg(long, value_enum)]
        first: Option<FirstPlayer>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Take a quiz
    Quiz {
        /// Question bank file (TOML)
        #[arg(long, conflicts_with = "builtin")]
        bank: Option<PathBuf>,

        /// Use a built-in question bank
        #[arg(long, value_enum)]
        builtin: Option<BuiltinBank>,
    },
}
