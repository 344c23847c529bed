//! Parlour - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use parlour::{
    ConfigSource, Console, MatchOutcome, ParlourConfig, init_tracing, run_quiz, run_tictactoe,
};
use std::io;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let (config, source) = ParlourConfig::load_with_source(&cli.config)?;
    init_tracing(&config)?;
    match &source {
        ConfigSource::File(path) => info!(path = %path.display(), "Config loaded"),
        ConfigSource::Defaults => info!(
            config_path = %cli.config.display(),
            "Config file not found, using defaults"
        ),
    }
    info!(%source, "Starting parlour");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match cli.command {
        Command::Tictactoe { mode, first, seed } => {
            let mut config = config;
            if let Some(first) = first {
                config = config.with_first_player(first);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            match run_tictactoe(&mut console, mode, &config)? {
                MatchOutcome::Finished(result) => info!(%result, "Game over"),
                MatchOutcome::Abandoned { player } => info!(%player, "Game abandoned"),
            }
        }
        Command::Quiz { bank, builtin } => {
            let bank = match (bank, builtin) {
                (Some(path), _) => config.with_quiz_bank(path).question_bank(),
                (None, Some(builtin)) => Ok(builtin.bank()),
                (None, None) => config.question_bank(),
            }
            .context("Failed to load question bank")?;
            run_quiz(&mut console, bank)?;
        }
    }

    Ok(())
}
