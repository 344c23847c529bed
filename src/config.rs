//! Application configuration.
//!
//! Loaded from a TOML file; every field has a default so a missing file or
//! a partial one is fine. Command-line flags are applied on top afterwards.

use derive_getters::Getters;
use derive_more::{Display, Error};
use parlour_quiz::{BankError, QuestionBank};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Who plays X (and therefore moves first) in a single-player game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FirstPlayer {
    /// The human plays X.
    #[default]
    Human,
    /// The computer plays X.
    Computer,
}

/// Question banks compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, clap::ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum BuiltinBank {
    /// Three free-text questions about learning Python.
    Askpython,
    /// Two multiple-choice general knowledge questions.
    GeneralKnowledge,
}

impl BuiltinBank {
    /// Returns the bank's questions.
    pub fn bank(self) -> QuestionBank {
        match self {
            BuiltinBank::Askpython => QuestionBank::askpython(),
            BuiltinBank::GeneralKnowledge => QuestionBank::general_knowledge(),
        }
    }
}

/// Display names used in two-player games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerNames {
    /// Name of the player using X.
    #[serde(default = "default_x_name")]
    x: String,
    /// Name of the player using O.
    #[serde(default = "default_o_name")]
    o: String,
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            x: default_x_name(),
            o: default_o_name(),
        }
    }
}

fn default_x_name() -> String {
    "Player 1".to_string()
}

fn default_o_name() -> String {
    "Player 2".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

/// Settings for a parlour session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ParlourConfig {
    /// Who moves first against the computer.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Names for two-player games.
    #[serde(default)]
    player_names: PlayerNames,

    /// Seed for the computer's corner/edge choices; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Question bank file for the quiz; the built-in AskPython bank when absent.
    #[serde(default)]
    quiz_bank: Option<PathBuf>,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Write logs to this file instead of stderr.
    #[serde(default)]
    log_file: Option<PathBuf>,
}

impl Default for ParlourConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::default(),
            player_names: PlayerNames::default(),
            seed: None,
            quiz_bank: None,
            log_filter: default_log_filter(),
            log_file: None,
        }
    }
}

impl ParlourConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(first_player = %config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_source(path).map(|(config, _)| config)
    }

    /// Like [`load`](Self::load), also reporting where the settings came from.
    ///
    /// Configuration is read before logging is set up, so the caller logs
    /// the returned source once the subscriber is installed.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_with_source(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            let config = Self::from_file(path)?;
            Ok((config, ConfigSource::File(path.to_path_buf())))
        } else {
            info!("Config file not found at {}, using defaults", path.display());
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Overrides who moves first.
    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
        self
    }

    /// Overrides the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the quiz bank file.
    pub fn with_quiz_bank(mut self, path: PathBuf) -> Self {
        self.quiz_bank = Some(path);
        self
    }

    /// The configured question bank, or the AskPython bank.
    #[instrument(skip(self))]
    pub fn question_bank(&self) -> Result<QuestionBank, BankError> {
        match &self.quiz_bank {
            Some(path) => QuestionBank::from_file(path),
            None => Ok(QuestionBank::askpython()),
        }
    }
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigSource {
    /// Read from this file.
    #[display("{}", _0.display())]
    File(PathBuf),
    /// No file was found.
    #[display("built-in defaults")]
    Defaults,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
