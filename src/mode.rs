//! Game mode selection.

/// Who sits at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, clap::ValueEnum)]
#[strum(serialize_all = "snake_case")]
pub enum GameMode {
    /// One human against the computer.
    #[default]
    Single,
    /// Two humans taking turns at the same console.
    Multi,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::Single => "Single Player",
            GameMode::Multi => "Multi Player",
        }
    }
}
