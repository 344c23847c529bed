//! Configuration files on disk.

use parlour::{ConfigSource, Console, FirstPlayer, GameMode, ParlourConfig, run_tictactoe};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = ParlourConfig::load(&dir.path().join("parlour.toml")).expect("Load failed");
    assert_eq!(config, ParlourConfig::default());
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("parlour.toml");
    fs::write(&path, "seed = \"not a number\"").expect("Write failed");
    let err = ParlourConfig::load(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_names_from_file_reach_the_game() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("parlour.toml");
    fs::write(
        &path,
        r#"first_player = "computer"
seed = 5

[player_names]
x = "Ada"
o = "Grace"
"#,
    )
    .expect("Write failed");

    let config = ParlourConfig::load(&path).expect("Load failed");
    assert_eq!(*config.first_player(), FirstPlayer::Computer);

    let mut console = Console::new("q\n".as_bytes(), Vec::new());
    run_tictactoe(&mut console, GameMode::Multi, &config).expect("game runs");
    let transcript = String::from_utf8(console.into_output()).expect("utf-8 output");
    assert!(transcript.contains("Ada : X    Grace : O"));
    assert!(transcript.contains("Ada left the game"));
}

#[test]
fn test_quiz_bank_path_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let bank_path = dir.path().join("bank.toml");
    fs::write(
        &bank_path,
        r#"title = "Tiny"

[[questions]]
prompt = "Say hi"
kind = "free_text"
expected = "hi"
"#,
    )
    .expect("Write failed");

    let config = ParlourConfig::default().with_quiz_bank(bank_path);
    let bank = config.question_bank().expect("bank loads");
    assert_eq!(bank.title(), "Tiny");
    assert_eq!(bank.len(), 1);
}

#[test]
fn test_load_reports_where_settings_came_from() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("parlour.toml");

    let (_, source) = ParlourConfig::load_with_source(&path).expect("Load failed");
    assert_eq!(source, ConfigSource::Defaults);
    assert_eq!(source.to_string(), "built-in defaults");

    fs::write(&path, "seed = 1").expect("Write failed");
    let (config, source) = ParlourConfig::load_with_source(&path).expect("Load failed");
    assert_eq!(source, ConfigSource::File(path.clone()));
    assert_eq!(*config.seed(), Some(1));
}
