//! Tests for loading game configuration from disk.

use std::io::Write;
use strictly_tictac::GameConfig;

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "user_symbol = \"X\"").unwrap();
    writeln!(file, "computer_symbol = \"O\"").unwrap();
    writeln!(file, "seed = 9").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.user_symbol(), "X");
    assert_eq!(*config.seed(), Some(9));

    let mut game = config.build_game();
    game.accept_user_move(0, 0).unwrap();
    game.create_computer_move().unwrap();
    let state = game.state();
    assert_eq!(state[0][0], "X");
    assert_eq!(state.iter().flatten().filter(|c| *c == "O").count(), 1);
}

#[test]
fn test_missing_file_reports_location() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_malformed_toml_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = \"not a number\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
