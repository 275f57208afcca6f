//! Loading session configuration from disk.

use parlor_games::SessionConfig;
use parlor_tictactoe::Mark;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_loads_full_file() {
    let file = write_config(
        r#"
player_name = "Ada"
human_mark = "O"
human_first = false
score_threshold = 3
dealer_stand_on = 18
seed = 1234
computer_names = ["Marvin"]
"#,
    );

    let config = SessionConfig::from_file(file.path()).unwrap();
    assert_eq!(config.player_name().as_deref(), Some("Ada"));
    assert_eq!(*config.human_mark(), Mark::O);
    assert!(!*config.human_first());
    assert_eq!(*config.score_threshold(), 3);
    assert_eq!(*config.dealer_stand_on(), 18);
    assert_eq!(*config.seed(), Some(1234));
    assert_eq!(config.computer_names(), &vec!["Marvin".to_string()]);
}

#[test]
fn test_empty_file_is_all_defaults() {
    let file = write_config("");
    let config = SessionConfig::from_file(file.path()).unwrap();
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let config = SessionConfig::load_or_default(path).unwrap();
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn test_missing_file_is_an_error_for_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = SessionConfig::from_file(path).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_invalid_values_are_rejected() {
    let file = write_config("score_threshold = 0\n");
    let err = SessionConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("score_threshold"));

    let file = write_config("human_mark = \"Z\"\n");
    let err = SessionConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
