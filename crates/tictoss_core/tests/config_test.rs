//! Tests for loading configuration files.

use std::io::Write;
use std::time::Duration;
use tictoss_core::{MatchSetup, Seat, TictossConfig};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TictossConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, TictossConfig::default());
    assert_eq!(config.timing().computer_delay(), Duration::from_secs(1));
    assert_eq!(config.timing().toss_announce(), Duration::from_millis(1500));
}

#[test]
fn test_file_overrides_timing_and_names() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[timing]
countdown_from = 5
toss_delay_ms = 10

[players]
player_one = "Ada"
player_two = "  "
"#
    )
    .unwrap();

    let config = TictossConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.timing().countdown_from(), 5);
    assert_eq!(config.timing().toss_delay(), Duration::from_millis(10));
    assert_eq!(config.timing().countdown_step(), Duration::from_secs(1));

    let setup = MatchSetup::from_config(config.players());
    assert_eq!(setup.name_of(Seat::PlayerOne), "Ada");
    assert_eq!(setup.name_of(Seat::PlayerTwo), "Player 2");
}

#[test]
fn test_wrong_type_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[timing]\ncountdown_from = \"three\"").unwrap();
    let err = TictossConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{err}");
}

#[test]
fn test_unreadable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TictossConfig::from_file(dir.path()).unwrap_err();
    assert!(err.message.contains("Failed to read config file"), "{err}");
}
