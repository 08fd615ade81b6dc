//! Tests for loading series configuration from disk.

use std::io::Write;
use tictactoe_series::SeriesConfig;

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "points_target = 5").unwrap();
    writeln!(file, "clear_screen = false").unwrap();

    let config = SeriesConfig::from_file(file.path()).unwrap();
    assert_eq!(config, SeriesConfig::new(5, false));
}

#[test]
fn test_from_empty_file_uses_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = SeriesConfig::from_file(file.path()).unwrap();
    assert_eq!(config, SeriesConfig::default());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SeriesConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "points_target = \"three\"").unwrap();
    let err = SeriesConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_cli_override_beats_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "points_target = 5").unwrap();
    let config = SeriesConfig::from_file(file.path())
        .unwrap()
        .with_overrides(Some(2), false);
    assert_eq!(*config.points_target(), 2);
    assert!(*config.clear_screen());
}
