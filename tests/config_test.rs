//! Tests for loading series settings from TOML.

use hotseat_tictactoe::SeriesConfig;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = SeriesConfig::default();
    assert!(*config.color());
    assert!(*config.clear_screen());
    assert_eq!(config.conflict_pause(), Duration::from_millis(1500));
}

#[test]
fn test_full_file() {
    let file = write_config(
        r#"
color = false
clear_screen = false
conflict_pause_ms = 250
"#,
    );

    let config = SeriesConfig::from_file(file.path()).unwrap();
    assert_eq!(
        config,
        SeriesConfig::default()
            .with_color(false)
            .with_clear_screen(false)
            .with_conflict_pause_ms(250)
    );
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("color = false\n");

    let config = SeriesConfig::from_file(file.path()).unwrap();
    assert!(!*config.color());
    assert!(*config.clear_screen());
    assert_eq!(*config.conflict_pause_ms(), 1500);
}

#[test]
fn test_empty_file_is_default() {
    let file = write_config("");
    assert_eq!(
        SeriesConfig::from_file(file.path()).unwrap(),
        SeriesConfig::default()
    );
}

#[test]
fn test_unknown_key_rejected() {
    let file = write_config("board_size = 4\n");

    let err = SeriesConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_wrong_type_rejected() {
    let file = write_config("conflict_pause_ms = \"soon\"\n");
    assert!(SeriesConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = SeriesConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error: "));
}
