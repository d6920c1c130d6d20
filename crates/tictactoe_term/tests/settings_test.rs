//! Loading settings from files.

use std::io::Write;
use tictactoe_term::{DEFAULT_CONFIG_FILE, Settings};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "show_hints = false\nhistory_limit = 3\nlog_filter = \"debug\"")
        .expect("write settings");

    let settings = Settings::load(Some(file.path())).expect("valid settings");
    assert!(!*settings.show_hints());
    assert_eq!(*settings.history_limit(), 3);
    assert_eq!(settings.log_filter(), "debug");
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");
    let err = Settings::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read settings file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "history_limit = \"many\"").expect("write settings");
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse settings"));
}

#[test]
fn test_default_file_absent_gives_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let settings = Settings::load_in(dir.path(), None).expect("defaults");
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_default_file_present_is_read() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "history_limit = 2\n")
        .expect("write settings");

    let settings = Settings::load_in(dir.path(), None).expect("valid settings");
    assert_eq!(*settings.history_limit(), 2);
    assert!(*settings.show_hints());
}

#[test]
fn test_explicit_path_wins_over_default_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "history_limit = 2\n")
        .expect("write default settings");
    let explicit = dir.path().join("other.toml");
    std::fs::write(&explicit, "history_limit = 7\n").expect("write explicit settings");

    let settings =
        Settings::load_in(dir.path(), Some(explicit.as_path())).expect("valid settings");
    assert_eq!(*settings.history_limit(), 7);
}
