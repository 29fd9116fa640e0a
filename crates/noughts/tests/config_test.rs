//! Tests for configuration loading.

use noughts::{Config, Palette};
use ratatui::style::Color;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.theme().palette().unwrap(), Palette::default());
}

#[test]
fn test_file_overrides_theme_and_logging() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r##"
[theme]
cross = "cyan"
draw = "#112233"

[logging]
file = "game.log"
filter = "noughts=debug"
"##
    )
    .unwrap();

    let config = Config::load_or_default(file.path()).unwrap();
    let palette = config.theme().palette().unwrap();
    assert_eq!(palette.cross, Color::Cyan);
    assert_eq!(palette.draw, Color::Rgb(0x11, 0x22, 0x33));
    assert_eq!(palette.nought, Color::Red);
    assert_eq!(config.logging().file(), &PathBuf::from("game.log"));
    assert_eq!(config.logging().filter(), "noughts=debug");
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[theme\ncross = ").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"), "{}", err);
}

#[test]
fn test_unreadable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"), "{}", err);
}
