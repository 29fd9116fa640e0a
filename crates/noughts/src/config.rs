//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Top-level configuration file.
///
/// Every table and key is optional; missing values fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colours used by the terminal UI.
    theme: ThemeConfig,
    /// Where and how much to log.
    logging: LoggingConfig,
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        // Surface bad colours at load time rather than on first draw.
        config.theme.palette()?;
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Colour names for each cell treatment, in ratatui colour syntax.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Label colour for crosses.
    cross: String,
    /// Label colour for noughts.
    nought: String,
    /// Background of an ordinary cell.
    background: String,
    /// Background of cells on a winning line.
    win: String,
    /// Background of every cell after a draw.
    draw: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            cross: "blue".to_string(),
            nought: "red".to_string(),
            background: "reset".to_string(),
            win: "green".to_string(),
            draw: "#ffa500".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Resolves every colour name.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            cross: parse_color("cross", &self.cross)?,
            nought: parse_color("nought", &self.nought)?,
            background: parse_color("background", &self.background)?,
            win: parse_color("win", &self.win)?,
            draw: parse_color("draw", &self.draw)?,
        })
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value).map_err(|e| {
        ConfigError::new(format!("Invalid colour for theme.{}: {:?} ({})", key, value, e))
    })
}

/// Resolved theme colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Label colour for crosses.
    pub cross: Color,
    /// Label colour for noughts.
    pub nought: Color,
    /// Background of an ordinary cell.
    pub background: Color,
    /// Background of cells on a winning line.
    pub win: Color,
    /// Background of every cell after a draw.
    pub draw: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            cross: Color::Blue,
            nought: Color::Red,
            background: Color::Reset,
            win: Color::Green,
            draw: Color::Rgb(0xff, 0xa5, 0x00),
        }
    }
}

/// Logging destination and filter.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file written while the terminal UI runs.
    #[serde(default = "default_log_file")]
    file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            filter: default_filter(),
        }
    }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
