//! Noughts - two-player tic-tac-toe in the terminal
//!
//! The game logic lives in [`noughts_rules`]; this crate supplies the
//! front ends that drive it.
//!
//! # Architecture
//!
//! - **View**: [`CellView`] implements the rules crate's presenter and keeps
//!   the label and colour treatment of every cell
//! - **TUI**: ratatui/crossterm front end rendering a [`CellView`]
//! - **Replay**: headless run over a list of cell indices
//! - **Config**: optional TOML file for theme colours and logging
//!
//! # Example
//!
//! ```
//! use noughts::replay;
//! use noughts_rules::Position;
//!
//! let moves: Vec<Position> = [0, 3, 1, 4, 2]
//!     .into_iter()
//!     .filter_map(Position::from_index)
//!     .collect();
//! let report = replay(&moves);
//! assert!(report.state.is_ended());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;
mod view;

pub use cli::{Cli, Command};
pub use config::{Config, ConfigError, LoggingConfig, Palette, ThemeConfig};
pub use replay::{replay, ReplayReport};
pub use tui::{run_tui, App};
pub use view::{status_text, Background, Cell, CellView, Foreground};
