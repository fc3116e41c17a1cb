//! Tally - terminal score tracker for tabletop card games.
//!
//! # Architecture
//!
//! - **Controller**: owns the [`AppState`](tally_core::AppState) and a
//!   [`Store`](tally_core::Store), routes keys to screens
//! - **Screens**: setup, name entry and score tracking, drawn with ratatui
//! - **FileStore**: key/value store kept in one JSON file
//! - **Config**: `tally.toml` with store and log locations
//!
//! # Example
//!
//! ```no_run
//! use tally::{FileStore, TallyConfig, TallyController};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = TallyConfig::load_or_default("tally.toml")?;
//! let controller = TallyController::new(FileStore::new(config.store_path()));
//! # let _ = controller;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod controller;
mod file_store;
mod logging;
mod palette;
mod report;
mod screen;
mod screens;

pub use cli::{Cli, Command};
pub use config::{ConfigError, TallyConfig};
pub use controller::TallyController;
pub use file_store::FileStore;
pub use logging::init_tracing;
pub use palette::Palette;
pub use report::{scoreboard, status};
pub use screen::{Chrome, Screen, ScreenTransition, field_cursor, render_chrome};
pub use screens::{GameScreen, NamesScreen, SetupField, SetupScreen};
