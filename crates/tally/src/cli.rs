//! Command-line interface for tally.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - score tracker for tabletop card games
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Keep score for card games in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(long, global = true, default_value = "tally.toml")]
    pub config: PathBuf,

    /// Store file to use instead of the configured one
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the score tracker TUI
    Play,

    /// Print the saved scoreboard
    Status,

    /// Delete the saved game
    Reset,
}
