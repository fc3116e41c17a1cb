//! Tally - score tracker CLI.

use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tally::{Cli, Command, FileStore, TallyConfig, TallyController, init_tracing, status};
use tally_core::persistence;
use tracing::{error, info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TallyConfig::load_or_default(&cli.config)?;
    if let Some(store_path) = cli.store.clone() {
        config = config.with_store_path(store_path);
    }
    init_tracing(config.log_path())?;

    let store = FileStore::new(config.store_path());

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(store),
        Command::Status => {
            print!("{}", status(&store));
            Ok(())
        }
        Command::Reset => run_reset(store),
    }
}

/// Removes the saved game from the store.
#[instrument(skip(store), fields(path = %store.path().display()))]
fn run_reset(mut store: FileStore) -> Result<()> {
    persistence::clear_session(&mut store)?;
    info!("Saved game removed");
    println!("Saved game removed");
    Ok(())
}

/// Runs the score tracker TUI, restoring the terminal on exit.
#[instrument(skip(store), fields(path = %store.path().display()))]
fn run_tui(store: FileStore) -> Result<()> {
    info!("Starting tally TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = TallyController::new(store);
    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}
