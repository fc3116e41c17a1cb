//! Tracing setup. Output goes to a file because the TUI owns the terminal.

use std::path::Path;

use tracing::instrument;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber writing to `log_path`.
///
/// The filter comes from `RUST_LOG`, defaulting to debug for the tally crates and info elsewhere.
/// Calling this twice is harmless; the second call keeps the first subscriber.
#[instrument(skip(log_path), fields(path = %log_path.display()))]
pub fn init_tracing(log_path: &Path) -> anyhow::Result<()> {
    let log_file = std::fs::File::create(log_path)?;
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tally=debug,tally_core=debug")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init();

    tracing::info!(path = %log_path.display(), "Tracing initialized");
    Ok(())
}
