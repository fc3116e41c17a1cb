//! Error types for form validation and store access.

use derive_more::{Display, Error};
use tracing::instrument;

/// A user-visible validation failure that blocks a transition.
///
/// The [`Display`] text is exactly what the UI shows to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ValidationError {
    /// Setup was submitted without choosing a game type.
    #[display("Please select a game type.")]
    MissingGameType,
    /// At least one player name is empty or whitespace.
    #[display("Please enter all player names.")]
    BlankPlayerName,
    /// Player count outside `1..=8`.
    #[display("Number of players must be between 1 and 8.")]
    PlayerCountOutOfRange,
}

/// Store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}
