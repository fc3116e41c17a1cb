//! Light/dark display preference.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Whether the UI draws with the dark palette.
///
/// Persisted as a bare JSON boolean, independent of the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemePreference {
    /// `true` for the dark palette.
    pub dark_mode: bool,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl ThemePreference {
    /// Returns the display label for this option.
    #[instrument]
    pub fn label(self) -> &'static str {
        if self.dark_mode { "Dark" } else { "Light" }
    }

    /// Toggles between dark and light.
    #[instrument]
    pub fn toggle(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
        }
    }
}
