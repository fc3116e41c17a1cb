//! Player records tracked across turns.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A named player and their running total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Display name, trimmed and non-empty.
    name: String,
    /// Cumulative score.
    score: i64,
}

impl Player {
    /// Creates a player with a zero score.
    pub fn rookie(name: impl Into<String>) -> Self {
        Self::new(name.into(), 0)
    }

    /// Returns a copy of this player with `delta` added to the score.
    ///
    /// Returns `None` if the sum overflows.
    pub fn scored(&self, delta: i64) -> Option<Self> {
        let score = self.score.checked_add(delta)?;
        Some(Self::new(self.name.clone(), score))
    }
}
