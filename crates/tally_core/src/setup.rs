//! Setup phase: player count and game-type label.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::{debug, info, instrument};

use crate::ValidationError;

/// Fewest players a session may have.
pub const MIN_PLAYERS: u8 = 1;
/// Most players a session may have.
pub const MAX_PLAYERS: u8 = 8;
/// Player count preselected on a fresh setup form.
pub const DEFAULT_PLAYERS: u8 = 2;

/// Label for the kind of game being scored.
///
/// The label carries no scoring rules.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, strum::Display,
)]
pub enum GameType {
    /// Poker.
    Poker,
    /// Bridge.
    Bridge,
    /// Hearts.
    Hearts,
    /// Anything else.
    Other,
}

/// A validated setup, consumed when the name form is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SetupChoice {
    num_players: u8,
    game_type: GameType,
}

impl SetupChoice {
    /// Returns one empty name slot per player.
    pub fn placeholders(&self) -> Vec<String> {
        vec![String::new(); usize::from(self.num_players)]
    }
}

/// In-progress setup form.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SetupForm {
    num_players: u8,
    game_type: Option<GameType>,
    notice: Option<ValidationError>,
}

impl Default for SetupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupForm {
    /// Creates a form with the default player count and no game type.
    #[instrument]
    pub fn new() -> Self {
        Self {
            num_players: DEFAULT_PLAYERS,
            game_type: None,
            notice: None,
        }
    }

    /// Sets the player count.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PlayerCountOutOfRange`] outside `1..=8`;
    /// the form keeps its previous count.
    #[instrument(skip(self))]
    pub fn set_player_count(&mut self, num_players: u8) -> Result<(), ValidationError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            debug!(num_players, "Rejected player count");
            self.notice = Some(ValidationError::PlayerCountOutOfRange);
            return Err(ValidationError::PlayerCountOutOfRange);
        }
        self.num_players = num_players;
        self.notice = None;
        Ok(())
    }

    /// Chooses the game-type label.
    #[instrument(skip(self))]
    pub fn select_game_type(&mut self, game_type: GameType) {
        self.game_type = Some(game_type);
        self.notice = None;
    }

    /// Validates the form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingGameType`] if no game type is chosen.
    /// The error is also kept on the form for display.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Result<SetupChoice, ValidationError> {
        let Some(game_type) = self.game_type else {
            debug!("Setup submitted without a game type");
            self.notice = Some(ValidationError::MissingGameType);
            return Err(ValidationError::MissingGameType);
        };
        info!(num_players = self.num_players, %game_type, "Setup accepted");
        self.notice = None;
        Ok(SetupChoice {
            num_players: self.num_players,
            game_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_count_and_type_yields_placeholders() {
        for n in MIN_PLAYERS..=MAX_PLAYERS {
            for game_type in GameType::iter() {
                let mut form = SetupForm::new();
                form.set_player_count(n).expect("Count in range");
                form.select_game_type(game_type);
                let choice = form.submit().expect("Complete form");
                let names = choice.placeholders();
                assert_eq!(names.len(), usize::from(n));
                assert!(names.iter().all(String::is_empty));
            }
        }
    }

    #[test]
    fn test_submit_without_game_type_fails() {
        let mut form = SetupForm::new();
        assert_eq!(form.submit(), Err(ValidationError::MissingGameType));
        assert_eq!(*form.notice(), Some(ValidationError::MissingGameType));
    }

    #[test]
    fn test_count_out_of_range_keeps_previous() {
        let mut form = SetupForm::new();
        assert!(form.set_player_count(0).is_err());
        assert!(form.set_player_count(9).is_err());
        assert_eq!(*form.num_players(), DEFAULT_PLAYERS);
    }

    #[test]
    fn test_selecting_type_clears_notice() {
        let mut form = SetupForm::new();
        let _ = form.submit();
        form.select_game_type(GameType::Hearts);
        assert!(form.notice().is_none());
    }
}
