//! Name collection: one name per player slot.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::{GameSession, GameType, Player, SetupChoice, ValidationError};

/// Name-entry form built from an accepted setup.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct NameForm {
    names: Vec<String>,
    game_type: GameType,
    notice: Option<ValidationError>,
}

impl NameForm {
    /// Creates one empty slot per player chosen during setup.
    #[instrument]
    pub fn new(choice: SetupChoice) -> Self {
        Self {
            names: choice.placeholders(),
            game_type: *choice.game_type(),
            notice: None,
        }
    }

    /// Replaces the name at `index`.
    ///
    /// The name list is rebuilt rather than edited in place, so earlier
    /// snapshots of [`NameForm::names`] never change. Out-of-range indexes
    /// are ignored.
    #[instrument(skip(self, value))]
    pub fn edit_name(&mut self, index: usize, value: impl Into<String>) {
        if index >= self.names.len() {
            debug!(index, slots = self.names.len(), "Ignoring edit outside name slots");
            return;
        }
        let value = value.into();
        self.names = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| if i == index { value.clone() } else { name.clone() })
            .collect();
        self.notice = None;
    }

    /// Builds the session from the entered names.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BlankPlayerName`] if any name is blank after
    /// trimming. The error is also kept on the form for display.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Result<GameSession, ValidationError> {
        if self.names.iter().any(|name| name.trim().is_empty()) {
            debug!("Names submitted with a blank entry");
            self.notice = Some(ValidationError::BlankPlayerName);
            return Err(ValidationError::BlankPlayerName);
        }
        let players: Vec<Player> = self.names.iter().map(|n| Player::rookie(n.trim())).collect();
        info!(player_count = players.len(), "Players registered");
        self.notice = None;
        Ok(GameSession::new(players))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SetupForm;

    fn form_for(n: u8) -> NameForm {
        let mut setup = SetupForm::new();
        setup.set_player_count(n).expect("Count in range");
        setup.select_game_type(GameType::Bridge);
        NameForm::new(setup.submit().expect("Complete form"))
    }

    #[test]
    fn test_edit_touches_only_one_slot() {
        let mut form = form_for(3);
        let before = form.names().clone();
        form.edit_name(1, "Bo");
        assert_eq!(before, vec!["", "", ""]);
        assert_eq!(form.names(), &vec!["", "Bo", ""]);
    }

    #[test]
    fn test_edit_out_of_range_ignored() {
        let mut form = form_for(2);
        form.edit_name(5, "Nobody");
        assert_eq!(form.names(), &vec!["", ""]);
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut form = form_for(2);
        form.edit_name(0, "Ann");
        form.edit_name(1, "   ");
        assert_eq!(form.submit(), Err(ValidationError::BlankPlayerName));
        assert_eq!(*form.notice(), Some(ValidationError::BlankPlayerName));
    }

    #[test]
    fn test_submit_builds_trimmed_players_in_order() {
        let mut form = form_for(3);
        form.edit_name(0, " Ann ");
        form.edit_name(1, "Bo");
        form.edit_name(2, "Cy\t");
        let session = form.submit().expect("All names present");
        let names: Vec<&str> = session.players().iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, ["Ann", "Bo", "Cy"]);
        assert!(session.players().iter().all(|p| *p.score() == 0));
        assert_eq!(*session.current_player_index(), 0);
    }
}
