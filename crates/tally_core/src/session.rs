//! The game session: players in turn order and whose turn it is.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::Player;

/// Players in turn order plus the index of the player to act.
///
/// Serializes to the persisted record shape
/// `{"players":[{"name":..,"score":..}],"currentPlayerIndex":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    /// Players in turn order.
    players: Vec<Player>,
    /// Index into `players` of the player whose turn it is.
    current_player_index: usize,
}

impl GameSession {
    /// Starts a session with the first player to act.
    #[instrument(skip(players), fields(player_count = players.len()))]
    pub fn new(players: Vec<Player>) -> Self {
        debug!("Starting game session");
        Self {
            players,
            current_player_index: 0,
        }
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Returns the session after the current player scores `delta`.
    ///
    /// The turn passes to the next player, wrapping after the last one.
    /// Returns `None` when there is no current player or the score overflows.
    #[instrument(skip(self), fields(index = self.current_player_index))]
    pub fn scored(&self, delta: i64) -> Option<Self> {
        let updated = self.current_player()?.scored(delta)?;
        let mut players = self.players.clone();
        players[self.current_player_index] = updated;
        let current_player_index = (self.current_player_index + 1) % players.len();
        debug!(next = current_player_index, "Turn advanced");
        Some(Self {
            players,
            current_player_index,
        })
    }

    /// Checks the invariants a restored record must satisfy.
    pub fn check(&self) -> Result<(), &'static str> {
        if self.players.is_empty() {
            return Err("Session has no players");
        }
        if self.players.iter().any(|p| p.name().trim().is_empty()) {
            return Err("Session has a blank player name");
        }
        if self.current_player_index >= self.players.len() {
            return Err("Current player index out of range");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_players() -> GameSession {
        GameSession::new(vec![
            Player::rookie("Ann"),
            Player::rookie("Bo"),
            Player::rookie("Cy"),
        ])
    }

    #[test]
    fn test_scored_advances_turn() {
        let session = three_players().scored(0).expect("Valid score");
        let session = session.scored(5).expect("Valid score");
        assert_eq!(*session.players()[1].score(), 5);
        assert_eq!(*session.current_player_index(), 2);
    }

    #[test]
    fn test_scored_wraps_to_first_player() {
        let mut session = three_players();
        for _ in 0..3 {
            session = session.scored(1).expect("Valid score");
        }
        assert_eq!(*session.current_player_index(), 0);
        assert!(session.players().iter().all(|p| *p.score() == 1));
    }

    #[test]
    fn test_negative_delta_subtracts() {
        let session = GameSession::new(vec![Player::new("Ann".to_string(), 10)]);
        let session = session.scored(-3).expect("Valid score");
        assert_eq!(*session.players()[0].score(), 7);
        assert_eq!(*session.current_player_index(), 0);
    }

    #[test]
    fn test_overflow_rejected() {
        let session = GameSession::new(vec![Player::new("Ann".to_string(), i64::MAX)]);
        assert!(session.scored(1).is_none());
    }

    #[test]
    fn test_check_rejects_bad_index() {
        let session = GameSession {
            players: vec![Player::rookie("Ann")],
            current_player_index: 1,
        };
        assert!(session.check().is_err());
        assert!(three_players().check().is_ok());
    }
}
