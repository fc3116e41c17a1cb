//! Turn tracker: the running game and its score-entry field.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::{GameSession, GameType};

/// Parses a score delta typed by the user.
///
/// Surrounding whitespace is ignored and a leading sign is allowed. Anything
/// that is not a whole number yields `None`.
pub fn parse_delta(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// The game phase: the session, the pending score input and the label shown
/// in the header.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Tracker {
    session: GameSession,
    score_input: String,
    /// Only known for sessions started in this run; it is not persisted.
    game_type: Option<GameType>,
}

impl Tracker {
    /// Wraps a session with an empty score field.
    #[instrument(skip(session))]
    pub fn new(session: GameSession, game_type: Option<GameType>) -> Self {
        Self {
            session,
            score_input: String::new(),
            game_type,
        }
    }

    /// Replaces the score input text.
    pub fn edit_score(&mut self, text: impl Into<String>) {
        self.score_input = text.into();
    }

    /// Adds the parsed input to the current player and passes the turn.
    ///
    /// Returns `true` when the session changed. Unparseable input, or a total
    /// that would overflow, leaves everything untouched, input included.
    #[instrument(skip(self), fields(input = %self.score_input))]
    pub fn add_score(&mut self) -> bool {
        let Some(delta) = parse_delta(&self.score_input) else {
            debug!("Ignoring non-numeric score input");
            return false;
        };
        let Some(session) = self.session.scored(delta) else {
            debug!(delta, "Score rejected");
            return false;
        };
        info!(delta, next = session.current_player_index(), "Score added");
        self.session = session;
        self.score_input.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn tracker() -> Tracker {
        let session = GameSession::new(vec![
            Player::rookie("Ann"),
            Player::rookie("Bo"),
            Player::rookie("Cy"),
        ]);
        Tracker::new(session, Some(GameType::Poker))
    }

    #[test]
    fn test_parse_delta() {
        assert_eq!(parse_delta("12"), Some(12));
        assert_eq!(parse_delta(" -3 "), Some(-3));
        assert_eq!(parse_delta("+4"), Some(4));
        assert_eq!(parse_delta(""), None);
        assert_eq!(parse_delta("abc"), None);
        assert_eq!(parse_delta("2.5"), None);
    }

    #[test]
    fn test_non_numeric_input_is_no_op() {
        let mut t = tracker();
        t.edit_score("ten");
        let before = t.session().clone();
        assert!(!t.add_score());
        assert_eq!(t.session(), &before);
        assert_eq!(t.score_input(), "ten");
    }

    #[test]
    fn test_add_score_clears_input_and_advances() {
        let mut t = tracker();
        t.edit_score("7");
        assert!(t.add_score());
        assert_eq!(*t.session().players()[0].score(), 7);
        assert_eq!(*t.session().current_player_index(), 1);
        assert!(t.score_input().is_empty());
    }
}
