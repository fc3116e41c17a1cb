//! Plain-text scoreboard for the `status` command.

use tally_core::{GameSession, Store, persistence};
use tracing::instrument;

/// Formats a session as one line per player, marking whose turn it is.
#[instrument(skip(session))]
pub fn scoreboard(session: &GameSession) -> String {
    let mut out = String::from("Current Scores\n");
    for (index, player) in session.players().iter().enumerate() {
        let marker = if index == *session.current_player_index() {
            "> "
        } else {
            "  "
        };
        out.push_str(&format!("{}{}: {}\n", marker, player.name(), player.score()));
    }
    out
}

/// Describes whatever `store` holds.
#[instrument(skip(store))]
pub fn status(store: &impl Store) -> String {
    match persistence::load_session(store) {
        Some(session) => scoreboard(&session),
        None => "No saved game\n".to_string(),
    }
}
