//! Reading and writing the saved session and theme records.

use tracing::{debug, info, instrument, warn};

use crate::{GameSession, Store, StoreError, ThemePreference};

/// Key holding the serialized [`GameSession`].
pub const SESSION_KEY: &str = "gameData";
/// Key holding the serialized [`ThemePreference`].
pub const THEME_KEY: &str = "darkMode";

/// Loads the saved session.
///
/// Absent, unreadable, malformed and invariant-violating records all mean
/// "no prior session". Problems are logged and otherwise ignored.
#[instrument(skip(store))]
pub fn load_session(store: &impl Store) -> Option<GameSession> {
    let raw = match store.load(SESSION_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No saved session");
            return None;
        }
        Err(e) => {
            warn!(error = %e, "Could not read saved session, starting fresh");
            return None;
        }
    };

    let session: GameSession = match serde_json::from_str(&raw) {
        Ok(session) => session,
        Err(e) => {
            warn!(error = %e, "Discarding malformed saved session");
            return None;
        }
    };

    if let Err(reason) = session.check() {
        warn!(reason, "Discarding invalid saved session");
        return None;
    }

    info!(
        player_count = session.players().len(),
        index = session.current_player_index(),
        "Restored saved session"
    );
    Some(session)
}

/// Writes the whole session under [`SESSION_KEY`].
///
/// # Errors
///
/// Returns [`StoreError`] if encoding or the store write fails.
#[instrument(skip(store, session))]
pub fn save_session(store: &mut impl Store, session: &GameSession) -> Result<(), StoreError> {
    let raw = serde_json::to_string(session)?;
    store.save(SESSION_KEY, &raw)
}

/// Removes the saved session.
///
/// # Errors
///
/// Returns [`StoreError`] if the store cannot delete the key.
#[instrument(skip(store))]
pub fn clear_session(store: &mut impl Store) -> Result<(), StoreError> {
    store.remove(SESSION_KEY)
}

/// Loads the theme preference, defaulting to dark when absent or unreadable.
#[instrument(skip(store))]
pub fn load_theme(store: &impl Store) -> ThemePreference {
    match store.load(THEME_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Discarding malformed theme preference");
            ThemePreference::default()
        }),
        Ok(None) => ThemePreference::default(),
        Err(e) => {
            warn!(error = %e, "Could not read theme preference");
            ThemePreference::default()
        }
    }
}

/// Writes the theme preference under [`THEME_KEY`].
///
/// # Errors
///
/// Returns [`StoreError`] if encoding or the store write fails.
#[instrument(skip(store))]
pub fn save_theme(store: &mut impl Store, theme: ThemePreference) -> Result<(), StoreError> {
    let raw = serde_json::to_string(&theme)?;
    store.save(THEME_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, Player};

    #[test]
    fn test_session_round_trip() {
        let mut store = MemoryStore::new();
        let session = GameSession::new(vec![Player::rookie("Ann"), Player::rookie("Bo")])
            .scored(-4)
            .expect("Valid score");
        save_session(&mut store, &session).expect("Save failed");
        assert_eq!(load_session(&store), Some(session));
    }

    #[test]
    fn test_record_shape() {
        let mut store = MemoryStore::new();
        let session = GameSession::new(vec![Player::new("Ann".to_string(), 5)]);
        save_session(&mut store, &session).expect("Save failed");
        let raw = store.load(SESSION_KEY).expect("Load failed").expect("Stored");
        assert_eq!(
            raw,
            r#"{"players":[{"name":"Ann","score":5}],"currentPlayerIndex":0}"#
        );
    }

    #[test]
    fn test_malformed_session_is_fresh_start() {
        let mut store = MemoryStore::new();
        store.save(SESSION_KEY, "{not json").expect("Save failed");
        assert_eq!(load_session(&store), None);
    }

    #[test]
    fn test_out_of_range_index_is_fresh_start() {
        let mut store = MemoryStore::new();
        store
            .save(
                SESSION_KEY,
                r#"{"players":[{"name":"Ann","score":1}],"currentPlayerIndex":3}"#,
            )
            .expect("Save failed");
        assert_eq!(load_session(&store), None);
    }

    #[test]
    fn test_fractional_score_is_fresh_start() {
        let mut store = MemoryStore::new();
        store
            .save(
                SESSION_KEY,
                r#"{"players":[{"name":"Ann","score":1.5}],"currentPlayerIndex":0}"#,
            )
            .expect("Save failed");
        assert_eq!(load_session(&store), None);
    }

    #[test]
    fn test_theme_defaults_and_round_trips() {
        let mut store = MemoryStore::new();
        assert!(load_theme(&store).dark_mode);
        save_theme(&mut store, ThemePreference { dark_mode: false }).expect("Save failed");
        assert_eq!(store.load(THEME_KEY).expect("Load failed").as_deref(), Some("false"));
        assert!(!load_theme(&store).dark_mode);
    }
}
