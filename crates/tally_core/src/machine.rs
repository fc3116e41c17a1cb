//! The application state machine.
//!
//! ```text
//! SETUP -> NAMES -> GAME -> (reset) -> SETUP
//! ```
//!
//! [`AppState::apply`] is a pure function of the current state and an
//! [`Event`]. Persistence happens elsewhere: each transition returns the
//! [`Effect`]s the caller must apply to its [`Store`].

use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

use crate::persistence::{load_session, load_theme};
use crate::{GameSession, GameType, NameForm, SetupForm, Store, ThemePreference, Tracker};

/// A user action fed into the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Choose how many players will play.
    SetPlayerCount(u8),
    /// Choose the game-type label.
    SelectGameType(GameType),
    /// Submit the setup form.
    SubmitSetup,
    /// Replace one player's name.
    EditName {
        /// Slot being edited.
        index: usize,
        /// New contents of the slot.
        value: String,
    },
    /// Submit the name form.
    SubmitNames,
    /// Replace the score input text.
    EditScore(String),
    /// Add the typed score to the current player.
    AddScore,
    /// Throw the game away and return to setup.
    Reset,
    /// Switch between light and dark palettes.
    ToggleTheme,
}

/// A persistence instruction produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the whole session.
    SaveSession(GameSession),
    /// Delete the saved session.
    ClearSession,
    /// Write the theme preference.
    SaveTheme(ThemePreference),
}

/// Which screen the machine is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Choosing player count and game type.
    Setup(SetupForm),
    /// Entering player names.
    Names(NameForm),
    /// Scoring turns.
    Game(Tracker),
}

/// Discriminant of [`Phase`], for callers that only care which screen to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    /// See [`Phase::Setup`].
    Setup,
    /// See [`Phase::Names`].
    Names,
    /// See [`Phase::Game`].
    Game,
}

impl Phase {
    /// Returns the discriminant of this phase.
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::Setup(_) => PhaseKind::Setup,
            Self::Names(_) => PhaseKind::Names,
            Self::Game(_) => PhaseKind::Game,
        }
    }
}

/// Everything the running app knows: the current phase and the theme.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct AppState {
    phase: Phase,
    theme: ThemePreference,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ThemePreference::default())
    }
}

impl AppState {
    /// Creates a state on a fresh setup form.
    #[instrument]
    pub fn new(theme: ThemePreference) -> Self {
        Self {
            phase: Phase::Setup(SetupForm::new()),
            theme,
        }
    }

    /// Builds the initial state from whatever `store` holds.
    ///
    /// Starts in the game phase when a valid session was saved, otherwise on
    /// the setup form.
    #[instrument(skip(store))]
    pub fn boot(store: &impl Store) -> Self {
        let theme = load_theme(store);
        let phase = match load_session(store) {
            Some(session) => Phase::Game(Tracker::new(session, None)),
            None => Phase::Setup(SetupForm::new()),
        };
        info!(phase = ?phase.kind(), theme = theme.label(), "Booted");
        Self { phase, theme }
    }

    /// Applies `event`, returning the next state and the effects to persist.
    ///
    /// Events that do not belong to the current phase are ignored.
    #[instrument(skip(self), fields(phase = ?self.phase.kind()))]
    pub fn apply(self, event: Event) -> (Self, Vec<Effect>) {
        let Self { phase, theme } = self;

        if event == Event::ToggleTheme {
            let theme = theme.toggle();
            debug!(theme = theme.label(), "Theme toggled");
            return (Self { phase, theme }, vec![Effect::SaveTheme(theme)]);
        }

        let (phase, effects) = match (phase, event) {
            (Phase::Setup(mut form), Event::SetPlayerCount(n)) => {
                // The form keeps the rejection as its notice.
                let _ = form.set_player_count(n);
                (Phase::Setup(form), Vec::new())
            }
            (Phase::Setup(mut form), Event::SelectGameType(game_type)) => {
                form.select_game_type(game_type);
                (Phase::Setup(form), Vec::new())
            }
            (Phase::Setup(mut form), Event::SubmitSetup) => match form.submit() {
                Ok(choice) => (Phase::Names(NameForm::new(choice)), Vec::new()),
                Err(_) => (Phase::Setup(form), Vec::new()),
            },
            (Phase::Names(mut form), Event::EditName { index, value }) => {
                form.edit_name(index, value);
                (Phase::Names(form), Vec::new())
            }
            (Phase::Names(mut form), Event::SubmitNames) => match form.submit() {
                Ok(session) => {
                    let effects = vec![Effect::SaveSession(session.clone())];
                    let tracker = Tracker::new(session, Some(*form.game_type()));
                    (Phase::Game(tracker), effects)
                }
                Err(_) => (Phase::Names(form), Vec::new()),
            },
            (Phase::Game(mut tracker), Event::EditScore(text)) => {
                tracker.edit_score(text);
                (Phase::Game(tracker), Vec::new())
            }
            (Phase::Game(mut tracker), Event::AddScore) => {
                let effects = if tracker.add_score() {
                    vec![Effect::SaveSession(tracker.session().clone())]
                } else {
                    Vec::new()
                };
                (Phase::Game(tracker), effects)
            }
            (Phase::Game(_), Event::Reset) => {
                info!("Game reset");
                (Phase::Setup(SetupForm::new()), vec![Effect::ClearSession])
            }
            (phase, event) => {
                warn!(phase = ?phase.kind(), event = ?event, "Event does not apply here");
                (phase, Vec::new())
            }
        };

        (Self { phase, theme }, effects)
    }
}
