//! Tally core - score tracking for tabletop card games.
//!
//! Pure logic with no terminal or filesystem access:
//!
//! - **Setup**: player count and game-type label ([`SetupForm`])
//! - **Names**: one name per player ([`NameForm`])
//! - **Game**: turn rotation and running totals ([`Tracker`], [`GameSession`])
//! - **Machine**: the three phases as a pure reducer ([`AppState::apply`])
//! - **Storage**: the [`Store`] capability and the saved-record codec
//!
//! # Example
//!
//! ```
//! use tally_core::{AppState, Event, GameType, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let state = AppState::boot(&store);
//! let (state, _) = state.apply(Event::SelectGameType(GameType::Hearts));
//! let (state, effects) = state.apply(Event::SubmitSetup);
//! assert!(effects.is_empty());
//! # let _ = state;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod machine;
mod player;
mod roster;
mod session;
mod setup;
mod storage;
mod theme;
mod tracker;

pub mod persistence;

pub use error::{StoreError, ValidationError};
pub use machine::{AppState, Effect, Event, Phase, PhaseKind};
pub use player::Player;
pub use roster::NameForm;
pub use session::GameSession;
pub use setup::{DEFAULT_PLAYERS, GameType, MAX_PLAYERS, MIN_PLAYERS, SetupChoice, SetupForm};
pub use storage::{MemoryStore, Store};
pub use theme::ThemePreference;
pub use tracker::{Tracker, parse_delta};
