//! Screen implementations, one per phase of the state machine.

mod game;
mod names;
mod setup;

pub use game::GameScreen;
pub use names::NamesScreen;
pub use setup::{SetupField, SetupScreen};
