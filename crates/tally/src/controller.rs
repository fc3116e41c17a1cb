//! Tally controller: owns the app state and the store, drives the screens.

use std::ops::ControlFlow;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use tally_core::{AppState, Effect, Event, PhaseKind, Store, persistence};
use tracing::{debug, error, info, instrument};

use crate::Palette;
use crate::screen::{Screen, ScreenTransition};
use crate::screens::{GameScreen, NamesScreen, SetupScreen};

/// Active screen, matching the phase of the state machine.
#[derive(Debug)]
enum ActiveScreen {
    Setup(SetupScreen),
    Names(NamesScreen),
    Game(GameScreen),
}

impl ActiveScreen {
    #[instrument]
    fn for_phase(kind: PhaseKind) -> Self {
        match kind {
            PhaseKind::Setup => Self::Setup(SetupScreen::new()),
            PhaseKind::Names => Self::Names(NamesScreen::new()),
            PhaseKind::Game => Self::Game(GameScreen::new()),
        }
    }

    fn kind(&self) -> PhaseKind {
        match self {
            Self::Setup(_) => PhaseKind::Setup,
            Self::Names(_) => PhaseKind::Names,
            Self::Game(_) => PhaseKind::Game,
        }
    }

    fn as_screen(&self) -> &dyn Screen {
        match self {
            Self::Setup(s) => s,
            Self::Names(s) => s,
            Self::Game(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Setup(s) => s,
            Self::Names(s) => s,
            Self::Game(s) => s,
        }
    }
}

/// Controller that drives the score tracker.
///
/// Key events go to the active screen; the events it produces are applied
/// to [`AppState`], and the resulting effects are written to the store.
/// Call [`TallyController::run`] to start the terminal event loop.
#[derive(Debug)]
pub struct TallyController<S: Store> {
    state: AppState,
    store: S,
    screen: ActiveScreen,
}

impl<S: Store> TallyController<S> {
    /// Boots from whatever `store` holds.
    #[instrument(skip(store))]
    pub fn new(store: S) -> Self {
        let state = AppState::boot(&store);
        let screen = ActiveScreen::for_phase(state.phase().kind());
        info!(phase = ?state.phase().kind(), "Creating TallyController");
        Self {
            state,
            store,
            screen,
        }
    }

    /// Returns the current application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the controller, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Applies `event` and persists whatever it changed.
    ///
    /// Store failures are logged; the in-memory state moves on regardless.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        let (next, effects) = state.apply(event);
        self.state = next;

        for effect in effects {
            self.persist(effect);
        }

        let kind = self.state.phase().kind();
        if kind != self.screen.kind() {
            info!(from = ?self.screen.kind(), to = ?kind, "Switching screen");
            self.screen = ActiveScreen::for_phase(kind);
        }
    }

    #[instrument(skip(self))]
    fn persist(&mut self, effect: Effect) {
        let result = match &effect {
            Effect::SaveSession(session) => persistence::save_session(&mut self.store, session),
            Effect::ClearSession => persistence::clear_session(&mut self.store),
            Effect::SaveTheme(theme) => persistence::save_theme(&mut self.store, *theme),
        };
        if let Err(e) = result {
            error!(error = %e, "Failed to persist change");
        }
    }

    /// Handles one key press.
    ///
    /// Ctrl+T toggles the theme and Esc or Ctrl+C quits from any screen;
    /// everything else goes to the active screen.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> ControlFlow<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let transition = match key.code {
            KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') if ctrl => ScreenTransition::Quit,
            KeyCode::Char('t') | KeyCode::Char('T') if ctrl => {
                ScreenTransition::Dispatch(Event::ToggleTheme)
            }
            _ => self.screen.as_screen_mut().handle_key(key, &self.state),
        };

        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => ControlFlow::Continue(()),
            ScreenTransition::Dispatch(event) => {
                self.dispatch(event);
                ControlFlow::Continue(())
            }
            ScreenTransition::Quit => ControlFlow::Break(()),
        }
    }

    /// Draws the active screen.
    pub fn render(&self, frame: &mut Frame) {
        let palette = Palette::from(*self.state.theme());
        self.screen.as_screen().render(frame, &self.state, &palette);
    }

    /// Runs the event loop until the user quits.
    ///
    /// Each key press is handled to completion before the next is read.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting tally event loop");

        loop {
            terminal.draw(|f| self.render(f))?;

            // Redraw on resize and other events; only key presses change state.
            if let TermEvent::Key(key) = event::read()? {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if self.handle_key(key).is_break() {
                    info!("Tally quitting");
                    return Ok(());
                }
            }
        }
    }
}
