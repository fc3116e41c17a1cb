//! Setup screen: choose the number of players and the game type.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tally_core::{AppState, Event, GameType, MAX_PLAYERS, MIN_PLAYERS, Phase};
use tracing::{debug, info, instrument};

use crate::Palette;
use crate::screen::{Chrome, Screen, ScreenTransition, render_chrome};

/// Which setup field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupField {
    /// The 1-8 player-count selector.
    #[default]
    PlayerCount,
    /// The game-type list.
    GameType,
}

impl SetupField {
    fn toggle(self) -> Self {
        match self {
            Self::PlayerCount => Self::GameType,
            Self::GameType => Self::PlayerCount,
        }
    }
}

/// State for the setup screen.
#[derive(Debug, Default)]
pub struct SetupScreen {
    focus: SetupField,
}

impl SetupScreen {
    /// Creates a setup screen with the player count focused.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing SetupScreen");
        Self::default()
    }

    /// Returns the focused field.
    pub fn focus(&self) -> SetupField {
        self.focus
    }

    /// Returns the game type next to `current`, wrapping at either end.
    #[instrument]
    fn cycle_game_type(current: Option<GameType>, forward: bool) -> GameType {
        let all: Vec<GameType> = GameType::iter().collect();
        let next = match current.and_then(|t| all.iter().position(|a| *a == t)) {
            Some(i) if forward => (i + 1) % all.len(),
            Some(i) => (i + all.len() - 1) % all.len(),
            None if forward => 0,
            None => all.len() - 1,
        };
        all[next]
    }
}

impl Screen for SetupScreen {
    #[instrument(skip(self, frame, state, palette))]
    fn render(&self, frame: &mut Frame, state: &AppState, palette: &Palette) {
        let Phase::Setup(form) = state.phase() else {
            return;
        };
        let notice = form.notice().map(|e| e.to_string());
        let body = render_chrome(
            frame,
            state,
            palette,
            Chrome {
                title: "Game Setup",
                help: "Tab: Switch field | ←→: Players | ↑↓: Game type | Enter: Next | q: Quit",
                notice: notice.as_deref(),
            },
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(4)])
            .split(body);

        let count_style = if self.focus == SetupField::PlayerCount {
            palette.focus_style()
        } else {
            palette.base()
        };
        let count = Paragraph::new(format!("◀ {} ▶", form.num_players()))
            .style(count_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Number of Players")
                    .style(palette.base()),
            );
        frame.render_widget(count, chunks[0]);

        // Row 0 is the placeholder; it is shown but never selectable.
        let mut items = vec![ListItem::new("Select game type").style(palette.muted_style())];
        items.extend(GameType::iter().map(|t| ListItem::new(t.to_string())));
        let selected = form
            .game_type()
            .and_then(|t| GameType::iter().position(|a| a == t))
            .map(|i| i + 1)
            .unwrap_or(0);

        let list_style = if self.focus == SetupField::GameType {
            palette.focus_style()
        } else {
            palette.base()
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Game Type")
                    .style(palette.base()),
            )
            .highlight_style(list_style)
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        frame.render_stateful_widget(list, chunks[1], &mut list_state);
    }

    #[instrument(skip(self, key, state))]
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> ScreenTransition {
        let Phase::Setup(form) = state.phase() else {
            return ScreenTransition::Stay;
        };
        let count = *form.num_players();

        match (self.focus, key.code) {
            (_, KeyCode::Tab | KeyCode::BackTab) => {
                self.focus = self.focus.toggle();
                ScreenTransition::Stay
            }
            (_, KeyCode::Enter) => {
                info!("Setup submitted");
                ScreenTransition::Dispatch(Event::SubmitSetup)
            }
            (_, KeyCode::Char('q') | KeyCode::Char('Q')) => ScreenTransition::Quit,
            (SetupField::PlayerCount, KeyCode::Left | KeyCode::Char('-')) if count > MIN_PLAYERS => {
                ScreenTransition::Dispatch(Event::SetPlayerCount(count - 1))
            }
            (SetupField::PlayerCount, KeyCode::Right | KeyCode::Char('+')) if count < MAX_PLAYERS => {
                ScreenTransition::Dispatch(Event::SetPlayerCount(count + 1))
            }
            (SetupField::PlayerCount, KeyCode::Char(c)) if c.is_ascii_digit() => {
                let n = c.to_digit(10).map(|d| d as u8).unwrap_or_default();
                ScreenTransition::Dispatch(Event::SetPlayerCount(n))
            }
            (SetupField::PlayerCount, KeyCode::Down) => {
                self.focus = SetupField::GameType;
                ScreenTransition::Stay
            }
            (SetupField::GameType, KeyCode::Down) => ScreenTransition::Dispatch(
                Event::SelectGameType(Self::cycle_game_type(*form.game_type(), true)),
            ),
            (SetupField::GameType, KeyCode::Up) => ScreenTransition::Dispatch(
                Event::SelectGameType(Self::cycle_game_type(*form.game_type(), false)),
            ),
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_game_type_wraps() {
        assert_eq!(SetupScreen::cycle_game_type(None, true), GameType::Poker);
        assert_eq!(SetupScreen::cycle_game_type(None, false), GameType::Other);
        assert_eq!(
            SetupScreen::cycle_game_type(Some(GameType::Other), true),
            GameType::Poker
        );
        assert_eq!(
            SetupScreen::cycle_game_type(Some(GameType::Poker), false),
            GameType::Other
        );
    }
}
