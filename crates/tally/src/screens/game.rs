//! Score tracker screen: add scores turn by turn.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tally_core::{AppState, Event, Phase};
use tracing::{debug, info, instrument};

use crate::Palette;
use crate::screen::{Chrome, Screen, ScreenTransition, field_cursor, render_chrome};

/// State for the score tracker screen.
#[derive(Debug, Default)]
pub struct GameScreen;

impl GameScreen {
    /// Creates the score tracker screen.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing GameScreen");
        Self
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame, state, palette))]
    fn render(&self, frame: &mut Frame, state: &AppState, palette: &Palette) {
        let Phase::Game(tracker) = state.phase() else {
            return;
        };
        let title = match tracker.game_type() {
            Some(game_type) => format!("{} Score Tracker", game_type),
            None => "Score Tracker".to_string(),
        };
        let body = render_chrome(
            frame,
            state,
            palette,
            Chrome {
                title: &title,
                help: "Type score | Enter: Add Score | Ctrl+N: New Game | Esc: Quit",
                notice: None,
            },
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(body);

        let session = tracker.session();
        let current_name = session
            .current_player()
            .map(|p| p.name().as_str())
            .unwrap_or("");
        let current = Paragraph::new(Line::from(vec![
            Span::styled("Current Player: ", palette.base()),
            Span::styled(
                current_name,
                palette
                    .base()
                    .fg(palette.current)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        frame.render_widget(current, chunks[0]);

        let (input_text, input_style) = if tracker.score_input().is_empty() {
            ("Enter Score", palette.muted_style())
        } else {
            (tracker.score_input().as_str(), palette.focus_style())
        };
        let input = Paragraph::new(input_text).style(input_style).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Score")
                .style(palette.base()),
        );
        frame.render_widget(input, chunks[1]);
        frame.set_cursor_position(field_cursor(chunks[1], tracker.score_input()));

        let items: Vec<ListItem> = session
            .players()
            .iter()
            .enumerate()
            .map(|(index, player)| {
                let line = format!("{}: {}", player.name(), player.score());
                if index == *session.current_player_index() {
                    ListItem::new(line).style(palette.base().fg(palette.current))
                } else {
                    ListItem::new(line)
                }
            })
            .collect();
        let scores = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Current Scores")
                .style(palette.base()),
        );
        frame.render_widget(scores, chunks[2]);
    }

    #[instrument(skip(self, key, state))]
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> ScreenTransition {
        let Phase::Game(tracker) = state.phase() else {
            return ScreenTransition::Stay;
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('n') | KeyCode::Char('N') if ctrl => {
                info!("New game requested");
                ScreenTransition::Dispatch(Event::Reset)
            }
            KeyCode::Enter => ScreenTransition::Dispatch(Event::AddScore),
            KeyCode::Backspace => {
                let mut text = tracker.score_input().clone();
                text.pop();
                ScreenTransition::Dispatch(Event::EditScore(text))
            }
            KeyCode::Char(c) if !ctrl => {
                let mut text = tracker.score_input().clone();
                text.push(c);
                ScreenTransition::Dispatch(Event::EditScore(text))
            }
            _ => ScreenTransition::Stay,
        }
    }
}
