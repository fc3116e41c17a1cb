//! Name entry screen: one text field per player.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
};
use tally_core::{AppState, Event, Phase};
use tracing::{debug, info, instrument};

use crate::Palette;
use crate::screen::{Chrome, Screen, ScreenTransition, field_cursor, render_chrome};

/// State for the name entry screen.
#[derive(Debug, Default)]
pub struct NamesScreen {
    focus: usize,
}

impl NamesScreen {
    /// Creates a name screen with the first field focused.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing NamesScreen");
        Self::default()
    }

    /// Returns the index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    fn edit(&self, names: &[String], edit: impl FnOnce(&mut String)) -> ScreenTransition {
        let Some(current) = names.get(self.focus) else {
            return ScreenTransition::Stay;
        };
        let mut value = current.clone();
        edit(&mut value);
        ScreenTransition::Dispatch(Event::EditName {
            index: self.focus,
            value,
        })
    }
}

impl Screen for NamesScreen {
    #[instrument(skip(self, frame, state, palette))]
    fn render(&self, frame: &mut Frame, state: &AppState, palette: &Palette) {
        let Phase::Names(form) = state.phase() else {
            return;
        };
        let notice = form.notice().map(|e| e.to_string());
        let body = render_chrome(
            frame,
            state,
            palette,
            Chrome {
                title: "Enter Player Names",
                help: "Type name | ↑↓/Tab: Move | Enter: Start Game | Esc: Quit",
                notice: notice.as_deref(),
            },
        );

        let names = form.names();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                names
                    .iter()
                    .map(|_| Constraint::Length(3))
                    .chain(std::iter::once(Constraint::Min(0))),
            )
            .split(body);

        for (index, name) in names.iter().enumerate() {
            let focused = index == self.focus;
            let (text, style) = if name.is_empty() && !focused {
                (format!("Player {} Name", index + 1), palette.muted_style())
            } else if focused {
                (name.clone(), palette.focus_style())
            } else {
                (name.clone(), palette.base())
            };
            let field = Paragraph::new(text).style(style).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Player {}", index + 1))
                    .style(palette.base()),
            );
            frame.render_widget(field, rows[index]);

            if focused {
                frame.set_cursor_position(field_cursor(rows[index], name));
            }
        }
    }

    #[instrument(skip(self, key, state))]
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> ScreenTransition {
        let Phase::Names(form) = state.phase() else {
            return ScreenTransition::Stay;
        };
        let slots = form.names().len();
        if slots == 0 {
            return ScreenTransition::Stay;
        }

        match key.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.focus = (self.focus + slots - 1) % slots;
                ScreenTransition::Stay
            }
            KeyCode::Down | KeyCode::Tab => {
                self.focus = (self.focus + 1) % slots;
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                info!("Names submitted");
                ScreenTransition::Dispatch(Event::SubmitNames)
            }
            KeyCode::Backspace => self.edit(form.names(), |value| {
                value.pop();
            }),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit(form.names(), |value| value.push(c))
            }
            _ => ScreenTransition::Stay,
        }
    }
}
