//! Screen trait, transition type and the chrome shared by every screen.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tally_core::{AppState, Event};
use tracing::instrument;
use unicode_width::UnicodeWidthStr;

use crate::Palette;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`TallyController`](crate::TallyController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Nothing for the state machine to do.
    Stay,
    /// Feed an event to the state machine.
    Dispatch(Event),
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen of the score tracker.
///
/// Screens hold only UI state such as which field has focus. Everything the
/// user entered lives in the [`AppState`] passed to each call.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, state: &AppState, palette: &Palette);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> ScreenTransition;
}

/// Text for the chrome around a screen body.
#[derive(Debug, Clone, Copy)]
pub struct Chrome<'a> {
    /// Header title.
    pub title: &'a str,
    /// Key help shown at the bottom.
    pub help: &'a str,
    /// Validation message, if any.
    pub notice: Option<&'a str>,
}

/// Draws the header, notice line and help line, returning the body area.
pub fn render_chrome(
    frame: &mut Frame,
    state: &AppState,
    palette: &Palette,
    chrome: Chrome<'_>,
) -> Rect {
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    let theme_label = format!(" Ctrl+T: {} ", state.theme().label());
    let header = Paragraph::new(chrome.title)
        .style(palette.title_style())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(palette.base())
                .title(Line::from(theme_label).alignment(Alignment::Right)),
        );
    frame.render_widget(header, chunks[0]);

    let notice = Paragraph::new(chrome.notice.unwrap_or(""))
        .style(palette.error_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(palette.base()));
    frame.render_widget(notice, chunks[2]);

    let help = Paragraph::new(chrome.help)
        .style(palette.muted_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(palette.base()));
    frame.render_widget(help, chunks[3]);

    chunks[1]
}

/// Cursor position just after `text` inside a bordered single-line field.
///
/// The cursor stays on the field's last inner cell when the text is wider
/// than the field.
#[instrument(level = "trace", skip(text), fields(len = text.len()))]
pub fn field_cursor(area: Rect, text: &str) -> Position {
    let inner_width = area.width.saturating_sub(2);
    let offset = u16::try_from(text.width())
        .unwrap_or(u16::MAX)
        .min(inner_width.saturating_sub(1));
    Position::new(
        area.x.saturating_add(1).saturating_add(offset),
        area.y.saturating_add(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cursor_follows_text() {
        let area = Rect::new(4, 10, 20, 3);
        assert_eq!(field_cursor(area, ""), Position::new(5, 11));
        assert_eq!(field_cursor(area, "Ann"), Position::new(8, 11));
        assert_eq!(field_cursor(area, "界"), Position::new(7, 11));
    }

    #[test]
    fn test_field_cursor_stays_inside_narrow_field() {
        let area = Rect::new(4, 10, 8, 3);
        let long = "a".repeat(70_000);
        assert_eq!(field_cursor(area, &long), Position::new(10, 11));
        assert_eq!(field_cursor(Rect::new(0, 0, 1, 1), "abc"), Position::new(1, 1));
    }

    #[test]
    fn test_field_cursor_saturates_at_screen_edge() {
        let area = Rect {
            x: u16::MAX - 3,
            y: u16::MAX,
            width: 20,
            height: 3,
        };
        assert_eq!(
            field_cursor(area, "Bobby"),
            Position::new(u16::MAX, u16::MAX)
        );
    }
}
