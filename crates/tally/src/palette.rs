//! Terminal colors for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};
use tally_core::ThemePreference;
use tracing::instrument;

/// Colors used by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Body text.
    pub text: Color,
    /// Titles and headings.
    pub title: Color,
    /// Focused field or selected entry.
    pub highlight: Color,
    /// Help lines and placeholders.
    pub muted: Color,
    /// Validation messages.
    pub error: Color,
    /// The player whose turn it is.
    pub current: Color,
}

impl Palette {
    /// Dark background, light text.
    pub const DARK: Self = Self {
        background: Color::Black,
        text: Color::Gray,
        title: Color::Cyan,
        highlight: Color::Yellow,
        muted: Color::DarkGray,
        error: Color::LightRed,
        current: Color::LightGreen,
    };

    /// Light background, dark text.
    pub const LIGHT: Self = Self {
        background: Color::White,
        text: Color::Black,
        title: Color::Blue,
        highlight: Color::Magenta,
        muted: Color::Gray,
        error: Color::Red,
        current: Color::Green,
    };

    /// Base style for blocks and plain text.
    #[instrument(level = "trace")]
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Bold title style.
    #[instrument(level = "trace")]
    pub fn title_style(&self) -> Style {
        self.base().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Style for the focused field.
    #[instrument(level = "trace")]
    pub fn focus_style(&self) -> Style {
        self.base().fg(self.highlight).add_modifier(Modifier::BOLD)
    }

    /// Style for help text.
    #[instrument(level = "trace")]
    pub fn muted_style(&self) -> Style {
        self.base().fg(self.muted)
    }

    /// Style for validation messages.
    #[instrument(level = "trace")]
    pub fn error_style(&self) -> Style {
        self.base().fg(self.error)
    }
}

impl From<ThemePreference> for Palette {
    #[instrument(level = "trace")]
    fn from(theme: ThemePreference) -> Self {
        if theme.dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_selects_palette() {
        let dark = ThemePreference::default();
        assert_eq!(Palette::from(dark), Palette::DARK);
        assert_eq!(Palette::from(dark.toggle()), Palette::LIGHT);
    }

    #[test]
    fn test_styles_use_palette_colors() {
        let palette = Palette::LIGHT;
        assert_eq!(palette.base().bg, Some(Color::White));
        assert_eq!(palette.title_style().fg, Some(Color::Blue));
        assert_eq!(palette.focus_style().fg, Some(Color::Magenta));
        assert_eq!(palette.muted_style().fg, Some(Color::Gray));
        assert_eq!(palette.error_style().fg, Some(Color::Red));
        assert!(palette.title_style().add_modifier.contains(Modifier::BOLD));
    }
}
