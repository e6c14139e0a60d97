//! Color scheme for the dashboard TUI.

use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    /// Accent for focused/selected elements
    pub primary: Color,
    /// Positive values and enabled filter entries
    pub success: Color,
    /// De-emphasized text
    pub muted: Color,
    /// Normal text
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn value_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn trend_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn unselected_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn bar_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
