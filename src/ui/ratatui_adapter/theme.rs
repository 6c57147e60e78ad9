//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the browser.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Color for the cursor card and focused borders
    pub cursor: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for author names
    pub author: Color,
    /// Background of the eBook badge
    pub badge: Color,
    /// Color for section labels in the detail view
    pub label: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            cursor: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            author: Color::Magenta,
            badge: Color::Green,
            label: Color::Blue,
        }
    }
}

impl Theme {
    /// Style for regular text
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor card and the focused input
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for author names
    #[must_use]
    pub fn author_style(&self) -> Style {
        Style::default().fg(self.author)
    }

    /// Style for the eBook badge
    #[must_use]
    pub fn badge_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.badge)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for labels in the detail view
    #[must_use]
    pub fn label_style(&self) -> Style {
        Style::default()
            .fg(self.label)
            .add_modifier(Modifier::BOLD)
    }
}
