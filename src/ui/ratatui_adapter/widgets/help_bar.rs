//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::state::{Focus, Mode};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "F2")
    pub key: &'static str,
    /// Action description (e.g., "search", "filters")
    pub action: &'static str,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the given mode and focus
    #[must_use]
    pub fn hints_for(mode: Mode, focus: Focus) -> Vec<KeyHint> {
        match (mode, focus) {
            (Mode::Normal, Focus::Query) => vec![
                KeyHint::new("Enter", "search"),
                KeyHint::new("Tab", "field"),
                KeyHint::new("↓", "results"),
                KeyHint::new("F2", "filters"),
                KeyHint::new("F1", "help"),
                KeyHint::new("Esc", "quit"),
            ],
            (Mode::Normal, Focus::Results) => vec![
                KeyHint::new("←↑↓→", "move"),
                KeyHint::new("Enter", "details"),
                KeyHint::new("o", "open"),
                KeyHint::new("/", "query"),
                KeyHint::new("f", "filters"),
                KeyHint::new("?", "help"),
                KeyHint::new("q", "quit"),
            ],
            (Mode::Details, _) => vec![KeyHint::new("o", "open link"), KeyHint::new("Esc", "close")],
            (Mode::Filters, _) => vec![
                KeyHint::new("Tab", "next"),
                KeyHint::new("Space", "toggle"),
                KeyHint::new("Enter", "apply"),
                KeyHint::new("Esc", "cancel"),
            ],
            (Mode::Help, _) => vec![KeyHint::new("any key", "close")],
        }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key, self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
