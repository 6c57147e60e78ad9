//! Help overlay widget for displaying full keybind reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn heading(&self, text: &'static str) -> Line<'static> {
        Line::styled(
            text,
            self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
        )
    }

    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {key:<14}"), self.theme.info_style()),
            Span::raw(desc),
        ])
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            self.heading("  Search bar"),
            Line::default(),
            self.help_line("Type", "Edit the query"),
            self.help_line("Enter", "Search"),
            self.help_line("Tab/Shift+Tab", "Title / Author / Subject"),
            self.help_line("↓", "Move into the results"),
            self.help_line("Ctrl+U", "Clear query"),
            self.help_line("Ctrl+W", "Delete word"),
            self.help_line("Esc", "Quit"),
            Line::default(),
            self.heading("  Results"),
            Line::default(),
            self.help_line("←↑↓→ / hjkl", "Move between cards"),
            self.help_line("PgUp/PgDn", "Page up/down"),
            self.help_line("Home/End", "First/last card"),
            self.help_line("Enter/Space", "Show details"),
            self.help_line("o", "Open record in browser"),
            self.help_line("/ or Esc", "Back to the search bar"),
            self.help_line("q", "Quit"),
            Line::default(),
            self.heading("  Anywhere"),
            Line::default(),
            self.help_line("F2 (f)", "Filters: eBook, year range"),
            self.help_line("F1 (?)", "This help"),
            self.help_line("Mouse", "Click a card for details, scroll to move"),
            self.help_line("Ctrl+C", "Quit"),
            Line::default(),
            Line::styled("  Press any key to close", self.theme.dimmed_style()),
        ]
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = super::centered_rect(60, 80, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
