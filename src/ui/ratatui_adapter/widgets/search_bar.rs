//! Search bar widget for query input and field selection

use crate::model::SearchField;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const FIELDS: [SearchField; 3] = [SearchField::Title, SearchField::Author, SearchField::Subject];

/// Search bar widget that displays the field selector and the query with cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Cursor position in the query
    cursor: usize,
    /// Field the query is matched against
    field: SearchField,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the widget has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, field: SearchField, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            field,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn field_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for field in FIELDS {
            if field == self.field {
                spans.push(Span::styled(
                    format!("[{}]", field.label()),
                    self.theme.cursor_style(),
                ));
            } else {
                spans.push(Span::styled(
                    format!(" {} ", field.label()),
                    self.theme.dimmed_style(),
                ));
            }
        }
        spans.push(Span::styled(" ❯ ", self.theme.dimmed_style()));
        spans
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search (Tab: field) ");

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = self.field_spans();
        let cursor_span = Span::styled(
            if self.focused { "│" } else { "" },
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        );

        if self.query.is_empty() {
            spans.push(cursor_span);
            if !self.focused {
                spans.push(Span::styled("type a query", self.theme.dimmed_style()));
            }
        } else {
            let cursor = self.cursor.min(self.query.len());
            let (before, after) = self.query.split_at(cursor);
            spans.push(Span::raw(before));
            spans.push(cursor_span);
            spans.push(Span::raw(after));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
