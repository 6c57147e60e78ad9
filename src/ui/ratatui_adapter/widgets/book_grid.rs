//! Result grid widget drawing one bordered card per record

use crate::ui::ratatui_adapter::theme::Theme;
use crate::view::{BookCard, COVER_PLACEHOLDER};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Rows a card occupies, borders included
pub const CARD_HEIGHT: u16 = 6;
/// Narrowest a card may get before the grid drops a column
pub const MIN_CARD_WIDTH: u16 = 34;
/// Upper bound on cards per row
pub const MAX_COLUMNS: usize = 4;

/// Result grid widget
pub struct BookGrid<'a> {
    cards: &'a [BookCard],
    areas: &'a [(usize, Rect)],
    cursor: usize,
    focused: bool,
    empty_message: &'a str,
    theme: &'a Theme,
}

impl<'a> BookGrid<'a> {
    /// Create a grid drawing `cards` into the precomputed `areas`
    #[must_use]
    pub const fn new(cards: &'a [BookCard], areas: &'a [(usize, Rect)], theme: &'a Theme) -> Self {
        Self {
            cards,
            areas,
            cursor: 0,
            focused: false,
            empty_message: "",
            theme,
        }
    }

    /// Highlight the card at `cursor`
    #[must_use]
    pub const fn cursor(mut self, cursor: usize, focused: bool) -> Self {
        self.cursor = cursor;
        self.focused = focused;
        self
    }

    /// Text shown when there are no cards
    #[must_use]
    pub const fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }

    /// Cards per row for a given width
    #[must_use]
    pub fn columns_for(width: u16) -> usize {
        usize::from(width / MIN_CARD_WIDTH).clamp(1, MAX_COLUMNS)
    }

    /// Card rows that fit in a given height
    #[must_use]
    pub fn rows_for(height: u16) -> usize {
        usize::from(height / CARD_HEIGHT).max(1)
    }

    /// Screen areas of the visible cards, starting at grid row `scroll_row`
    #[must_use]
    pub fn card_areas(area: Rect, count: usize, columns: usize, scroll_row: usize) -> Vec<(usize, Rect)> {
        let columns = columns.max(1);
        let Ok(column_count) = u16::try_from(columns) else {
            return Vec::new();
        };
        let card_width = area.width / column_count;
        let mut areas = Vec::new();
        if card_width == 0 {
            return areas;
        }

        for visible_row in 0..Self::rows_for(area.height) {
            let y = area.y + CARD_HEIGHT * u16::try_from(visible_row).unwrap_or(u16::MAX);
            if y + CARD_HEIGHT > area.y + area.height {
                break;
            }
            for column in 0..column_count {
                let index = (scroll_row + visible_row) * columns + usize::from(column);
                if index >= count {
                    return areas;
                }
                let x = area.x + column * card_width;
                let width = if column + 1 == column_count {
                    area.width - column * card_width
                } else {
                    card_width
                };
                areas.push((index, Rect::new(x, y, width, CARD_HEIGHT)));
            }
        }
        areas
    }

    fn card_lines(&self, card: &BookCard) -> Vec<Line<'static>> {
        let mut year_line = vec![Span::styled(card.year.clone(), self.theme.dimmed_style())];
        if card.has_ebook {
            year_line.push(Span::raw("  "));
            year_line.push(Span::styled("eBook", self.theme.badge_style()));
        }

        let cover = match card.cover.url() {
            Some(url) => Span::styled(url.to_string(), self.theme.dimmed_style()),
            None => Span::styled(
                format!("{COVER_PLACEHOLDER} no cover"),
                self.theme.dimmed_style(),
            ),
        };

        vec![
            Line::styled(
                card.title.clone(),
                self.theme.normal_style().add_modifier(Modifier::BOLD),
            ),
            Line::styled(card.author_line(), self.theme.author_style()),
            Line::from(year_line),
            Line::from(cover),
        ]
    }
}

impl Widget for BookGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.cards.is_empty() {
            let y = area.y + area.height / 2;
            let line_area = Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1);
            Paragraph::new(self.empty_message)
                .style(self.theme.dimmed_style())
                .alignment(Alignment::Center)
                .render(line_area, buf);
            return;
        }

        for (index, card_area) in self.areas {
            let Some(card) = self.cards.get(*index) else {
                continue;
            };
            let is_cursor = *index == self.cursor;
            let border_style = match (is_cursor, self.focused) {
                (true, true) => self.theme.cursor_style(),
                (true, false) => self.theme.info_style(),
                _ => self.theme.border_style(),
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} ", index + 1));

            Paragraph::new(self.card_lines(card))
                .block(block)
                .wrap(Wrap { trim: true })
                .render(*card_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_for_width() {
        assert_eq!(BookGrid::columns_for(20), 1);
        assert_eq!(BookGrid::columns_for(80), 2);
        assert_eq!(BookGrid::columns_for(500), MAX_COLUMNS);
    }

    #[test]
    fn test_card_areas_fill_rows_then_stop() {
        let area = Rect::new(0, 3, 80, 18);
        let areas = BookGrid::card_areas(area, 5, 2, 0);

        assert_eq!(areas.len(), 5);
        assert_eq!(areas[0], (0, Rect::new(0, 3, 40, CARD_HEIGHT)));
        assert_eq!(areas[1], (1, Rect::new(40, 3, 40, CARD_HEIGHT)));
        assert_eq!(areas[4], (4, Rect::new(0, 15, 40, CARD_HEIGHT)));
    }

    #[test]
    fn test_card_areas_respect_scroll_and_height() {
        let area = Rect::new(0, 0, 81, 12);
        let areas = BookGrid::card_areas(area, 20, 2, 3);

        assert_eq!(areas.len(), 4);
        assert_eq!(areas[0].0, 6);
        assert_eq!(areas[1].1.width, 41, "last column takes the remainder");
    }
}
