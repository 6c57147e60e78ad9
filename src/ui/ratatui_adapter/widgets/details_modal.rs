//! Details modal widget for displaying one record

use crate::ui::ratatui_adapter::theme::Theme;
use crate::view::{BookDetails, Cover, COVER_PLACEHOLDER};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const LABEL_WIDTH: usize = 12;

/// Details modal widget that displays the full view of a record
pub struct DetailsModal<'a> {
    /// Record to display
    details: &'a BookDetails,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> DetailsModal<'a> {
    /// Create a new details modal
    #[must_use]
    pub const fn new(details: &'a BookDetails, theme: &'a Theme) -> Self {
        Self { details, theme }
    }

    /// Area the modal occupies inside `area`
    #[must_use]
    pub fn popup_area(area: Rect) -> Rect {
        super::centered_rect(80, 80, area)
    }

    fn field(&self, label: &'static str, value: Span<'static>) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<LABEL_WIDTH$}"), self.theme.label_style()),
            value,
        ])
    }

    fn list_field(&self, label: &'static str, values: &[String]) -> Line<'static> {
        let value = if values.is_empty() {
            Span::styled("-", self.theme.dimmed_style())
        } else {
            Span::raw(values.join(", "))
        };
        self.field(label, value)
    }

    /// Build content lines for the modal
    fn build_content(&self) -> Vec<Line<'static>> {
        let details = self.details;
        let ebook_style = if details.ebook_available {
            self.theme.success_style()
        } else {
            self.theme.dimmed_style()
        };
        let cover = match &details.cover {
            Cover::Image(url) => Span::styled(url.clone(), self.theme.info_style()),
            Cover::Placeholder => Span::styled(
                format!("{COVER_PLACEHOLDER} no cover"),
                self.theme.dimmed_style(),
            ),
        };

        vec![
            Line::styled(
                details.title.clone(),
                self.theme.normal_style().add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            self.list_field("Authors", &details.authors),
            self.field("Published", Span::raw(details.year.clone())),
            self.field("Editions", Span::raw(details.edition_count.to_string())),
            self.list_field("Languages", &details.languages),
            self.list_field("Subjects", &details.subjects),
            self.list_field("Publishers", &details.publishers),
            self.field("eBook", Span::styled(details.ebook_label(), ebook_style)),
            Line::default(),
            self.field("Cover", cover),
            self.field(
                "Link",
                Span::styled(
                    details.record_url.clone(),
                    self.theme.info_style().add_modifier(Modifier::UNDERLINED),
                ),
            ),
            Line::default(),
            Line::styled("o: open link   Esc: close", self.theme.dimmed_style()),
        ]
    }
}

impl Widget for DetailsModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::popup_area(area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Book Details ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Endpoints;
    use crate::testing::sample_books;

    fn rendered_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_modal_shows_fields_and_link() {
        let books = sample_books();
        let details = BookDetails::new(&books[0], &Endpoints::default());
        let theme = Theme::default();
        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);

        DetailsModal::new(&details, &theme).render(area, &mut buf);

        let text = rendered_text(&buf);
        assert!(text.contains("Dune"));
        assert!(text.contains("Editions"));
        assert!(text.contains("Available"));
        assert!(text.contains("openlibrary.org/works/"));
    }

    #[test]
    fn test_missing_lists_render_dash() {
        let books = sample_books();
        let details = BookDetails::new(&books[2], &Endpoints::default());
        let theme = Theme::default();
        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);

        DetailsModal::new(&details, &theme).render(area, &mut buf);

        assert!(rendered_text(&buf).contains("Publishers  -"));
    }
}
