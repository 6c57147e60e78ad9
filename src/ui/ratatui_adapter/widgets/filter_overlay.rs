//! Filter overlay widget for editing the client-side filters
//!
//! Edits a working copy of the filter form; the copy replaces the live
//! filters only when the user applies it.

use crate::filters::FilterError;
use crate::search::FilterInput;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget},
};

/// Fields that can be edited in the filter overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Ebook,
    YearFrom,
    YearTo,
}

impl FilterField {
    /// Get the label for this field
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ebook => "eBook only",
            Self::YearFrom => "Published from",
            Self::YearTo => "Published until",
        }
    }

    /// Get all fields in order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Ebook, Self::YearFrom, Self::YearTo]
    }

    /// Get next field (wrapping)
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Ebook => Self::YearFrom,
            Self::YearFrom => Self::YearTo,
            Self::YearTo => Self::Ebook,
        }
    }

    /// Get previous field (wrapping)
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Ebook => Self::YearTo,
            Self::YearFrom => Self::Ebook,
            Self::YearTo => Self::YearFrom,
        }
    }
}

/// Working copy of the filter form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterFormState {
    /// Currently selected field
    pub selected_field: FilterField,
    pub ebook_only: bool,
    pub year_from: String,
    pub year_to: String,
}

impl FilterFormState {
    /// Start editing from the live filter input
    #[must_use]
    pub fn from_input(input: &FilterInput) -> Self {
        Self {
            selected_field: FilterField::Ebook,
            ebook_only: input.ebook_only,
            year_from: input.year_from.clone(),
            year_to: input.year_to.clone(),
        }
    }

    /// The edited values as filter input
    #[must_use]
    pub fn to_input(&self) -> FilterInput {
        FilterInput {
            ebook_only: self.ebook_only,
            year_from: self.year_from.clone(),
            year_to: self.year_to.clone(),
        }
    }

    /// Validation error for the current values, if any
    #[must_use]
    pub fn error(&self) -> Option<FilterError> {
        self.to_input().criteria().err()
    }

    /// Move to next field
    pub fn next_field(&mut self) {
        self.selected_field = self.selected_field.next();
    }

    /// Move to previous field
    pub fn prev_field(&mut self) {
        self.selected_field = self.selected_field.prev();
    }

    /// Flip the eBook toggle
    pub const fn toggle_ebook(&mut self) {
        self.ebook_only = !self.ebook_only;
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.selected_field {
            FilterField::Ebook => None,
            FilterField::YearFrom => Some(&mut self.year_from),
            FilterField::YearTo => Some(&mut self.year_to),
        }
    }

    /// Type a character into the selected field
    ///
    /// On the eBook toggle, space flips the value and other keys are ignored.
    pub fn push(&mut self, c: char) {
        match self.text_mut() {
            Some(text) => text.push(c),
            None if c == ' ' => self.toggle_ebook(),
            None => {}
        }
    }

    /// Delete the last character of the selected field
    pub fn backspace(&mut self) {
        if let Some(text) = self.text_mut() {
            text.pop();
        }
    }

    /// Reset the selected field
    pub fn clear_field(&mut self) {
        match self.text_mut() {
            Some(text) => text.clear(),
            None => self.ebook_only = false,
        }
    }
}

/// Filter overlay widget
pub struct FilterOverlay<'a> {
    theme: &'a Theme,
    state: &'a FilterFormState,
}

impl<'a> FilterOverlay<'a> {
    /// Create a new filter overlay
    #[must_use]
    pub const fn new(theme: &'a Theme, state: &'a FilterFormState) -> Self {
        Self { theme, state }
    }

    /// Area the overlay occupies inside `area`
    #[must_use]
    pub fn popup_area(area: Rect) -> Rect {
        super::centered_rect(60, 50, area)
    }

    fn build_field_list(&self) -> Vec<ListItem<'static>> {
        FilterField::all()
            .iter()
            .map(|field| {
                let is_selected = *field == self.state.selected_field;
                let style = if is_selected {
                    self.theme.cursor_style()
                } else {
                    self.theme.normal_style()
                };

                let (value, value_style) = match field {
                    FilterField::Ebook => {
                        let checkbox = if self.state.ebook_only { "[✓]" } else { "[ ]" };
                        (checkbox.to_string(), self.theme.success_style())
                    }
                    FilterField::YearFrom | FilterField::YearTo => {
                        let text = if *field == FilterField::YearFrom {
                            &self.state.year_from
                        } else {
                            &self.state.year_to
                        };
                        if text.is_empty() && !is_selected {
                            ("(any)".to_string(), self.theme.dimmed_style())
                        } else if is_selected {
                            (format!("{text}│"), self.theme.success_style())
                        } else {
                            (text.clone(), self.theme.success_style())
                        }
                    }
                };

                let prefix = if is_selected { "▶ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(format!("{:<16}", field.label()), style),
                    Span::styled(value, value_style),
                ]))
            })
            .collect()
    }
}

impl Widget for FilterOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::popup_area(area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Filters ")
            .title_alignment(Alignment::Center);

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(2), // Header
            Constraint::Min(3),    // Fields
            Constraint::Length(1), // Validation
            Constraint::Length(1), // Help
        ])
        .split(inner);

        Paragraph::new("Narrow the results of the current search:")
            .style(self.theme.normal_style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        List::new(self.build_field_list()).render(chunks[1], buf);

        if let Some(err) = self.state.error() {
            Paragraph::new(err.to_string())
                .style(self.theme.error_style())
                .alignment(Alignment::Center)
                .render(chunks[2], buf);
        }

        Paragraph::new("↑↓/Tab: field | Space: toggle | Ctrl+U: clear | Enter: apply | Esc: cancel")
            .style(self.theme.dimmed_style())
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle() {
        assert_eq!(FilterField::Ebook.next(), FilterField::YearFrom);
        assert_eq!(FilterField::YearTo.next(), FilterField::Ebook);
        assert_eq!(FilterField::Ebook.prev(), FilterField::YearTo);
    }

    #[test]
    fn test_typing_goes_to_selected_field() {
        let mut form = FilterFormState::default();
        form.push('x');
        assert!(form.year_from.is_empty());

        form.push(' ');
        assert!(form.ebook_only);

        form.next_field();
        for c in "1965".chars() {
            form.push(c);
        }
        form.next_field();
        form.push('7');
        form.backspace();

        assert_eq!(form.year_from, "1965");
        assert!(form.year_to.is_empty());
    }

    #[test]
    fn test_round_trip_through_input() {
        let input = FilterInput {
            ebook_only: true,
            year_from: "1950".to_string(),
            year_to: String::new(),
        };
        let form = FilterFormState::from_input(&input);
        assert_eq!(form.to_input(), input);
        assert!(form.error().is_none());
    }

    #[test]
    fn test_invalid_year_reported() {
        let mut form = FilterFormState {
            selected_field: FilterField::YearTo,
            ..FilterFormState::default()
        };
        form.push('a');
        assert!(form.error().is_some());

        form.clear_field();
        assert!(form.error().is_none());
    }
}
