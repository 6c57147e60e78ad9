//! Application state for the book browser
//!
//! Wraps the [`SearchController`] together with everything that only the
//! terminal UI cares about: focus, grid cursor, overlays, and the screen
//! areas remembered from the last render for mouse hit-testing.

use super::widgets::FilterFormState;
use crate::client::Endpoints;
use crate::output::result_summary;
use crate::search::{PendingSearch, SearchCompletion, SearchController, SearchNotice};
use crate::ui::output::MessageLevel;
use crate::view::BookDetails;
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
    /// Filter overlay is visible
    Filters,
    /// Detail view of one record is open
    Details,
}

/// Which part of the main screen receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The search bar
    #[default]
    Query,
    /// The result grid
    Results,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Application state for the book browser
#[derive(Debug)]
pub struct AppState {
    /// Query, field, filters and results
    pub controller: SearchController,
    /// Hosts used to build cover and record URLs
    pub endpoints: Endpoints,
    /// Cursor position within the query string (byte offset)
    pub query_cursor: usize,
    /// Current UI mode
    pub mode: Mode,
    /// Input focus in normal mode
    pub focus: Focus,
    /// Index of the highlighted card
    pub cursor: usize,
    /// First visible grid row
    pub scroll_row: usize,
    /// Cards per grid row (set during render)
    pub columns: usize,
    /// Grid rows that fit on screen (set during render)
    pub visible_rows: usize,
    /// Working copy of the filters while the overlay is open
    pub filter_form: Option<FilterFormState>,
    /// Record shown in the detail view
    pub details: Option<BookDetails>,
    /// Screen area of every visible card (set during render)
    pub card_areas: Vec<(usize, Rect)>,
    /// Screen area of the open modal (set during render)
    pub modal_area: Option<Rect>,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the browser should exit
    pub should_exit: bool,
    spinner_frame: usize,
}

impl AppState {
    /// Create browser state around a controller
    ///
    /// A query already present in the controller is kept and the cursor is
    /// placed at its end.
    #[must_use]
    pub fn new(controller: SearchController, endpoints: Endpoints) -> Self {
        let query_cursor = controller.query.len();
        Self {
            controller,
            endpoints,
            query_cursor,
            mode: Mode::Normal,
            focus: Focus::Query,
            cursor: 0,
            scroll_row: 0,
            columns: 1,
            visible_rows: 1,
            filter_form: None,
            details: None,
            card_areas: Vec::new(),
            modal_area: None,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
            spinner_frame: 0,
        }
    }

    fn result_count(&self) -> usize {
        self.controller.results().len()
    }

    /// Start a search for the current query and filters
    ///
    /// Returns the request to dispatch, or `None` when the query is empty or
    /// the filters do not validate (the controller then holds the notice).
    pub fn start_search(&mut self) -> Option<PendingSearch> {
        match self.controller.begin() {
            Ok(Some(pending)) => {
                self.cursor = 0;
                self.scroll_row = 0;
                Some(pending)
            }
            Ok(None) => None,
            Err(_) => {
                self.cursor = 0;
                self.scroll_row = 0;
                None
            }
        }
    }

    /// Apply a finished search; stale completions are ignored
    pub fn apply_completion(&mut self, completion: SearchCompletion) -> bool {
        let applied = self
            .controller
            .complete(completion.token, completion.outcome);
        if applied {
            self.cursor = 0;
            self.scroll_row = 0;
            if self.mode == Mode::Details {
                self.close_details();
            }
            if self.result_count() == 0 {
                self.focus = Focus::Query;
            }
        }
        applied
    }

    /// Advance the loading spinner
    pub const fn tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
    }

    // Grid navigation

    /// Move cursor one card left
    pub const fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor one card right
    pub fn cursor_right(&mut self) {
        if self.cursor + 1 < self.result_count() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor one row up; returns `false` when already on the top row
    pub fn cursor_up(&mut self) -> bool {
        let columns = self.columns.max(1);
        if self.cursor < columns {
            return false;
        }
        self.cursor -= columns;
        self.adjust_scroll();
        true
    }

    /// Move cursor one row down, landing on the last card of a short row
    pub fn cursor_down(&mut self) {
        let columns = self.columns.max(1);
        let last = self.result_count().saturating_sub(1);
        if self.cursor / columns < last / columns {
            self.cursor = (self.cursor + columns).min(last);
            self.adjust_scroll();
        }
    }

    /// Move cursor up by one page
    pub fn page_up(&mut self) {
        let step = self.columns.max(1) * self.visible_rows.max(1);
        self.cursor = self.cursor.saturating_sub(step);
        self.adjust_scroll();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self) {
        let step = self.columns.max(1) * self.visible_rows.max(1);
        self.cursor = (self.cursor + step).min(self.result_count().saturating_sub(1));
        self.adjust_scroll();
    }

    /// Jump to first card
    pub const fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last card
    pub fn jump_to_end(&mut self) {
        self.cursor = self.result_count().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Adjust scroll offset to keep the cursor's row visible
    pub const fn adjust_scroll(&mut self) {
        let columns = if self.columns == 0 { 1 } else { self.columns };
        let rows = if self.visible_rows == 0 { 1 } else { self.visible_rows };
        let row = self.cursor / columns;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + rows {
            self.scroll_row = row + 1 - rows;
        }
    }

    /// Move focus into the grid if it has anything to show
    pub fn focus_results(&mut self) -> bool {
        if self.result_count() == 0 {
            return false;
        }
        self.focus = Focus::Results;
        true
    }

    // Query editing

    /// Add a character to the query
    pub fn query_push(&mut self, c: char) {
        self.controller.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
    }

    /// Remove a character from the query (backspace)
    pub fn query_backspace(&mut self) {
        if self.query_cursor > 0 {
            let prev_char_boundary = self.controller.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.controller.query.remove(prev_char_boundary);
            self.query_cursor = prev_char_boundary;
        }
    }

    /// Delete character under cursor
    pub fn query_delete(&mut self) {
        if self.query_cursor < self.controller.query.len() {
            self.controller.query.remove(self.query_cursor);
        }
    }

    /// Move query cursor left
    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.controller.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move query cursor right
    pub fn query_cursor_right(&mut self) {
        let query = &self.controller.query;
        if self.query_cursor < query.len() {
            self.query_cursor = query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Move query cursor to the start or end
    pub fn query_cursor_edge(&mut self, end: bool) {
        self.query_cursor = if end { self.controller.query.len() } else { 0 };
    }

    /// Delete the word before the cursor
    pub fn query_delete_word(&mut self) {
        let query = &mut self.controller.query;
        let trimmed = query[..self.query_cursor].trim_end();
        if let Some(last_space) = trimmed.rfind(' ') {
            query.drain(last_space + 1..self.query_cursor);
            self.query_cursor = last_space + 1;
        } else {
            query.drain(..self.query_cursor);
            self.query_cursor = 0;
        }
    }

    /// Clear the query
    pub fn query_clear(&mut self) {
        self.controller.query.clear();
        self.query_cursor = 0;
    }

    /// Select the next search field
    pub fn next_field(&mut self) {
        self.controller.field = self.controller.field.next();
    }

    /// Select the previous search field
    pub fn prev_field(&mut self) {
        self.controller.field = self.controller.field.prev();
    }

    // Overlays

    /// Open the detail view for the highlighted card
    pub fn open_details(&mut self) -> bool {
        let Some(book) = self.controller.results().get(self.cursor) else {
            return false;
        };
        self.details = Some(BookDetails::new(book, &self.endpoints));
        self.mode = Mode::Details;
        true
    }

    /// Open the detail view for card `index`
    pub fn open_details_at(&mut self, index: usize) -> bool {
        if index >= self.result_count() {
            return false;
        }
        self.cursor = index;
        self.focus = Focus::Results;
        self.adjust_scroll();
        self.open_details()
    }

    /// Close the detail view, keeping results and cursor
    pub fn close_details(&mut self) {
        self.mode = Mode::Normal;
        self.details = None;
        self.modal_area = None;
    }

    /// Record URL of the open detail view, or of the highlighted card
    #[must_use]
    pub fn current_record_url(&self) -> Option<String> {
        if let Some(details) = &self.details {
            return Some(details.record_url.clone());
        }
        self.controller
            .results()
            .get(self.cursor)
            .map(|book| self.endpoints.record_url(&book.key))
    }

    /// Open the filter overlay on a copy of the live filters
    pub fn enter_filters(&mut self) {
        self.filter_form = Some(FilterFormState::from_input(&self.controller.filter_input));
        self.mode = Mode::Filters;
    }

    /// Close the filter overlay, discarding edits
    pub fn cancel_filters(&mut self) {
        self.filter_form = None;
        self.mode = Mode::Normal;
    }

    /// Close the filter overlay and adopt the edited filters
    ///
    /// Returns `true` if a search should run to apply them, which is the case
    /// whenever there is a query.
    pub fn apply_filters(&mut self) -> bool {
        self.mode = Mode::Normal;
        let Some(form) = self.filter_form.take() else {
            return false;
        };
        self.controller.filter_input = form.to_input();

        if !self.controller.query.trim().is_empty() {
            return true;
        }
        if let Err(err) = self.controller.filter_input.criteria() {
            self.add_message(MessageLevel::Error, err.to_string());
        }
        false
    }

    /// Mutable access to the filter form while the overlay is open
    pub const fn filter_form_mut(&mut self) -> Option<&mut FilterFormState> {
        self.filter_form.as_mut()
    }

    // Mouse hit-testing

    /// Index of the card drawn at a screen position
    #[must_use]
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.card_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(index, _)| *index)
    }

    /// Whether a screen position falls inside the open modal
    #[must_use]
    pub fn in_modal(&self, column: u16, row: u16) -> bool {
        self.modal_area
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    // Messages

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        self.messages.retain(|m| !m.is_expired(self.message_ttl));
    }

    /// The single line the status bar shows
    ///
    /// Loading beats search notices, which beat transient messages, which
    /// beat the result count.
    #[must_use]
    pub fn status_line(&self) -> Option<(MessageLevel, String)> {
        if let Some(request) = self.controller.in_flight() {
            return Some((
                MessageLevel::Info,
                format!(
                    "{} Searching {} for \"{}\"…",
                    SPINNER[self.spinner_frame],
                    request.field.as_str(),
                    request.query
                ),
            ));
        }

        if let Some(notice) = self.controller.notice() {
            let level = match notice {
                SearchNotice::NoResults { .. } => MessageLevel::Warning,
                SearchNotice::FetchFailed | SearchNotice::InvalidFilter(_) => MessageLevel::Error,
            };
            return Some((level, notice.to_string()));
        }

        if let Some(message) = self.active_messages().last() {
            return Some((message.level, message.text.clone()));
        }

        let raw = self.controller.raw_count();
        (raw > 0).then(|| {
            let shown = self.result_count();
            let level = if shown == 0 {
                MessageLevel::Warning
            } else {
                MessageLevel::Normal
            };
            (level, result_summary(shown, raw))
        })
    }

    /// Mark the browser to exit
    pub const fn exit(&mut self) {
        self.should_exit = true;
    }
}
