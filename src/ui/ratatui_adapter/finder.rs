//! Interactive book browser
//!
//! Owns the terminal for the lifetime of the session, draws the search bar,
//! result grid and overlays, and feeds searches to a background worker so
//! the screen stays responsive while a request is in flight.

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, Focus, Mode};
use super::theme::Theme;
use super::widgets::{
    BookGrid, DetailsModal, FilterOverlay, HelpBar, HelpOverlay, SearchBar, StatusBar,
};
use crate::client::{BookSource, ClientError};
use crate::search::{SearchCompletion, SearchWorker};
use crate::ui::error::Result;
use crate::ui::output::MessageLevel;
use crate::view::BookCard;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Full-screen browser over a [`BookSource`]
pub struct BookBrowser {
    source: Arc<dyn BookSource>,
    theme: Theme,
}

impl BookBrowser {
    /// Create a browser that searches `source`
    #[must_use]
    pub fn new(source: Arc<dyn BookSource>) -> Self {
        Self {
            source,
            theme: Theme::default(),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the browser until the user quits
    ///
    /// A query already present in `state` is searched immediately.
    ///
    /// # Errors
    ///
    /// Returns `UiError::IoError` if the terminal cannot be set up or drawn to.
    pub fn run(&self, mut state: AppState) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, &mut state);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            warn!(error = %e, "terminal cleanup failed");
        }

        result
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut AppState,
    ) -> Result<()> {
        let worker = SearchWorker::new(Arc::clone(&self.source));

        if !state.controller.query.trim().is_empty() {
            start_search(state, &worker);
        }

        while !state.should_exit {
            for completion in worker.drain() {
                apply_completion(state, completion);
            }
            state.tick();
            state.cleanup_messages();

            terminal.draw(|frame| render(frame, state, &self.theme))?;

            let result = poll_and_handle(state, POLL_INTERVAL)?;
            handle_result(state, &worker, result, |url| open::that(url));
        }

        info!("browser closed");
        Ok(())
    }
}

/// Start a search and hand it to the worker
///
/// A failed dispatch completes the search as a fetch failure.
fn start_search(state: &mut AppState, worker: &SearchWorker) {
    let Some(pending) = state.start_search() else {
        return;
    };
    let token = pending.token;
    debug!(token, "dispatching search");

    if let Err(e) = worker.dispatch(pending) {
        warn!(error = %e, "could not start search thread");
        apply_completion(
            state,
            SearchCompletion {
                token,
                outcome: Err(ClientError::Worker(e)),
            },
        );
    }
}

fn apply_completion(state: &mut AppState, completion: SearchCompletion) {
    let token = completion.token;
    if !state.apply_completion(completion) {
        debug!(token, "dropped stale search result");
    }
}

/// Act on what an event asked for
fn handle_result(
    state: &mut AppState,
    worker: &SearchWorker,
    result: EventResult,
    open_url: impl FnOnce(&str) -> io::Result<()>,
) {
    match result {
        EventResult::StartSearch => start_search(state, worker),
        EventResult::OpenLink(url) => match open_url(&url) {
            Ok(()) => state.add_message(MessageLevel::Success, format!("Opened {url}")),
            Err(e) => {
                warn!(error = %e, url = %url, "failed to open link");
                state.add_message(MessageLevel::Error, format!("Could not open {url}: {e}"));
            }
        },
        EventResult::Continue | EventResult::Exit | EventResult::Ignored => {}
    }
}

/// Text shown in the grid area when there is nothing to show
fn empty_message(state: &AppState) -> String {
    if state.controller.is_loading() {
        "Searching…".to_string()
    } else if let Some(notice) = state.controller.notice() {
        notice.to_string()
    } else if state.controller.raw_count() > 0 {
        "No results match the current filters".to_string()
    } else {
        "Type a query and press Enter".to_string()
    }
}

/// Draw one frame and remember the areas mouse handling needs
fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let area = frame.area();

    let main_layout = Layout::vertical([
        Constraint::Length(3), // Search bar
        Constraint::Min(6),    // Result grid
        Constraint::Length(3), // Status bar
        Constraint::Length(1), // Help bar
    ])
    .split(area);

    let search_bar = SearchBar::new(
        &state.controller.query,
        state.query_cursor,
        state.controller.field,
        theme,
    )
    .focused(state.mode == Mode::Normal && state.focus == Focus::Query);
    frame.render_widget(search_bar, main_layout[0]);

    let grid_area = main_layout[1];
    state.columns = BookGrid::columns_for(grid_area.width);
    state.visible_rows = BookGrid::rows_for(grid_area.height);
    state.adjust_scroll();

    let cards: Vec<BookCard> = state
        .controller
        .results()
        .iter()
        .map(|book| BookCard::new(book, &state.endpoints))
        .collect();
    state.card_areas = BookGrid::card_areas(grid_area, cards.len(), state.columns, state.scroll_row);

    let empty = empty_message(state);
    let grid = BookGrid::new(&cards, &state.card_areas, theme)
        .cursor(state.cursor, state.focus == Focus::Results)
        .empty_message(&empty);
    frame.render_widget(grid, grid_area);

    let status = state.status_line();
    let filters = state
        .controller
        .filter_input
        .criteria()
        .map_or_else(|_| "invalid".to_string(), |criteria| criteria.summary());
    frame.render_widget(StatusBar::new(status.as_ref(), &filters, theme), main_layout[2]);

    let hints = HelpBar::hints_for(state.mode, state.focus);
    frame.render_widget(HelpBar::new(&hints, theme), main_layout[3]);

    render_overlays(frame, state, theme);
}

/// Render overlays (help, filters, details)
fn render_overlays(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let area = frame.area();
    state.modal_area = None;

    match state.mode {
        Mode::Help => frame.render_widget(HelpOverlay::new(theme), area),
        Mode::Filters => {
            if let Some(form) = &state.filter_form {
                frame.render_widget(FilterOverlay::new(theme, form), area);
            }
        }
        Mode::Details => {
            if let Some(details) = &state.details {
                frame.render_widget(DetailsModal::new(details, theme), area);
                state.modal_area = Some(DetailsModal::popup_area(area));
            }
        }
        Mode::Normal => {}
    }
}
