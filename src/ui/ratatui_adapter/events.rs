//! Event handling for the ratatui TUI
//!
//! Handles keyboard and mouse events, mapping them to application actions.

use super::state::{AppState, Focus, Mode};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Run a search for the current query, field and filters
    StartSearch,
    /// Open a record page in the system browser
    OpenLink(String),
    /// Leave the browser
    Exit,
    /// No action taken
    Ignored,
}

/// Map one terminal event onto the state
pub fn handle_event(state: &mut AppState, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.exit();
        return EventResult::Exit;
    }

    match state.mode {
        Mode::Normal => handle_normal_mode(state, key),
        Mode::Help => handle_help_mode(state),
        Mode::Details => handle_details_mode(state, key),
        Mode::Filters => handle_filters_mode(state, key),
    }
}

/// Keys shared by both focus targets in normal mode
fn handle_global_key(state: &mut AppState, key: KeyEvent) -> Option<EventResult> {
    match key.code {
        KeyCode::F(1) => {
            state.mode = Mode::Help;
            Some(EventResult::Continue)
        }
        KeyCode::F(2) => {
            state.enter_filters();
            Some(EventResult::Continue)
        }
        KeyCode::Tab => {
            state.next_field();
            Some(EventResult::Continue)
        }
        KeyCode::BackTab => {
            state.prev_field();
            Some(EventResult::Continue)
        }
        _ => None,
    }
}

/// Handle events in normal mode
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    if let Some(result) = handle_global_key(state, key) {
        return result;
    }

    match state.focus {
        Focus::Query => handle_query_key(state, key),
        Focus::Results => handle_results_key(state, key),
    }
}

fn handle_query_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => EventResult::StartSearch,
        (KeyCode::Esc, _) => {
            state.exit();
            EventResult::Exit
        }
        (KeyCode::Down, _) => {
            if state.focus_results() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            EventResult::Continue
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            state.query_delete_word();
            EventResult::Continue
        }
        (KeyCode::Char('a'), KeyModifiers::CONTROL) | (KeyCode::Home, _) => {
            state.query_cursor_edge(false);
            EventResult::Continue
        }
        (KeyCode::Char('e'), KeyModifiers::CONTROL) | (KeyCode::End, _) => {
            state.query_cursor_edge(true);
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            state.query_backspace();
            EventResult::Continue
        }
        (KeyCode::Delete, _) => {
            state.query_delete();
            EventResult::Continue
        }
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

fn handle_results_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => state.cursor_left(),
        KeyCode::Right | KeyCode::Char('l') => state.cursor_right(),
        KeyCode::Up | KeyCode::Char('k') => {
            if !state.cursor_up() {
                state.focus = Focus::Query;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => state.cursor_down(),
        KeyCode::PageUp => state.page_up(),
        KeyCode::PageDown => state.page_down(),
        KeyCode::Home | KeyCode::Char('g') => state.jump_to_start(),
        KeyCode::End | KeyCode::Char('G') => state.jump_to_end(),

        KeyCode::Enter | KeyCode::Char(' ') => {
            state.open_details();
        }
        KeyCode::Char('o') => {
            return state
                .current_record_url()
                .map_or(EventResult::Ignored, EventResult::OpenLink);
        }
        KeyCode::Char('/') | KeyCode::Esc => state.focus = Focus::Query,
        KeyCode::Char('?') => state.mode = Mode::Help,
        KeyCode::Char('f') => state.enter_filters(),
        KeyCode::Char('q') => {
            state.exit();
            return EventResult::Exit;
        }

        _ => return EventResult::Ignored,
    }
    EventResult::Continue
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

fn handle_details_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Backspace => {
            state.close_details();
            EventResult::Continue
        }
        KeyCode::Char('o') => state
            .current_record_url()
            .map_or(EventResult::Ignored, EventResult::OpenLink),
        _ => EventResult::Ignored,
    }
}

fn handle_filters_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            state.cancel_filters();
            return EventResult::Continue;
        }
        (KeyCode::Enter, _) => {
            return if state.apply_filters() {
                EventResult::StartSearch
            } else {
                EventResult::Continue
            };
        }
        _ => {}
    }

    let Some(form) = state.filter_form_mut() else {
        return EventResult::Ignored;
    };

    match (key.code, key.modifiers) {
        (KeyCode::Tab | KeyCode::Down, _) => form.next_field(),
        (KeyCode::BackTab | KeyCode::Up, _) => form.prev_field(),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => form.clear_field(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => form.push(c),
        (KeyCode::Backspace, _) => form.backspace(),
        _ => return EventResult::Ignored,
    }
    EventResult::Continue
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    let click = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));

    match state.mode {
        Mode::Help if click => {
            state.mode = Mode::Normal;
            EventResult::Continue
        }
        Mode::Details if click => {
            // A click outside the modal only closes it
            if !state.in_modal(mouse.column, mouse.row) {
                state.close_details();
            }
            EventResult::Continue
        }
        Mode::Normal => match mouse.kind {
            // Scrolling takes focus to the grid so the cursor stays visible
            MouseEventKind::ScrollUp if state.focus_results() => {
                state.cursor_up();
                EventResult::Continue
            }
            MouseEventKind::ScrollDown if state.focus_results() => {
                state.cursor_down();
                EventResult::Continue
            }
            _ if click => state
                .card_at(mouse.column, mouse.row)
                .filter(|index| state.open_details_at(*index))
                .map_or(EventResult::Ignored, |_| EventResult::Continue),
            _ => EventResult::Ignored,
        },
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    Ok(handle_event(state, event::read()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Endpoints;
    use crate::model::SearchField;
    use crate::search::SearchController;
    use crate::testing::{MockSource, sample_books};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn empty_state() -> AppState {
        AppState::new(SearchController::new(SearchField::Title, 20), Endpoints::default())
    }

    fn loaded_state() -> AppState {
        let mut controller = SearchController::new(SearchField::Title, 20);
        controller.query = "classics".to_string();
        controller
            .run(&MockSource::returning(sample_books()))
            .unwrap();
        let mut state = AppState::new(controller, Endpoints::default());
        state.columns = 2;
        state.visible_rows = 2;
        state
    }

    #[test]
    fn test_typing_and_enter_start_search() {
        let mut state = empty_state();

        for c in "dune".chars() {
            assert_eq!(handle_event(&mut state, key(KeyCode::Char(c))), EventResult::Continue);
        }
        assert_eq!(state.controller.query, "dune");
        assert_eq!(handle_event(&mut state, key(KeyCode::Enter)), EventResult::StartSearch);
    }

    #[test]
    fn test_tab_cycles_field() {
        let mut state = empty_state();

        handle_event(&mut state, key(KeyCode::Tab));
        assert_eq!(state.controller.field, SearchField::Author);
        handle_event(&mut state, key(KeyCode::BackTab));
        handle_event(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.controller.field, SearchField::Subject);
    }

    #[test]
    fn test_escape_and_ctrl_c_exit() {
        let mut state = empty_state();
        assert_eq!(handle_event(&mut state, key(KeyCode::Esc)), EventResult::Exit);
        assert!(state.should_exit);

        let mut state = loaded_state();
        state.mode = Mode::Details;
        assert_eq!(handle_event(&mut state, ctrl('c')), EventResult::Exit);
    }

    #[test]
    fn test_down_enters_grid_only_with_results() {
        let mut state = empty_state();
        assert_eq!(handle_event(&mut state, key(KeyCode::Down)), EventResult::Ignored);
        assert_eq!(state.focus, Focus::Query);

        let mut state = loaded_state();
        handle_event(&mut state, key(KeyCode::Down));
        assert_eq!(state.focus, Focus::Results);
    }

    #[test]
    fn test_grid_navigation_and_return_to_query() {
        let mut state = loaded_state();
        state.focus = Focus::Results;

        handle_event(&mut state, key(KeyCode::Char('l')));
        assert_eq!(state.cursor, 1);
        handle_event(&mut state, key(KeyCode::Down));
        assert_eq!(state.cursor, 2, "short last row clamps to the last card");
        handle_event(&mut state, key(KeyCode::Up));
        assert_eq!(state.cursor, 0);
        handle_event(&mut state, key(KeyCode::Up));
        assert_eq!(state.focus, Focus::Query);
    }

    #[test]
    fn test_details_open_link_and_close() {
        let mut state = loaded_state();
        state.focus = Focus::Results;

        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.mode, Mode::Details);

        let result = handle_event(&mut state, key(KeyCode::Char('o')));
        assert_eq!(
            result,
            EventResult::OpenLink("https://openlibrary.org/works/OL893415W".to_string())
        );

        handle_event(&mut state, key(KeyCode::Esc));
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.controller.results().len(), 3);
    }

    #[test]
    fn test_filter_overlay_apply_triggers_search() {
        let mut state = loaded_state();

        handle_event(&mut state, key(KeyCode::F(2)));
        assert_eq!(state.mode, Mode::Filters);
        handle_event(&mut state, key(KeyCode::Char(' ')));
        handle_event(&mut state, key(KeyCode::Tab));
        for c in "1960".chars() {
            handle_event(&mut state, key(KeyCode::Char(c)));
        }

        assert_eq!(handle_event(&mut state, key(KeyCode::Enter)), EventResult::StartSearch);
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.controller.filter_input.ebook_only);
        assert_eq!(state.controller.filter_input.year_from, "1960");
    }

    #[test]
    fn test_filter_overlay_cancel_discards_edits() {
        let mut state = loaded_state();

        handle_event(&mut state, key(KeyCode::F(2)));
        handle_event(&mut state, key(KeyCode::Char(' ')));
        handle_event(&mut state, key(KeyCode::Esc));

        assert_eq!(state.mode, Mode::Normal);
        assert!(!state.controller.filter_input.ebook_only);
    }

    #[test]
    fn test_click_on_card_opens_details() {
        let mut state = loaded_state();
        state.card_areas = vec![(0, Rect::new(0, 3, 40, 6)), (1, Rect::new(40, 3, 40, 6))];

        assert_eq!(handle_event(&mut state, click(45, 5)), EventResult::Continue);
        assert_eq!(state.mode, Mode::Details);
        assert_eq!(state.cursor, 1);
        assert_eq!(state.focus, Focus::Results);
    }

    #[test]
    fn test_click_outside_modal_closes_it() {
        let mut state = loaded_state();
        state.card_areas = vec![(0, Rect::new(0, 3, 40, 6))];
        state.open_details();
        state.modal_area = Some(Rect::new(10, 5, 60, 20));

        handle_event(&mut state, click(20, 10));
        assert_eq!(state.mode, Mode::Details);

        assert_eq!(handle_event(&mut state, click(2, 4)), EventResult::Continue);
        assert_eq!(state.mode, Mode::Normal, "the click does not reach the card below");
    }

    #[test]
    fn test_scroll_moves_focus_to_grid() {
        let scroll_down = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });

        let mut state = loaded_state();
        assert_eq!(state.focus, Focus::Query);
        assert_eq!(handle_event(&mut state, scroll_down.clone()), EventResult::Continue);
        assert_eq!(state.focus, Focus::Results);
        assert_eq!(state.cursor, 2);

        let mut empty = empty_state();
        assert_eq!(handle_event(&mut empty, scroll_down), EventResult::Ignored);
        assert_eq!(empty.focus, Focus::Query);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut state = empty_state();
        handle_event(&mut state, key(KeyCode::F(1)));
        assert_eq!(state.mode, Mode::Help);

        handle_event(&mut state, key(KeyCode::Char('x')));
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.controller.query.is_empty());
    }
}
