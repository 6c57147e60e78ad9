//! Browse command - interactive terminal browser

use crate::{
    BookFinderError,
    client::OpenLibraryClient,
    config::BookFinderConfig,
    model::SearchField,
    search::{FilterInput, SearchController},
    ui::{BookBrowser, ratatui_adapter::AppState},
};
use std::sync::Arc;
use tracing::info;

type Result<T> = std::result::Result<T, BookFinderError>;

/// Open the browser, searching `query` right away when it is not empty
///
/// # Errors
///
/// Returns `ClientError` if the HTTP client cannot be built and `UiError`
/// if the terminal fails.
pub fn execute(
    config: &BookFinderConfig,
    query: String,
    field: SearchField,
    filters: FilterInput,
) -> Result<()> {
    let client = OpenLibraryClient::new(config.endpoints(), config.timeout())?;

    let mut controller = SearchController::new(field, config.limit);
    controller.query = query;
    controller.filter_input = filters;

    info!(field = %field, "starting browser");
    let state = AppState::new(controller, config.endpoints());
    BookBrowser::new(Arc::new(client)).run(state)?;
    Ok(())
}
