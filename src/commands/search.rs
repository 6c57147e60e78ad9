//! Search command - one-shot search printed to the terminal

use crate::{
    BookFinderError,
    client::BookSource,
    config::BookFinderConfig,
    model::SearchField,
    output::{format_card, format_details, result_summary},
    search::{FilterInput, SearchController, SearchNotice},
    ui::OutputWriter,
    view::{BookCard, BookDetails},
};
use std::io::{self, Write};
use tracing::info;

type Result<T> = std::result::Result<T, BookFinderError>;

/// What to search for and how to print it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub query: String,
    pub field: SearchField,
    pub filters: FilterInput,
    /// Print the full detail view instead of cards
    pub details: bool,
    /// Print the filtered records as JSON
    pub json: bool,
    /// 1-based index of the result to open in the browser
    pub open: Option<usize>,
    pub quiet: bool,
}

/// Execute the search command
///
/// Results go to `out`, notices go to `messages`, and `open_url` is called
/// for `--open`.
///
/// # Errors
///
/// Returns `BookFinderError::InvalidInput` for an empty query or an `--open`
/// index outside the result list, `FilterError` for invalid years and
/// `FetchFailed` if the search endpoint could not be used.
pub fn execute(
    source: &dyn BookSource,
    config: &BookFinderConfig,
    options: &SearchOptions,
    out: &mut impl Write,
    messages: &dyn OutputWriter,
    open_url: impl FnOnce(&str) -> io::Result<()>,
) -> Result<()> {
    if options.query.trim().is_empty() {
        return Err(BookFinderError::InvalidInput(
            "Search query cannot be empty".into(),
        ));
    }

    let mut controller = SearchController::new(options.field, config.limit);
    controller.query.clone_from(&options.query);
    controller.filter_input = options.filters.clone();
    controller.run(source)?;

    match controller.notice() {
        Some(SearchNotice::FetchFailed) => return Err(BookFinderError::FetchFailed),
        Some(notice @ SearchNotice::NoResults { .. }) => {
            if options.json {
                writeln!(out, "[]")?;
            }
            messages.warning(&notice.to_string());
            return Ok(());
        }
        Some(SearchNotice::InvalidFilter(err)) => return Err(err.clone().into()),
        None => {}
    }

    let endpoints = config.endpoints();
    let results = controller.results();

    if options.json {
        serde_json::to_writer_pretty(&mut *out, results)?;
        writeln!(out)?;
    } else if options.details {
        for (i, book) in results.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", format_details(&BookDetails::new(book, &endpoints)))?;
        }
    } else {
        for (i, book) in results.iter().enumerate() {
            let card = BookCard::new(book, &endpoints);
            writeln!(out, "{}", format_card(i + 1, &card, options.quiet))?;
        }
    }

    if !options.quiet && !options.json {
        writeln!(out, "\n{}", result_summary(results.len(), controller.raw_count()))?;
    }

    if let Some(position) = options.open {
        let book = position
            .checked_sub(1)
            .and_then(|index| results.get(index))
            .ok_or_else(|| {
                BookFinderError::InvalidInput(format!(
                    "--open {position} is out of range (1-{})",
                    results.len()
                ))
            })?;
        let url = endpoints.record_url(&book.key);
        info!(url = %url, "opening record page");
        if !options.json {
            messages.info(&format!("Opening {url}"));
        }
        open_url(&url)?;
    }

    Ok(())
}
