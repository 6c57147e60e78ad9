//! Output formatting for CLI display
//!
//! Plain-text renderings of the shared view models. The terminal UI draws
//! the same [`BookCard`] and [`BookDetails`] with ratatui widgets instead.

use crate::view::{BookCard, BookDetails, COVER_PLACEHOLDER};
use colored::Colorize;

const EBOOK_BADGE: &str = "[eBook]";

fn list_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Format one result card, numbered from 1
///
/// In quiet mode only the title and record key are printed, tab separated.
#[must_use]
pub fn format_card(position: usize, card: &BookCard, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", card.title, card.key);
    }

    let badge = if card.has_ebook {
        format!("  {}", EBOOK_BADGE.green())
    } else {
        String::new()
    };
    let cover = card.cover.url().unwrap_or(COVER_PLACEHOLDER);

    format!(
        "{:>3}. {} ({}){badge}\n     by {}\n     {}",
        position,
        card.title.bold(),
        card.year.dimmed(),
        card.author_line(),
        cover.dimmed()
    )
}

/// Format the full detail view of one record
#[must_use]
pub fn format_details(details: &BookDetails) -> String {
    let ebook = if details.ebook_available {
        details.ebook_label().green()
    } else {
        details.ebook_label().red()
    };
    let cover = details.cover.url().unwrap_or(COVER_PLACEHOLDER);

    let lines = [
        details.title.bold().underline().to_string(),
        format!("  Authors:    {}", list_or_dash(&details.authors)),
        format!("  Published:  {}", details.year),
        format!("  Editions:   {}", details.edition_count),
        format!("  Languages:  {}", list_or_dash(&details.languages)),
        format!("  Subjects:   {}", list_or_dash(&details.subjects)),
        format!("  Publishers: {}", list_or_dash(&details.publishers)),
        format!("  eBook:      {ebook}"),
        format!("  Cover:      {cover}"),
        format!("  Link:       {}", details.record_url.cyan()),
    ];
    lines.join("\n")
}

/// Summary line printed after a result list
#[must_use]
pub fn result_summary(shown: usize, fetched: usize) -> String {
    if shown == fetched {
        format!("{shown} result(s)")
    } else {
        format!("{shown} of {fetched} result(s) after filters")
    }
}
