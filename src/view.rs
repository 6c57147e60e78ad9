//! Presentation models shared by the terminal UI and the CLI
//!
//! A [`BookCard`] is the summary shown in the result grid; [`BookDetails`]
//! is the full detail view. Both renderers (ratatui widgets and the plain
//! text output) consume these, so truncation rules and labels live in one
//! place.

use crate::client::{CoverSize, Endpoints};
use crate::model::Book;
use serde::Serialize;

/// Authors shown on a card
pub const CARD_AUTHORS: usize = 2;
/// Language codes shown in the detail view
pub const DETAIL_LANGUAGES: usize = 3;
/// Subjects shown in the detail view
pub const DETAIL_SUBJECTS: usize = 10;
/// Publishers shown in the detail view
pub const DETAIL_PUBLISHERS: usize = 3;

/// Shown instead of a cover when a record has none
pub const COVER_PLACEHOLDER: &str = "📖";
/// Year label for records without a publish year
pub const UNKNOWN_YEAR: &str = "Unknown year";
/// Title label for records without a title
pub const UNTITLED: &str = "Untitled";
/// Author label for records without authors
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Cover image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "url")]
pub enum Cover {
    /// Remote image URL
    Image(String),
    /// No cover available
    Placeholder,
}

impl Cover {
    fn for_book(book: &Book, endpoints: &Endpoints, size: CoverSize) -> Self {
        book.cover_i
            .map_or(Self::Placeholder, |id| Self::Image(endpoints.cover_url(id, size)))
    }

    /// Image URL, if any
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Image(url) => Some(url),
            Self::Placeholder => None,
        }
    }
}

fn year_label(book: &Book) -> String {
    book.first_publish_year
        .map_or_else(|| UNKNOWN_YEAR.to_string(), |year| year.to_string())
}

fn title_of(book: &Book) -> String {
    book.title.clone().unwrap_or_else(|| UNTITLED.to_string())
}

/// Summary of one record for the result grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookCard {
    pub key: String,
    pub title: String,
    /// At most [`CARD_AUTHORS`] names
    pub authors: Vec<String>,
    /// Whether `authors` was truncated
    pub more_authors: bool,
    pub year: String,
    pub cover: Cover,
    pub has_ebook: bool,
}

impl BookCard {
    /// Build the card for `book`
    #[must_use]
    pub fn new(book: &Book, endpoints: &Endpoints) -> Self {
        Self {
            key: book.key.clone(),
            title: title_of(book),
            authors: book.author_name.iter().take(CARD_AUTHORS).cloned().collect(),
            more_authors: book.author_name.len() > CARD_AUTHORS,
            year: year_label(book),
            cover: Cover::for_book(book, endpoints, CoverSize::Medium),
            has_ebook: book.has_ebook(),
        }
    }

    /// Author line, e.g. `Terry Pratchett, Neil Gaiman et al.`
    #[must_use]
    pub fn author_line(&self) -> String {
        if self.authors.is_empty() {
            return UNKNOWN_AUTHOR.to_string();
        }
        let mut line = self.authors.join(", ");
        if self.more_authors {
            line.push_str(" et al.");
        }
        line
    }
}

/// Everything the detail view shows about one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDetails {
    pub key: String,
    pub title: String,
    /// Full author list
    pub authors: Vec<String>,
    pub year: String,
    /// Defaults to 0 when the API omits it
    pub edition_count: u32,
    /// Upper-cased, at most [`DETAIL_LANGUAGES`]
    pub languages: Vec<String>,
    /// At most [`DETAIL_SUBJECTS`]
    pub subjects: Vec<String>,
    /// At most [`DETAIL_PUBLISHERS`]
    pub publishers: Vec<String>,
    pub ebook_available: bool,
    pub cover: Cover,
    /// Canonical page on the source site
    pub record_url: String,
}

impl BookDetails {
    /// Build the detail view for `book`
    #[must_use]
    pub fn new(book: &Book, endpoints: &Endpoints) -> Self {
        Self {
            key: book.key.clone(),
            title: title_of(book),
            authors: book.author_name.clone(),
            year: year_label(book),
            edition_count: book.edition_count.unwrap_or(0),
            languages: book
                .language
                .iter()
                .take(DETAIL_LANGUAGES)
                .map(|code| code.to_uppercase())
                .collect(),
            subjects: book.subject.iter().take(DETAIL_SUBJECTS).cloned().collect(),
            publishers: book.publisher.iter().take(DETAIL_PUBLISHERS).cloned().collect(),
            ebook_available: book.has_ebook(),
            cover: Cover::for_book(book, endpoints, CoverSize::Large),
            record_url: endpoints.record_url(&book.key),
        }
    }

    /// `Available` / `Not available`
    #[must_use]
    pub const fn ebook_label(&self) -> &'static str {
        if self.ebook_available {
            "Available"
        } else {
            "Not available"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EbookAccess;
    use crate::testing::{BookBuilder, sample_books};

    #[test]
    fn test_card_truncates_authors() {
        let books = sample_books();
        let card = BookCard::new(&books[1], &Endpoints::default());

        assert_eq!(card.authors, vec!["Terry Pratchett", "Neil Gaiman"]);
        assert!(card.more_authors);
        assert_eq!(card.author_line(), "Terry Pratchett, Neil Gaiman et al.");
        assert_eq!(card.year, "1990");
        assert!(!card.has_ebook);
    }

    #[test]
    fn test_card_cover_uses_medium_size() {
        let books = sample_books();
        let card = BookCard::new(&books[0], &Endpoints::default());
        assert_eq!(
            card.cover.url(),
            Some("https://covers.openlibrary.org/b/id/11481354-M.jpg")
        );
        assert!(card.has_ebook);
    }

    #[test]
    fn test_card_placeholders() {
        let book = BookBuilder::new("/works/OL1W").build();
        let card = BookCard::new(&book, &Endpoints::default());

        assert_eq!(card.title, UNTITLED);
        assert_eq!(card.year, UNKNOWN_YEAR);
        assert_eq!(card.cover, Cover::Placeholder);
        assert_eq!(card.author_line(), UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_absent_ebook_access_has_no_badge() {
        let book = BookBuilder::new("/works/OL1W").build();
        assert!(!BookCard::new(&book, &Endpoints::default()).has_ebook);
        assert!(!BookDetails::new(&book, &Endpoints::default()).ebook_available);
    }

    #[test]
    fn test_details_limits_and_defaults() {
        let books = sample_books();
        let details = BookDetails::new(&books[0], &Endpoints::default());

        assert_eq!(details.authors, vec!["Frank Herbert"]);
        assert_eq!(details.languages, vec!["ENG", "SPA", "FRE"]);
        assert_eq!(details.publishers.len(), 3);
        assert_eq!(details.subjects.len(), 3);
        assert_eq!(details.edition_count, 120);
        assert_eq!(details.ebook_label(), "Available");
        assert_eq!(
            details.cover.url(),
            Some("https://covers.openlibrary.org/b/id/11481354-L.jpg")
        );
        assert_eq!(details.record_url, "https://openlibrary.org/works/OL893415W");
    }

    #[test]
    fn test_details_subject_cap_and_edition_default() {
        let subjects: Vec<String> = (0..15).map(|i| format!("Subject {i}")).collect();
        let refs: Vec<&str> = subjects.iter().map(String::as_str).collect();
        let book = BookBuilder::new("/works/OL2W")
            .subjects(&refs)
            .ebook(EbookAccess::NoEbook)
            .build();

        let details = BookDetails::new(&book, &Endpoints::default());
        assert_eq!(details.subjects.len(), DETAIL_SUBJECTS);
        assert_eq!(details.edition_count, 0);
        assert_eq!(details.ebook_label(), "Not available");
    }

    #[test]
    fn test_details_keep_all_authors() {
        let books = sample_books();
        let details = BookDetails::new(&books[1], &Endpoints::default());
        assert_eq!(details.authors.len(), 3);
    }
}
