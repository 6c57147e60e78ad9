//! Testing utilities for bookfinder
//!
//! Builders for book records and a canned [`BookSource`] so the controller,
//! worker and TUI state can be exercised without a network.
//!
//! Only available when compiled with `cfg(test)`.

use crate::client::{BookSource, ClientError, SearchRequest};
use crate::model::{Book, EbookAccess};
use crate::ui::{MessageLevel, OutputWriter};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Fluent builder for [`Book`] fixtures
///
/// # Examples
/// ```ignore
/// let book = BookBuilder::new("/works/OL1W").title("Dune").year(1965).build();
/// ```
#[derive(Debug, Clone)]
pub struct BookBuilder {
    book: Book,
}

impl BookBuilder {
    pub fn new(key: &str) -> Self {
        Self { book: Book::new(key) }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.book.title = Some(title.to_string());
        self
    }

    pub fn authors(mut self, authors: &[&str]) -> Self {
        self.book.author_name = authors.iter().map(ToString::to_string).collect();
        self
    }

    pub const fn year(mut self, year: i32) -> Self {
        self.book.first_publish_year = Some(year);
        self
    }

    pub const fn cover(mut self, cover_id: i64) -> Self {
        self.book.cover_i = Some(cover_id);
        self
    }

    pub fn ebook(mut self, access: EbookAccess) -> Self {
        self.book.ebook_access = Some(access);
        self
    }

    pub const fn editions(mut self, count: u32) -> Self {
        self.book.edition_count = Some(count);
        self
    }

    pub fn languages(mut self, codes: &[&str]) -> Self {
        self.book.language = codes.iter().map(ToString::to_string).collect();
        self
    }

    pub fn subjects(mut self, subjects: &[&str]) -> Self {
        self.book.subject = subjects.iter().map(ToString::to_string).collect();
        self
    }

    pub fn publishers(mut self, publishers: &[&str]) -> Self {
        self.book.publisher = publishers.iter().map(ToString::to_string).collect();
        self
    }

    pub fn build(self) -> Book {
        self.book
    }
}

/// Book source that answers every request with the same canned outcome
///
/// Records how often it was called and the last request it saw.
pub struct MockSource {
    books: Vec<Book>,
    fail: bool,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_request: Mutex<Option<SearchRequest>>,
}

impl MockSource {
    /// Answer with `books`
    pub fn returning(books: Vec<Book>) -> Self {
        Self {
            books,
            fail: false,
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Answer with a transport-level failure
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::returning(Vec::new())
        }
    }

    /// Sleep before answering
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// How many searches were issued
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<SearchRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }
}

impl BookSource for MockSource {
    fn search(&self, request: &SearchRequest) -> Result<Vec<Book>, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request.clone());
        }
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }

        if self.fail {
            Err(ClientError::Status(503))
        } else {
            Ok(self.books.clone())
        }
    }
}

/// Output writer that keeps every message for later inspection
#[derive(Debug, Default)]
pub struct RecordingWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl RecordingWriter {
    /// Messages written so far
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    fn record(&self, level: MessageLevel, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, message.to_string()));
        }
    }
}

impl OutputWriter for RecordingWriter {
    fn error(&self, message: &str) {
        self.record(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.record(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.record(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.record(MessageLevel::Info, message);
    }
}

/// A realistic mix of records for rendering tests
pub fn sample_books() -> Vec<Book> {
    vec![
        BookBuilder::new("/works/OL893415W")
            .title("Dune")
            .authors(&["Frank Herbert"])
            .year(1965)
            .cover(11_481_354)
            .ebook(EbookAccess::Borrowable)
            .editions(120)
            .languages(&["eng", "spa", "fre", "ger"])
            .subjects(&["Science fiction", "Deserts", "Ecology"])
            .publishers(&["Chilton Books", "Ace Books", "Hodder", "Gollancz"])
            .build(),
        BookBuilder::new("/works/OL45804W")
            .title("Good Omens")
            .authors(&["Terry Pratchett", "Neil Gaiman", "Anonymous Editor"])
            .year(1990)
            .ebook(EbookAccess::NoEbook)
            .build(),
        BookBuilder::new("/works/OL27448W")
            .title("The Left Hand of Darkness")
            .authors(&["Ursula K. Le Guin"])
            .ebook(EbookAccess::Public)
            .build(),
    ]
}
