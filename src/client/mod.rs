//! Search API client
//!
//! The rest of the crate talks to the remote catalogue through the
//! [`BookSource`] trait, so the search controller and the TUI can be driven
//! by a canned source in tests. [`OpenLibraryClient`] is the real
//! implementation backed by a blocking `reqwest` client.
//!
//! # Examples
//!
//! ```no_run
//! use bookfinder::client::{BookSource, Endpoints, OpenLibraryClient, SearchRequest};
//! use bookfinder::model::SearchField;
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), bookfinder::client::ClientError> {
//! let client = OpenLibraryClient::new(Endpoints::default(), Duration::from_secs(30))?;
//! let request = SearchRequest::new(SearchField::Title, "dune", 20);
//! for book in client.search(&request)? {
//!     println!("{}", book.title.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

pub mod endpoints;
pub mod error;

pub use endpoints::{CoverSize, Endpoints};
pub use error::ClientError;

use crate::model::{Book, SearchField, SearchResponse};
use std::time::Duration;
use tracing::debug;

/// Default number of records requested per search
pub const DEFAULT_LIMIT: usize = 20;

/// A single lookup against the search endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub field: SearchField,
    /// Trimmed, non-empty query text
    pub query: String,
    /// Result cap
    pub limit: usize,
}

impl SearchRequest {
    /// Create a new request
    #[must_use]
    pub fn new(field: SearchField, query: impl Into<String>, limit: usize) -> Self {
        Self {
            field,
            query: query.into(),
            limit,
        }
    }
}

/// Anything that can answer a search request with raw records
pub trait BookSource: Send + Sync {
    /// Fetch the unfiltered records for `request`
    ///
    /// An empty vector is a successful "nothing found" answer.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` on transport, status or decoding failures.
    fn search(&self, request: &SearchRequest) -> Result<Vec<Book>, ClientError>;
}

/// Open Library search client
pub struct OpenLibraryClient {
    http: reqwest::blocking::Client,
    endpoints: Endpoints,
}

impl OpenLibraryClient {
    /// Create a client for the given endpoints
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Http` if the HTTP client cannot be constructed
    /// (e.g. TLS backend initialisation fails).
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bookfinder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, endpoints })
    }

    /// Endpoints this client was built with
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl BookSource for OpenLibraryClient {
    fn search(&self, request: &SearchRequest) -> Result<Vec<Book>, ClientError> {
        let url = self
            .endpoints
            .search_url(request.field, &request.query, request.limit)?;
        debug!(%url, "issuing search request");

        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "search endpoint returned an error status");
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        debug!(
            count = parsed.docs.len(),
            num_found = parsed.num_found,
            "search response decoded"
        );

        Ok(parsed.docs)
    }
}

impl<T: BookSource + ?Sized> BookSource for std::sync::Arc<T> {
    fn search(&self, request: &SearchRequest) -> Result<Vec<Book>, ClientError> {
        (**self).search(request)
    }
}
