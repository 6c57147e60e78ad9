//! Search state and its transitions

use crate::client::{BookSource, ClientError, SearchRequest, DEFAULT_LIMIT};
use crate::filters::{self, FilterCriteria, FilterError};
use crate::model::{Book, SearchField};
use std::fmt;
use tracing::{debug, warn};

/// User-visible outcome of a search that produced no results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchNotice {
    /// The endpoint answered with zero records
    NoResults {
        /// Query that found nothing
        query: String,
    },
    /// Network, status or parse failure (not distinguished for the user)
    FetchFailed,
    /// Filter input was rejected before any request was made
    InvalidFilter(FilterError),
}

impl fmt::Display for SearchNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoResults { query } => write!(f, "No books found for \"{query}\""),
            Self::FetchFailed => f.write_str("Failed to fetch results. Please try again."),
            Self::InvalidFilter(err) => write!(f, "{err}"),
        }
    }
}

/// Filter form contents as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInput {
    pub ebook_only: bool,
    pub year_from: String,
    pub year_to: String,
}

impl FilterInput {
    /// Validate into criteria
    ///
    /// # Errors
    ///
    /// Returns `FilterError` if either year is not a whole number.
    pub fn criteria(&self) -> Result<FilterCriteria, FilterError> {
        FilterCriteria::from_input(self.ebook_only, &self.year_from, &self.year_to)
    }

}

/// A search that has been started but not yet completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    /// Sequence token; only the latest token's completion is applied
    pub token: u64,
    pub request: SearchRequest,
}

/// Owns all search-related state of one finder instance
#[derive(Debug, Clone)]
pub struct SearchController {
    /// Raw query text (trimmed only when a search begins)
    pub query: String,
    /// Attribute the query is matched against
    pub field: SearchField,
    /// Filter form contents
    pub filter_input: FilterInput,
    limit: usize,
    results: Vec<Book>,
    raw_count: usize,
    loading: bool,
    notice: Option<SearchNotice>,
    latest_token: u64,
    request_in_flight: Option<SearchRequest>,
    criteria_in_flight: FilterCriteria,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(SearchField::default(), DEFAULT_LIMIT)
    }
}

impl SearchController {
    /// Create an idle controller
    #[must_use]
    pub const fn new(field: SearchField, limit: usize) -> Self {
        Self {
            query: String::new(),
            field,
            filter_input: FilterInput {
                ebook_only: false,
                year_from: String::new(),
                year_to: String::new(),
            },
            limit,
            results: Vec::new(),
            raw_count: 0,
            loading: false,
            notice: None,
            latest_token: 0,
            request_in_flight: None,
            criteria_in_flight: FilterCriteria::new(),
        }
    }

    /// Filtered results of the last applied search
    #[must_use]
    pub fn results(&self) -> &[Book] {
        &self.results
    }

    /// Number of records the endpoint returned before filtering
    #[must_use]
    pub const fn raw_count(&self) -> usize {
        self.raw_count
    }

    /// Whether a search is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message for the last search, if it ended without results
    #[must_use]
    pub const fn notice(&self) -> Option<&SearchNotice> {
        self.notice.as_ref()
    }

    /// Result cap sent with every request
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Request of the search currently in flight
    #[must_use]
    pub const fn in_flight(&self) -> Option<&SearchRequest> {
        self.request_in_flight.as_ref()
    }

    /// Token of the most recently started search
    #[must_use]
    pub const fn latest_token(&self) -> u64 {
        self.latest_token
    }

    /// Start a search
    ///
    /// Returns `Ok(None)` without touching any state when the query is empty
    /// or whitespace. Otherwise clears the previous results and notice, marks
    /// the controller as loading and returns the request to run.
    ///
    /// # Errors
    ///
    /// Returns `FilterError` (and records it as the notice, with an empty
    /// result list) when the filter input does not validate. No request is
    /// issued in that case.
    pub fn begin(&mut self) -> Result<Option<PendingSearch>, FilterError> {
        let query = self.query.trim();
        if query.is_empty() {
            return Ok(None);
        }
        let query = query.to_string();

        self.results.clear();
        self.raw_count = 0;
        self.notice = None;

        let criteria = match self.filter_input.criteria() {
            Ok(criteria) => criteria,
            Err(err) => {
                self.loading = false;
                self.request_in_flight = None;
                // Bump the token so a search still in flight cannot land afterwards
                self.latest_token += 1;
                self.notice = Some(SearchNotice::InvalidFilter(err.clone()));
                return Err(err);
            }
        };

        self.latest_token += 1;
        self.loading = true;
        self.criteria_in_flight = criteria;

        let pending = PendingSearch {
            token: self.latest_token,
            request: SearchRequest::new(self.field, query, self.limit),
        };
        debug!(token = pending.token, field = %pending.request.field, query = %pending.request.query, "search started");
        self.request_in_flight = Some(pending.request.clone());
        Ok(Some(pending))
    }

    /// Apply the outcome of a search
    ///
    /// Returns `false` (and changes nothing) if `token` belongs to a search
    /// that has since been superseded.
    pub fn complete(&mut self, token: u64, outcome: Result<Vec<Book>, ClientError>) -> bool {
        if token != self.latest_token {
            debug!(token, latest = self.latest_token, "discarding stale search response");
            return false;
        }

        self.loading = false;
        let request = self.request_in_flight.take();
        match outcome {
            Ok(docs) if docs.is_empty() => {
                self.results.clear();
                self.raw_count = 0;
                self.notice = Some(SearchNotice::NoResults {
                    query: request.map(|request| request.query).unwrap_or_default(),
                });
            }
            Ok(docs) => {
                self.raw_count = docs.len();
                self.results = filters::apply(docs, &self.criteria_in_flight);
                self.notice = None;
                debug!(token, raw = self.raw_count, kept = self.results.len(), "search completed");
            }
            Err(err) => {
                warn!(token, error = %err, "search request failed");
                self.results.clear();
                self.raw_count = 0;
                self.notice = Some(SearchNotice::FetchFailed);
            }
        }
        true
    }

    /// Run a complete search synchronously against `source`
    ///
    /// Returns `Ok(false)` if the query was empty and nothing happened.
    ///
    /// # Errors
    ///
    /// Returns `FilterError` if the filter input does not validate.
    pub fn run(&mut self, source: &dyn BookSource) -> Result<bool, FilterError> {
        let Some(pending) = self.begin()? else {
            return Ok(false);
        };
        let outcome = source.search(&pending.request);
        self.complete(pending.token, outcome);
        Ok(true)
    }
}
