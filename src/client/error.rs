//! Error types for talking to the search API

use thiserror::Error;

/// Failures while fetching or decoding search results
///
/// The UI collapses all of these into a single "failed to fetch" message;
/// the variants exist for logging and for the CLI's error output.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, TLS, timeout or other transport failure
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server responded with status {0}")]
    Status(u16),

    /// The body was not the expected JSON shape
    #[error("Could not parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configured host could not be turned into a URL
    #[error("Invalid URL '{url}': {reason}")]
    Url { url: String, reason: String },

    /// The background search thread could not be started
    #[error("Could not start the search: {0}")]
    Worker(#[from] std::io::Error),
}
