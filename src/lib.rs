//! Bookfinder - search a public book catalogue from the terminal
//!
//! This library holds the search controller, the client-side filter stage,
//! the presentation models shared by the interactive browser and the
//! one-shot CLI, and the HTTP client for the Open Library search API.

use thiserror::Error;

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod filters;
pub mod logging;
pub mod model;
pub mod output;
pub mod search;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum BookFinderError {
    /// Remote search failed
    #[error("Search failed: {0}")]
    ClientError(#[from] client::ClientError),
    /// Filter input was rejected
    #[error("{0}")]
    FilterError(#[from] filters::FilterError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// A search reached the endpoint but produced no usable answer
    #[error("Failed to fetch results. Please try again.")]
    FetchFailed,
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output could not be produced
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
