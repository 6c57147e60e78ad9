//! Error types for filter criteria

use thiserror::Error;

/// Errors raised while building filter criteria from user input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A year bound was not a whole number
    #[error("Invalid {bound} year '{value}': expected a whole number such as 1965")]
    InvalidYear {
        /// Which bound was rejected
        bound: super::YearBound,
        /// The offending text
        value: String,
    },
}
