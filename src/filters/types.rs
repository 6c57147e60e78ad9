//! Filter criteria value object

use super::error::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which end of the publication year range a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearBound {
    /// Inclusive lower bound
    From,
    /// Inclusive upper bound
    To,
}

impl fmt::Display for YearBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => f.write_str("'from'"),
            Self::To => f.write_str("'to'"),
        }
    }
}

/// Post-retrieval constraints on a result list
///
/// The two bounds are independent; `year_from > year_to` is allowed and
/// simply matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Keep only records with a borrowable or public eBook
    #[serde(default)]
    pub ebook_only: bool,

    /// Inclusive lower bound on `first_publish_year`
    #[serde(default)]
    pub year_from: Option<i32>,

    /// Inclusive upper bound on `first_publish_year`
    #[serde(default)]
    pub year_to: Option<i32>,
}

impl FilterCriteria {
    /// Criteria that keep everything
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ebook_only: false,
            year_from: None,
            year_to: None,
        }
    }

    /// Build criteria from free-text form input
    ///
    /// Empty or whitespace-only year text means "no bound".
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidYear` if a non-empty year is not a whole number.
    pub fn from_input(ebook_only: bool, year_from: &str, year_to: &str) -> Result<Self, FilterError> {
        Ok(Self {
            ebook_only,
            year_from: parse_year(year_from, YearBound::From)?,
            year_to: parse_year(year_to, YearBound::To)?,
        })
    }

    /// Whether any filter is switched on
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.ebook_only || self.year_from.is_some() || self.year_to.is_some()
    }

    /// Short description for status lines, e.g. `eBook, 1950–1970`
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.ebook_only {
            parts.push("eBook".to_string());
        }
        match (self.year_from, self.year_to) {
            (Some(from), Some(to)) => parts.push(format!("{from}–{to}")),
            (Some(from), None) => parts.push(format!("from {from}")),
            (None, Some(to)) => parts.push(format!("until {to}")),
            (None, None) => {}
        }

        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(", ")
        }
    }
}

fn parse_year(text: &str, bound: YearBound) -> Result<Option<i32>, FilterError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<i32>()
        .map(Some)
        .map_err(|_| FilterError::InvalidYear {
            bound,
            value: trimmed.to_string(),
        })
}
