//! Book records as returned by the Open Library search endpoint
//!
//! Every field except `key` is optional on the wire. List fields that are
//! absent deserialize to empty vectors so callers never have to juggle
//! `Option<Vec<_>>`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// eBook availability reported for a record
///
/// Unrecognised values are kept verbatim in `Other` instead of failing the
/// whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EbookAccess {
    /// No digital edition exists
    NoEbook,
    /// Only available to print-disabled patrons
    PrintDisabled,
    /// Can be borrowed
    Borrowable,
    /// Freely readable
    Public,
    /// Any value the API adds later
    Other(String),
}

impl EbookAccess {
    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NoEbook => "no_ebook",
            Self::PrintDisabled => "printdisabled",
            Self::Borrowable => "borrowable",
            Self::Public => "public",
            Self::Other(other) => other,
        }
    }

    /// Whether a reader can actually open an eBook for this record
    ///
    /// Only `borrowable` and `public` count. The card badge, the detail view
    /// and the eBook filter all share this rule.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Borrowable | Self::Public)
    }
}

impl From<String> for EbookAccess {
    fn from(value: String) -> Self {
        match value.as_str() {
            "no_ebook" => Self::NoEbook,
            "printdisabled" => Self::PrintDisabled,
            "borrowable" => Self::Borrowable,
            "public" => Self::Public,
            _ => Self::Other(value),
        }
    }
}

impl From<EbookAccess> for String {
    fn from(value: EbookAccess) -> Self {
        match value {
            EbookAccess::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EbookAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One book entry from the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, also the path of the record's page (e.g. `/works/OL45804W`)
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub author_name: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_publish_year: Option<i32>,

    /// Cover identifier used to build image URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_i: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebook_access: Option<EbookAccess>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition_count: Option<u32>,

    /// Two or three letter language codes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub language: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subject: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub publisher: Vec<String>,
}

impl Book {
    /// Create a record with only its key set
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: None,
            author_name: Vec::new(),
            first_publish_year: None,
            cover_i: None,
            ebook_access: None,
            edition_count: None,
            language: Vec::new(),
            subject: Vec::new(),
            publisher: Vec::new(),
        }
    }

    /// Whether this record has a readable eBook (absent access counts as none)
    #[must_use]
    pub fn has_ebook(&self) -> bool {
        self.ebook_access
            .as_ref()
            .is_some_and(EbookAccess::is_available)
    }
}

/// Body of `GET /search.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default, rename = "numFound")]
    pub num_found: Option<u64>,

    /// Absent `docs` is a valid empty response
    #[serde(default)]
    pub docs: Vec<Book>,
}

/// Record attribute the query text is matched against
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Subject,
}

impl SearchField {
    /// Query parameter name used by the search endpoint
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Subject => "subject",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Subject => "Subject",
        }
    }

    /// Next field (wrapping)
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Subject,
            Self::Subject => Self::Title,
        }
    }

    /// Previous field (wrapping)
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Subject,
            Self::Author => Self::Title,
            Self::Subject => Self::Author,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "subject" => Ok(Self::Subject),
            other => Err(format!(
                "unknown search field '{other}' (expected title, author or subject)"
            )),
        }
    }
}
