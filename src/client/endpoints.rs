//! URL construction for the search endpoint, cover images and record pages

use super::error::ClientError;
use crate::model::SearchField;
use reqwest::Url;

/// Default host serving `search.json` and record pages
pub const DEFAULT_SEARCH_HOST: &str = "https://openlibrary.org";
/// Default host serving cover images
pub const DEFAULT_COVERS_HOST: &str = "https://covers.openlibrary.org";
/// Default host that record keys are appended to
pub const DEFAULT_SOURCE_HOST: &str = "https://openlibrary.org";

/// Cover image size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSize {
    /// Used on cards
    Medium,
    /// Used in the detail view
    Large,
}

impl CoverSize {
    /// Size suffix understood by the covers API
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Medium => "M",
            Self::Large => "L",
        }
    }
}

/// Base URLs of the external services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub search_host: String,
    pub covers_host: String,
    pub source_host: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            search_host: DEFAULT_SEARCH_HOST.to_string(),
            covers_host: DEFAULT_COVERS_HOST.to_string(),
            source_host: DEFAULT_SOURCE_HOST.to_string(),
        }
    }
}

impl Endpoints {
    /// `{search-host}/search.json?{field}={query}&limit={limit}`
    ///
    /// The query is form-encoded.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Url` if the configured search host is not a valid URL.
    pub fn search_url(&self, field: SearchField, query: &str, limit: usize) -> Result<Url, ClientError> {
        let base = format!("{}/search.json", self.search_host.trim_end_matches('/'));
        let mut url = Url::parse(&base).map_err(|e| ClientError::Url {
            url: base.clone(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair(field.as_str(), query)
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }

    /// `{covers-host}/b/id/{cover_id}-{size}.jpg`
    #[must_use]
    pub fn cover_url(&self, cover_id: i64, size: CoverSize) -> String {
        format!(
            "{}/b/id/{cover_id}-{}.jpg",
            self.covers_host.trim_end_matches('/'),
            size.suffix()
        )
    }

    /// Canonical page of a record: the source host followed by the record key
    #[must_use]
    pub fn record_url(&self, key: &str) -> String {
        format!("{}{key}", self.source_host.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        let endpoints = Endpoints::default();
        let url = endpoints
            .search_url(SearchField::Author, "Ursula K. Le Guin & co", 20)
            .unwrap();

        assert_eq!(url.path(), "/search.json");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("author".to_string(), "Ursula K. Le Guin & co".to_string()),
                ("limit".to_string(), "20".to_string()),
            ]
        );
        assert!(!url.as_str().contains(" & "));
    }

    #[test]
    fn test_search_url_with_trailing_slash_host() {
        let endpoints = Endpoints {
            search_host: "http://localhost:8080/".to_string(),
            ..Endpoints::default()
        };
        let url = endpoints.search_url(SearchField::Title, "dune", 5).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/search.json?title=dune&limit=5");
    }

    #[test]
    fn test_invalid_host_is_reported() {
        let endpoints = Endpoints {
            search_host: "not a url".to_string(),
            ..Endpoints::default()
        };
        let err = endpoints.search_url(SearchField::Title, "dune", 5).unwrap_err();
        assert!(matches!(err, ClientError::Url { .. }));
    }

    #[test]
    fn test_cover_urls() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.cover_url(11_481_354, CoverSize::Medium),
            "https://covers.openlibrary.org/b/id/11481354-M.jpg"
        );
        assert_eq!(
            endpoints.cover_url(7, CoverSize::Large),
            "https://covers.openlibrary.org/b/id/7-L.jpg"
        );
    }

    #[test]
    fn test_record_url() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.record_url("/works/OL893415W"),
            "https://openlibrary.org/works/OL893415W"
        );
    }
}
