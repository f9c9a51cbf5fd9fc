use serde::{Deserialize, Serialize};

/// Sentinel value OMDb uses for a missing poster URL.
pub const POSTER_UNAVAILABLE: &str = "N/A";

/// Lightweight search-result record produced by the search endpoint.
///
/// Ephemeral: exists only to populate the suggestion list, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    /// Poster URL as received; may be the [`POSTER_UNAVAILABLE`] sentinel.
    pub poster: String,
}

impl MatchSummary {
    /// Poster URL, or `None` when the source marked it unavailable.
    pub fn poster_url(&self) -> Option<&str> {
        poster_url(&self.poster)
    }
}

/// Full record for one title returned by identifier lookup.
///
/// Fields carry the remote payload verbatim; dates, ratings and the like are
/// display strings, not parsed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub rated: String,
    pub released: String,
    pub genre: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub awards: String,
    pub poster: String,
}

impl MovieDetails {
    /// Poster URL, or `None` when the source marked it unavailable.
    pub fn poster_url(&self) -> Option<&str> {
        poster_url(&self.poster)
    }
}

fn poster_url(raw: &str) -> Option<&str> {
    if raw == POSTER_UNAVAILABLE || raw.is_empty() {
        None
    } else {
        Some(raw)
    }
}

/// Discriminated outcome of a search request.
///
/// The remote reports failure through an explicit flag rather than an empty
/// list, so callers must not assume the match list is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// Search succeeded; matches are in remote order.
    Hits(Vec<MatchSummary>),
    /// The remote set its failure flag (too many results, nothing found, bad key).
    NoResults,
}

/// Discriminated outcome of an identifier lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found(MovieDetails),
    /// The remote set its failure flag; carries the remote's reason text.
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poster_url_is_none_for_sentinel() {
        let summary = MatchSummary {
            imdb_id: "tt0096895".to_string(),
            title: "Batman".to_string(),
            year: "1989".to_string(),
            poster: POSTER_UNAVAILABLE.to_string(),
        };
        assert_eq!(summary.poster_url(), None);
    }

    #[test]
    fn poster_url_passes_through_real_urls() {
        let summary = MatchSummary {
            imdb_id: "tt0103776".to_string(),
            title: "Batman Returns".to_string(),
            year: "1992".to_string(),
            poster: "http://x/p.jpg".to_string(),
        };
        assert_eq!(summary.poster_url(), Some("http://x/p.jpg"));
    }

    #[test]
    fn poster_url_is_none_for_empty_string() {
        let details = MovieDetails {
            imdb_id: "tt1".to_string(),
            title: String::new(),
            year: String::new(),
            rated: String::new(),
            released: String::new(),
            genre: String::new(),
            writer: String::new(),
            actors: String::new(),
            plot: String::new(),
            language: String::new(),
            awards: String::new(),
            poster: String::new(),
        };
        assert_eq!(details.poster_url(), None);
    }
}
