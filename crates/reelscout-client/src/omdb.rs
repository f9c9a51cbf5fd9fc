use crate::schema::{DetailEnvelope, SearchEnvelope};
use crate::traits::MovieSource;
use crate::Result;
use reelscout_types::{LookupResult, SearchResult};

/// Public OMDb endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Shared demo key used when the user has not configured their own.
pub const FALLBACK_API_KEY: &str = "699e79e2";

/// Searches always request the first result page; there is no pagination.
const SEARCH_PAGE: &str = "1";

/// Remote movie source backed by the OMDb HTTP API.
pub struct OmdbClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl MovieSource for OmdbClient {
    fn search(&self, term: &str) -> Result<SearchResult> {
        let body = self
            .http
            .get(&self.base_url)
            .query(&[("s", term), ("page", SEARCH_PAGE), ("apikey", self.api_key.as_str())])
            .send()?
            .text()?;
        let envelope: SearchEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.into_result())
    }

    fn lookup(&self, imdb_id: &str) -> Result<LookupResult> {
        let body = self
            .http
            .get(&self.base_url)
            .query(&[("i", imdb_id), ("apikey", self.api_key.as_str())])
            .send()?
            .text()?;
        let envelope: DetailEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.into_result())
    }
}
