//! Wire schema for the OMDb JSON API.
//!
//! OMDb signals failure through a `Response: "False"` flag plus an `Error`
//! string rather than HTTP status codes, so both envelopes keep every payload
//! field optional-with-default and let the mapper decide what the response
//! actually was.

use reelscout_types::{LookupResult, MatchSummary, MovieDetails, SearchResult};
use serde::Deserialize;

const RESPONSE_TRUE: &str = "True";

#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(rename = "Response", default)]
    pub response: String,

    #[serde(rename = "Search", default)]
    pub search: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SearchEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(default)]
    pub poster: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DetailEnvelope {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub rated: String,
    #[serde(default)]
    pub released: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub writer: String,
    #[serde(default)]
    pub actors: String,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub awards: String,
    #[serde(default)]
    pub poster: String,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
}

impl SearchEnvelope {
    pub(crate) fn into_result(self) -> SearchResult {
        if self.response != RESPONSE_TRUE {
            return SearchResult::NoResults;
        }

        let matches = self
            .search
            .into_iter()
            .map(|entry| MatchSummary {
                imdb_id: entry.imdb_id,
                title: entry.title,
                year: entry.year,
                poster: entry.poster,
            })
            .collect();
        SearchResult::Hits(matches)
    }
}

impl DetailEnvelope {
    pub(crate) fn into_result(self) -> LookupResult {
        if self.response != RESPONSE_TRUE {
            let reason = self
                .error
                .unwrap_or_else(|| "Movie not found".to_string());
            return LookupResult::NotFound(reason);
        }

        LookupResult::Found(MovieDetails {
            imdb_id: self.imdb_id,
            title: self.title,
            year: self.year,
            rated: self.rated,
            released: self.released,
            genre: self.genre,
            writer: self.writer,
            actors: self.actors,
            plot: self.plot,
            language: self.language,
            awards: self.awards,
            poster: self.poster,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelscout_types::POSTER_UNAVAILABLE;

    #[test]
    fn search_envelope_success_maps_hits_in_order() {
        let json = r#"{
            "Search": [
                {"Title": "Batman", "Year": "1989", "imdbID": "tt0096895", "Type": "movie", "Poster": "N/A"},
                {"Title": "Batman Returns", "Year": "1992", "imdbID": "tt0103776", "Type": "movie", "Poster": "http://x/p.jpg"}
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;

        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        match envelope.into_result() {
            SearchResult::Hits(matches) => {
                assert_eq!(matches.len(), 2);
                assert_eq!(matches[0].imdb_id, "tt0096895");
                assert_eq!(matches[0].poster, POSTER_UNAVAILABLE);
                assert_eq!(matches[1].title, "Batman Returns");
                assert_eq!(matches[1].poster_url(), Some("http://x/p.jpg"));
            }
            SearchResult::NoResults => panic!("expected hits"),
        }
    }

    #[test]
    fn search_envelope_failure_flag_yields_no_results() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_result(), SearchResult::NoResults);
    }

    #[test]
    fn search_envelope_true_flag_without_list_yields_empty_hits() {
        // Defensive default: the flag alone decides success, the list defaults empty.
        let json = r#"{"Response": "True"}"#;
        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_result(), SearchResult::Hits(Vec::new()));
    }

    #[test]
    fn detail_envelope_success_maps_all_fields() {
        let json = r#"{
            "Title": "Batman Returns",
            "Year": "1992",
            "Rated": "PG-13",
            "Released": "19 Jun 1992",
            "Genre": "Action, Crime, Fantasy",
            "Writer": "Bob Kane, Daniel Waters, Sam Hamm",
            "Actors": "Michael Keaton, Danny DeVito, Michelle Pfeiffer",
            "Plot": "While Batman deals with a deformed man calling himself the Penguin, an employee of a corrupt businessman transforms into Catwoman.",
            "Language": "English",
            "Awards": "Nominated for 2 Oscars. 2 wins & 27 nominations total",
            "Poster": "http://x/returns.jpg",
            "imdbID": "tt0103776",
            "Response": "True"
        }"#;

        let envelope: DetailEnvelope = serde_json::from_str(json).unwrap();
        match envelope.into_result() {
            LookupResult::Found(details) => {
                assert_eq!(details.imdb_id, "tt0103776");
                assert_eq!(details.rated, "PG-13");
                assert_eq!(details.released, "19 Jun 1992");
                assert_eq!(details.awards, "Nominated for 2 Oscars. 2 wins & 27 nominations total");
                assert_eq!(details.poster_url(), Some("http://x/returns.jpg"));
            }
            LookupResult::NotFound(reason) => panic!("expected details, got {}", reason),
        }
    }

    #[test]
    fn detail_envelope_failure_carries_remote_reason() {
        let json = r#"{"Response": "False", "Error": "Incorrect IMDb ID."}"#;
        let envelope: DetailEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.into_result(),
            LookupResult::NotFound("Incorrect IMDb ID.".to_string())
        );
    }
}
