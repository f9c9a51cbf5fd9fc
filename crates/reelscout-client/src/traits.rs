use crate::Result;
use reelscout_types::{LookupResult, SearchResult};

/// Remote movie source: search-by-term and lookup-by-identifier.
///
/// Both calls are synchronous and carry no retry or timeout policy of their
/// own; a transport failure is terminal for that request.
pub trait MovieSource {
    /// Search for titles matching `term` (first result page only).
    fn search(&self, term: &str) -> Result<SearchResult>;

    /// Fetch full details for one title by its opaque identifier.
    fn lookup(&self, imdb_id: &str) -> Result<LookupResult>;
}
