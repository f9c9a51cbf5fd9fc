use crate::args::OutputFormat;
use crate::presentation::console;
use anyhow::Result;
use reelscout_client::{MovieSource, OmdbClient};
use reelscout_core::SuggestionEntryView;
use reelscout_types::SearchResult;

pub fn handle(client: &OmdbClient, term: &str, format: OutputFormat) -> Result<()> {
    let term = term.trim();
    if term.is_empty() {
        eprintln!("Nothing to search for.");
        return Ok(());
    }

    let entries: Vec<SuggestionEntryView> = match client.search(term)? {
        SearchResult::Hits(matches) => matches.iter().map(SuggestionEntryView::from_match).collect(),
        SearchResult::NoResults => Vec::new(),
    };

    console::render_matches(term, &entries, format)
}
