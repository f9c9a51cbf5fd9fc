use crate::args::OutputFormat;
use crate::presentation::console;
use anyhow::Result;
use reelscout_client::{MovieSource, OmdbClient};
use reelscout_core::{DetailPanelView, FavoriteButtonLabel, MovieDetailView};
use reelscout_store::FileStore;
use reelscout_types::LookupResult;

pub fn handle(
    client: &OmdbClient,
    store: &FileStore,
    imdb_id: &str,
    no_remember: bool,
    format: OutputFormat,
) -> Result<()> {
    let panel = match client.lookup(imdb_id)? {
        LookupResult::Found(details) => {
            let favorites = store.load_favorites();
            let label = if favorites.iter().any(|id| id == &details.imdb_id) {
                FavoriteButtonLabel::AlreadyAdded
            } else {
                FavoriteButtonLabel::Add
            };

            // The interactive widget only ever reads this entry; the one-shot
            // command is what records it.
            if !no_remember {
                store.save_last_viewed(&details.imdb_id)?;
            }

            DetailPanelView::Movie(MovieDetailView::from_details(&details, label))
        }
        LookupResult::NotFound(reason) => DetailPanelView::NotFound(reason),
    };

    console::render_detail(&panel, format)
}
