use crate::args::OutputFormat;
use crate::presentation::console;
use anyhow::Result;
use reelscout_store::FileStore;

pub fn handle(store: &FileStore, format: OutputFormat) -> Result<()> {
    let favorites = store.load_favorites();
    console::render_favorites(&favorites, format)
}
