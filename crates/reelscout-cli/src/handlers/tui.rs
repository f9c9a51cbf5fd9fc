use crate::presentation::tui::Widget;
use anyhow::Result;
use reelscout_client::OmdbClient;
use reelscout_store::FileStore;

pub fn handle(client: OmdbClient, store: FileStore) -> Result<()> {
    Widget::new(client, store)?.run()
}
