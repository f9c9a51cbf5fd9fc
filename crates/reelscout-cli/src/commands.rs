use crate::args::{Cli, Commands};
use crate::config::{resolve_data_dir, Config};
use crate::handlers;
use anyhow::Result;
use reelscout_client::OmdbClient;
use reelscout_store::FileStore;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config = Config::load_from(&data_dir.join("config.toml"))?;

    let store = FileStore::open(&data_dir)?;
    let client = OmdbClient::new(
        config.resolve_base_url(),
        config.resolve_api_key(cli.api_key.as_deref()),
    );

    match cli.command {
        None | Some(Commands::Tui) => handlers::tui::handle(client, store),

        Some(Commands::Search { term }) => handlers::search::handle(&client, &term, cli.format),

        Some(Commands::Show {
            imdb_id,
            no_remember,
        }) => handlers::show::handle(&client, &store, &imdb_id, no_remember, cli.format),

        Some(Commands::Favorites) => handlers::favorites::handle(&store, cli.format),
    }
}
