use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Parser)]
#[command(name = "reelscout")]
#[command(about = "Search movies, view details, keep a favorites list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml and the favorites entries
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// OMDb api key (overrides OMDB_API_KEY and config.toml)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search titles and print the first page of matches
    Search {
        /// Free-text search term
        term: String,
    },

    /// Look up one title by IMDb identifier and print its details
    Show {
        /// Identifier as returned by `search` (e.g. tt0103776)
        imdb_id: String,

        /// Do not record this identifier as last viewed
        #[arg(long)]
        no_remember: bool,
    },

    /// Print the favorited identifiers
    Favorites,

    /// Launch the interactive widget (default when no subcommand is given)
    Tui,
}
