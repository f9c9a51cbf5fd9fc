pub mod app;
pub mod error;
pub mod events;
pub mod favorites;
pub mod view_models;

pub use app::App;
pub use error::{Error, Result};
pub use events::{AppEvent, Command};
pub use favorites::{FavoritesStore, MemoryStore};
pub use view_models::{
    DetailPanelView, FavoriteButtonLabel, MovieDetailView, PosterView, SuggestionEntryView,
    SuggestionListView,
};
