//! UI-toolkit-free descriptions of what the widget shows.
//!
//! The coordinator produces these; console and TUI renderers map them onto
//! their surface without re-deriving any membership or sequencing logic.

use reelscout_types::{MatchSummary, MovieDetails};
use serde::Serialize;

/// Poster reference for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PosterView {
    Url(String),
    /// The source marked the poster unavailable; show the placeholder.
    Placeholder,
}

/// One entry in the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionEntryView {
    /// Opaque identifier carried for the later detail lookup.
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: PosterView,
}

impl SuggestionEntryView {
    pub fn from_match(summary: &MatchSummary) -> Self {
        Self {
            imdb_id: summary.imdb_id.clone(),
            title: summary.title.clone(),
            year: summary.year.clone(),
            poster: poster_view(&summary.poster),
        }
    }
}

/// The autocomplete suggestion list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuggestionListView {
    /// Whether the list container is shown at all. Hiding does not clear the
    /// entries; only a fresh render replaces them.
    pub visible: bool,
    pub entries: Vec<SuggestionEntryView>,
}

/// Favorite control label, decided by membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteButtonLabel {
    /// Identifier is not in the favorites list.
    Add,
    /// Identifier was appended by the press that just happened.
    Added,
    /// Identifier was already a member.
    AlreadyAdded,
}

impl FavoriteButtonLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteButtonLabel::Add => "Add to Favorites",
            FavoriteButtonLabel::Added => "Added to Favorites",
            FavoriteButtonLabel::AlreadyAdded => "Already Added to Favorites",
        }
    }
}

/// Fact panel for one title plus its favorite control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieDetailView {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub rated: String,
    pub released: String,
    pub genre: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub awards: String,
    pub poster: PosterView,
    pub favorite: FavoriteButtonLabel,
}

impl MovieDetailView {
    pub fn from_details(details: &MovieDetails, favorite: FavoriteButtonLabel) -> Self {
        Self {
            imdb_id: details.imdb_id.clone(),
            title: details.title.clone(),
            year: details.year.clone(),
            rated: details.rated.clone(),
            released: details.released.clone(),
            genre: details.genre.clone(),
            writer: details.writer.clone(),
            actors: details.actors.clone(),
            plot: details.plot.clone(),
            language: details.language.clone(),
            awards: details.awards.clone(),
            poster: poster_view(&details.poster),
            favorite,
        }
    }
}

/// The result display region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "detail")]
pub enum DetailPanelView {
    /// Nothing selected yet.
    #[default]
    Empty,
    Movie(MovieDetailView),
    /// The lookup came back with the remote's failure flag.
    NotFound(String),
}

fn poster_view(raw: &str) -> PosterView {
    if raw == reelscout_types::POSTER_UNAVAILABLE || raw.is_empty() {
        PosterView::Placeholder
    } else {
        PosterView::Url(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_iff_poster_unavailable() {
        assert_eq!(poster_view("N/A"), PosterView::Placeholder);
        assert_eq!(
            poster_view("http://x/p.jpg"),
            PosterView::Url("http://x/p.jpg".to_string())
        );
    }

    #[test]
    fn favorite_labels_match_widget_text() {
        assert_eq!(FavoriteButtonLabel::Add.as_str(), "Add to Favorites");
        assert_eq!(FavoriteButtonLabel::Added.as_str(), "Added to Favorites");
        assert_eq!(
            FavoriteButtonLabel::AlreadyAdded.as_str(),
            "Already Added to Favorites"
        );
    }
}
