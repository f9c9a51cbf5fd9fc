use crate::events::{AppEvent, Command};
use crate::favorites::FavoritesStore;
use crate::view_models::{
    DetailPanelView, FavoriteButtonLabel, MovieDetailView, SuggestionEntryView, SuggestionListView,
};
use crate::Result;
use reelscout_types::{LookupResult, SearchResult};

/// Single coordinator for the movie lookup widget.
///
/// Consumes [`AppEvent`]s and returns the [`Command`]s the driver must run;
/// all rendering state lives here as view models. The coordinator performs
/// no I/O beyond the injected favorites store, which keeps every membership
/// and sequencing rule testable without a network or a UI surface.
pub struct App<S: FavoritesStore> {
    store: S,
    favorites: Vec<String>,
    input: String,
    next_request_id: u64,
    latest_request_id: u64,
    suggestions: SuggestionListView,
    detail: DetailPanelView,
}

impl<S: FavoritesStore> App<S> {
    /// Build the coordinator, loading the persisted favorites once.
    pub fn new(store: S) -> Self {
        let favorites = store.load();
        Self {
            store,
            favorites,
            input: String::new(),
            next_request_id: 1,
            latest_request_id: 0,
            suggestions: SuggestionListView::default(),
            detail: DetailPanelView::Empty,
        }
    }

    /// Current search input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn suggestions(&self) -> &SuggestionListView {
        &self.suggestions
    }

    pub fn detail(&self) -> &DetailPanelView {
        &self.detail
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    /// Dispatch one event, mutating view state and returning the commands
    /// the driver should execute next.
    pub fn handle(&mut self, event: AppEvent) -> Result<Vec<Command>> {
        match event {
            AppEvent::Started => Ok(self.on_started()),
            AppEvent::InputChanged(raw) => Ok(self.on_input_changed(raw)),
            AppEvent::SearchCompleted { request_id, result } => {
                self.on_search_completed(request_id, result);
                Ok(Vec::new())
            }
            AppEvent::SuggestionChosen(imdb_id) => Ok(self.on_suggestion_chosen(imdb_id)),
            AppEvent::LookupCompleted(result) => {
                self.on_lookup_completed(result);
                Ok(Vec::new())
            }
            AppEvent::FavoritePressed => {
                self.on_favorite_pressed()?;
                Ok(Vec::new())
            }
            AppEvent::DismissRequested => {
                self.suggestions.visible = false;
                Ok(Vec::new())
            }
        }
    }

    fn on_started(&mut self) -> Vec<Command> {
        match self.store.load_last_viewed() {
            Some(imdb_id) => vec![Command::Lookup { imdb_id }],
            None => Vec::new(),
        }
    }

    fn on_input_changed(&mut self, raw: String) -> Vec<Command> {
        let term = raw.trim().to_string();
        self.input = raw;

        if term.is_empty() {
            // Repeated empty input stays a no-op: hide, never issue a request.
            self.suggestions.visible = false;
            return Vec::new();
        }

        self.suggestions.visible = true;
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.latest_request_id = request_id;
        vec![Command::Search { request_id, term }]
    }

    fn on_search_completed(&mut self, request_id: u64, result: SearchResult) {
        // A completion older than the latest issued request is stale; a fast
        // typist must never see old matches overwrite newer ones.
        if request_id != self.latest_request_id {
            return;
        }

        match result {
            SearchResult::Hits(matches) => {
                // Full rebuild: the previous entries (and whatever selection
                // pointed into them) are discarded wholesale.
                self.suggestions.entries = matches
                    .iter()
                    .map(SuggestionEntryView::from_match)
                    .collect();
            }
            // Remote failure flag: suppress rendering, keep prior entries.
            SearchResult::NoResults => {}
        }
    }

    fn on_suggestion_chosen(&mut self, imdb_id: String) -> Vec<Command> {
        self.suggestions.visible = false;
        self.input.clear();
        vec![Command::Lookup { imdb_id }]
    }

    fn on_lookup_completed(&mut self, result: LookupResult) {
        self.detail = match result {
            LookupResult::Found(details) => {
                let label = if self.is_favorite(&details.imdb_id) {
                    FavoriteButtonLabel::AlreadyAdded
                } else {
                    FavoriteButtonLabel::Add
                };
                DetailPanelView::Movie(MovieDetailView::from_details(&details, label))
            }
            LookupResult::NotFound(reason) => DetailPanelView::NotFound(reason),
        };
    }

    fn on_favorite_pressed(&mut self) -> Result<()> {
        let DetailPanelView::Movie(view) = &mut self.detail else {
            return Ok(());
        };

        // Membership is re-checked at press time, not render time.
        if self.favorites.iter().any(|id| id == &view.imdb_id) {
            view.favorite = FavoriteButtonLabel::AlreadyAdded;
            return Ok(());
        }

        self.favorites.push(view.imdb_id.clone());
        self.store.save(&self.favorites)?;
        view.favorite = FavoriteButtonLabel::Added;
        Ok(())
    }

    fn is_favorite(&self, imdb_id: &str) -> bool {
        self.favorites.iter().any(|id| id == imdb_id)
    }
}
