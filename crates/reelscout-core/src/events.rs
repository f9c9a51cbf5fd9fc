use reelscout_types::{LookupResult, SearchResult};

/// Named events dispatched through the [`App`](crate::App) coordinator.
///
/// Every piece of input — user keystrokes, completed network calls, startup —
/// arrives as one of these instead of ad hoc callbacks, so suggestion-list
/// rebuilds can never leak or double-register handlers.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Process start; triggers last-viewed restore when one is stored.
    Started,
    /// The search input text changed (raw, untrimmed).
    InputChanged(String),
    /// A search issued earlier came back.
    SearchCompleted {
        request_id: u64,
        result: SearchResult,
    },
    /// The user picked a suggestion entry; carries its identifier.
    SuggestionChosen(String),
    /// A detail lookup came back.
    LookupCompleted(LookupResult),
    /// The user pressed the favorite control on the detail panel.
    FavoritePressed,
    /// Pointer/key action outside the search input; hides the suggestion list.
    DismissRequested,
}

/// Side effects the coordinator asks its driver to perform.
///
/// The coordinator never touches the network itself; the driver executes
/// these sequentially and feeds the outcome back as an [`AppEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Issue a search for `term`. `request_id` is monotonic; the coordinator
    /// drops completions that are older than the latest issued request.
    Search { request_id: u64, term: String },
    /// Fetch full details for one title.
    Lookup { imdb_id: String },
}
