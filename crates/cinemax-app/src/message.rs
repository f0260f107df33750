//! Message types for the application (TEA pattern)

use cinemax_core::{Genre, LegalPage, Movie, MovieDetail, Section};

use crate::input_key::InputKey;
use crate::request::RequestId;
use crate::section::SectionCommand;

/// Screen region under a mouse click, resolved by the view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The search input box
    SearchInput,
    /// A row of the open suggestion dropdown
    Suggestion(usize),
    /// Inside the detail overlay panel
    DetailPanel,
    /// Outside the detail overlay panel while it is open
    Backdrop,
    /// A header tab, or the brand for `Section::Home`
    Nav(Section),
    /// A footer link
    Legal(LegalPage),
    /// Anywhere else
    Elsewhere,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Mouse click, already resolved to a screen region
    Click(ClickTarget),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application (Ctrl+C, `q`, signal handler)
    Quit,

    /// First message after the engine starts
    Startup,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Header tab or number key selected a section
    Navigate(Section),
    /// Footer link selected a static page
    ShowLegal(LegalPage),
    /// Reset components for a section change
    Section(SectionCommand),
    /// Move keyboard focus to the search input
    FocusSearch,
    /// Move keyboard focus to the content area
    FocusResults,

    // ─────────────────────────────────────────────────────────
    // Search Messages
    // ─────────────────────────────────────────────────────────
    /// Search input text changed
    SearchInput { text: String },
    /// Debounce window elapsed for a scheduled suggestion fetch
    SuggestionDebounceElapsed { generation: RequestId },
    /// Autocomplete reply
    SuggestionsLoaded {
        generation: RequestId,
        query: String,
        suggestions: Vec<String>,
    },
    /// Autocomplete failed (never shown to the user)
    SuggestionsFailed {
        generation: RequestId,
        query: String,
        error: String,
    },
    HighlightNextSuggestion,
    HighlightPrevSuggestion,
    /// Accept the highlighted suggestion into the input
    AcceptSuggestion,
    /// Accept a specific suggestion row (mouse)
    AcceptSuggestionAt(usize),
    /// Hide the dropdown, keeping the typed text
    CloseSuggestions,

    // ─────────────────────────────────────────────────────────
    // Recommendation Messages
    // ─────────────────────────────────────────────────────────
    /// Submit the search input for recommendations
    SubmitSearch,
    /// Search for movies similar to `title`
    FindSimilar { title: String },
    RecommendationsLoaded {
        generation: RequestId,
        title: String,
        movies: Vec<Movie>,
    },
    RecommendationsFailed {
        generation: RequestId,
        title: String,
        error: String,
    },
    /// Drop results and search text, back to the section content
    ClearSearch,
    /// Hide the inline error message
    DismissError,

    // ─────────────────────────────────────────────────────────
    // Top Movies / Genre Messages
    // ─────────────────────────────────────────────────────────
    TopMoviesLoaded { movies: Vec<Movie> },
    TopMoviesFailed { error: String },
    /// Fetch the genre catalog unless it is already loaded or loading
    LoadGenreCatalog,
    GenreCatalogLoaded { genres: Vec<Genre> },
    GenreCatalogFailed { error: String },
    /// Select a genre, or deselect it when already selected
    ToggleGenre { name: String },
    GenreMoviesLoaded {
        generation: RequestId,
        genre: String,
        movies: Vec<Movie>,
    },
    GenreMoviesFailed {
        generation: RequestId,
        genre: String,
        error: String,
    },
    /// Move the cursor between the genre catalog and its movie list
    SwitchGenrePane,

    // ─────────────────────────────────────────────────────────
    // Detail Overlay Messages
    // ─────────────────────────────────────────────────────────
    OpenDetail { movie_id: i64 },
    CloseDetail,
    DetailLoaded {
        generation: RequestId,
        movie_id: i64,
        detail: Box<MovieDetail>,
    },
    DetailFailed {
        generation: RequestId,
        movie_id: i64,
        error: String,
    },
    DetailScrollUp,
    DetailScrollDown,

    // ─────────────────────────────────────────────────────────
    // Cursor Messages
    // ─────────────────────────────────────────────────────────
    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,
    PageUp,
    PageDown,
}
