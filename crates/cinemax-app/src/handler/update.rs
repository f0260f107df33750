//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, warn};

use crate::load_state::LoadState;
use crate::message::{ClickTarget, Message};
use crate::state::{AppPhase, AppState};

use super::{detail, genres, keys::handle_key, navigation, search, UpdateAction, UpdateResult};

/// Rows moved by PageUp/PageDown in movie lists
const PAGE_STEP: isize = 10;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Click(target) => handle_click(state, target),

        Message::Tick => {
            state.tick = state.tick.wrapping_add(1);
            UpdateResult::none()
        }

        Message::Startup => {
            debug!("Starting up: loading top movies and genre catalog");
            state.top_movies = LoadState::Loading;
            UpdateResult::action_then(UpdateAction::FetchTopMovies, Message::LoadGenreCatalog)
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate(section) => navigation::handle_navigate(state, section),
        Message::ShowLegal(page) => navigation::handle_show_legal(state, page),
        Message::Section(command) => navigation::handle_section_command(state, command),
        Message::FocusSearch => navigation::handle_focus_search(state),
        Message::FocusResults => navigation::handle_focus_results(state),

        // ─────────────────────────────────────────────────────────
        // Search Messages
        // ─────────────────────────────────────────────────────────
        Message::SearchInput { text } => search::handle_input(state, text),
        Message::SuggestionDebounceElapsed { generation } => {
            search::handle_debounce_elapsed(state, generation)
        }
        Message::SuggestionsLoaded {
            generation,
            query,
            suggestions,
        } => search::handle_suggestions_loaded(state, generation, query, suggestions),
        Message::SuggestionsFailed {
            generation,
            query,
            error,
        } => search::handle_suggestions_failed(state, generation, query, error),
        Message::HighlightNextSuggestion => {
            state.suggestions.highlight_next();
            UpdateResult::none()
        }
        Message::HighlightPrevSuggestion => {
            state.suggestions.highlight_prev();
            UpdateResult::none()
        }
        Message::AcceptSuggestion => search::handle_accept(state, None),
        Message::AcceptSuggestionAt(index) => search::handle_accept(state, Some(index)),
        Message::CloseSuggestions => {
            state.suggestions.close();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Recommendation Messages
        // ─────────────────────────────────────────────────────────
        Message::SubmitSearch => search::handle_submit(state),
        Message::FindSimilar { title } => search::handle_find_similar(state, title),
        Message::RecommendationsLoaded {
            generation,
            title,
            movies,
        } => search::handle_recommendations_loaded(state, generation, title, movies),
        Message::RecommendationsFailed {
            generation,
            title,
            error,
        } => search::handle_recommendations_failed(state, generation, title, error),
        Message::ClearSearch => search::handle_clear(state),
        Message::DismissError => {
            state.recommendations.dismiss_error();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Top Movies / Genre Messages
        // ─────────────────────────────────────────────────────────
        Message::TopMoviesLoaded { movies } => {
            debug!("Loaded {} top movies", movies.len());
            state.top_movies = LoadState::Loaded(movies);
            UpdateResult::none()
        }
        Message::TopMoviesFailed { error } => {
            warn!("Failed to load top movies: {}", error);
            state.top_movies = LoadState::Failed(error);
            UpdateResult::none()
        }
        Message::LoadGenreCatalog => genres::handle_load_catalog(state),
        Message::GenreCatalogLoaded { genres } => {
            state.genres.catalog_loaded(genres);
            UpdateResult::none()
        }
        Message::GenreCatalogFailed { error } => {
            warn!("Failed to load genre catalog: {}", error);
            state.genres.catalog_failed(error);
            UpdateResult::none()
        }
        Message::ToggleGenre { name } => genres::handle_toggle(state, &name),
        Message::GenreMoviesLoaded {
            generation,
            genre,
            movies,
        } => genres::handle_movies_loaded(state, generation, genre, movies),
        Message::GenreMoviesFailed {
            generation,
            genre,
            error,
        } => genres::handle_movies_failed(state, generation, genre, error),
        Message::SwitchGenrePane => genres::handle_switch_pane(state),

        // ─────────────────────────────────────────────────────────
        // Detail Overlay Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenDetail { movie_id } => detail::handle_open(state, movie_id),
        Message::CloseDetail => detail::handle_close(state),
        Message::DetailLoaded {
            generation,
            movie_id,
            detail: record,
        } => detail::handle_loaded(state, generation, movie_id, record),
        Message::DetailFailed {
            generation,
            movie_id,
            error,
        } => detail::handle_failed(state, generation, movie_id, error),
        Message::DetailScrollUp => {
            state.detail.scroll_up();
            UpdateResult::none()
        }
        Message::DetailScrollDown => {
            state.detail.scroll_down();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Cursor Messages
        // ─────────────────────────────────────────────────────────
        Message::CursorUp => move_cursor(state, -1),
        Message::CursorDown => move_cursor(state, 1),
        Message::PageUp => move_cursor(state, -PAGE_STEP),
        Message::PageDown => move_cursor(state, PAGE_STEP),
        Message::CursorTop => {
            if !state.page_scroll_suspended() {
                state.cursor_to_top();
            }
            UpdateResult::none()
        }
        Message::CursorBottom => {
            if !state.page_scroll_suspended() {
                state.cursor_to_bottom();
            }
            UpdateResult::none()
        }
    }
}

fn move_cursor(state: &mut AppState, delta: isize) -> UpdateResult {
    if !state.page_scroll_suspended() {
        state.move_cursor(delta);
    }
    UpdateResult::none()
}

fn handle_click(state: &mut AppState, target: ClickTarget) -> UpdateResult {
    if state.detail.is_open() {
        return match target {
            ClickTarget::Backdrop => UpdateResult::message(Message::CloseDetail),
            _ => UpdateResult::none(),
        };
    }

    match target {
        ClickTarget::SearchInput => UpdateResult::message(Message::FocusSearch),
        ClickTarget::Suggestion(index) => UpdateResult::message(Message::AcceptSuggestionAt(index)),
        ClickTarget::Nav(section) => {
            state.suggestions.close();
            UpdateResult::message(Message::Navigate(section))
        }
        ClickTarget::Legal(page) => UpdateResult::message(Message::ShowLegal(page)),
        ClickTarget::Elsewhere => {
            state.suggestions.close();
            UpdateResult::none()
        }
        ClickTarget::DetailPanel | ClickTarget::Backdrop => UpdateResult::none(),
    }
}
