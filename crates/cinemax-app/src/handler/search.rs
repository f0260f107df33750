//! Suggestion and recommendation handlers

use cinemax_core::Movie;
use tracing::{debug, info, warn};

use crate::message::Message;
use crate::request::RequestId;
use crate::state::{AppState, Focus};

use super::{UpdateAction, UpdateResult};

/// Search input text changed
pub fn handle_input(state: &mut AppState, text: String) -> UpdateResult {
    let min_chars = state.min_query_chars();
    let scheduled = state.suggestions.on_input(&text, min_chars);
    state.search_input = text;

    match scheduled {
        Some(generation) => UpdateResult::action(UpdateAction::ScheduleSuggestions {
            generation,
            delay: state.debounce(),
        }),
        None => UpdateResult::action(UpdateAction::CancelSuggestions),
    }
}

pub fn handle_debounce_elapsed(state: &mut AppState, generation: RequestId) -> UpdateResult {
    match state.suggestions.take_due(generation, &state.search_input) {
        Some(query) => UpdateResult::action(UpdateAction::FetchSuggestions { generation, query }),
        None => UpdateResult::none(),
    }
}

pub fn handle_suggestions_loaded(
    state: &mut AppState,
    generation: RequestId,
    query: String,
    suggestions: Vec<String>,
) -> UpdateResult {
    if state
        .suggestions
        .apply(generation, &query, suggestions, &state.search_input)
    {
        debug!(
            "Showing {} suggestions for '{}'",
            state.suggestions.items().len(),
            query
        );
    }
    UpdateResult::none()
}

/// Autocomplete failures are logged and otherwise ignored
pub fn handle_suggestions_failed(
    state: &mut AppState,
    generation: RequestId,
    query: String,
    error: String,
) -> UpdateResult {
    warn!("Autocomplete for '{}' failed: {}", query, error);
    state.suggestions.fail(generation);
    UpdateResult::none()
}

/// Accept the highlighted row, or the row at `index`
pub fn handle_accept(state: &mut AppState, index: Option<usize>) -> UpdateResult {
    let accepted = match index {
        Some(i) => state.suggestions.accept_at(i),
        None => state.suggestions.accept(),
    };

    if let Some(title) = accepted {
        debug!("Accepted suggestion '{}'", title);
        // Filled directly so the new text does not trigger another lookup
        state.search_input = title;
        state.focus = Focus::Search;
        return UpdateResult::action(UpdateAction::CancelSuggestions);
    }
    UpdateResult::none()
}

pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    state.suggestions.dismiss();

    match state.recommendations.submit(&state.search_input) {
        Ok(submission) => {
            info!("Requesting recommendations for '{}'", submission.title);
            state.legal_page = None;
            state.focus = Focus::Results;
            state.page.scroll_to_top();
            UpdateResult::action(UpdateAction::FetchRecommendations {
                generation: submission.id,
                title: submission.title,
            })
        }
        Err(e) => {
            debug!("Search not submitted: {}", e);
            state.legal_page = None;
            UpdateResult::action(UpdateAction::CancelSuggestions)
        }
    }
}

/// Search for movies similar to `title`
pub fn handle_find_similar(state: &mut AppState, title: String) -> UpdateResult {
    state.suggestions.reset();
    state.search_input = title;
    UpdateResult::message(Message::SubmitSearch)
}

pub fn handle_recommendations_loaded(
    state: &mut AppState,
    generation: RequestId,
    title: String,
    movies: Vec<Movie>,
) -> UpdateResult {
    let count = movies.len();
    if state.recommendations.complete(generation, movies) {
        info!("Received {} recommendations for '{}'", count, title);
        state.page.cursor = 0;
    }
    UpdateResult::none()
}

pub fn handle_recommendations_failed(
    state: &mut AppState,
    generation: RequestId,
    title: String,
    error: String,
) -> UpdateResult {
    if state.recommendations.fail(generation, error.clone()) {
        warn!("Recommendations for '{}' failed: {}", title, error);
    }
    UpdateResult::none()
}

/// Drop results and the typed text, returning to the section content
pub fn handle_clear(state: &mut AppState) -> UpdateResult {
    state.search_input.clear();
    state.suggestions.reset();
    state.recommendations.clear();
    state.page.scroll_to_top();
    UpdateResult::action(UpdateAction::CancelSuggestions)
}
