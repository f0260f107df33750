//! Genre catalog and selection handlers

use cinemax_core::Movie;
use tracing::{debug, warn};

use crate::request::RequestId;
use crate::state::{AppState, GenrePane};

use super::{UpdateAction, UpdateResult};

/// Fetch the catalog unless it is loaded or already loading
pub fn handle_load_catalog(state: &mut AppState) -> UpdateResult {
    if state.genres.begin_catalog_load() {
        UpdateResult::action(UpdateAction::FetchGenreCatalog)
    } else {
        UpdateResult::none()
    }
}

pub fn handle_toggle(state: &mut AppState, name: &str) -> UpdateResult {
    state.page.cursor = 0;
    match state.genres.toggle(name) {
        Some(generation) => {
            debug!("Selected genre '{}'", name);
            UpdateResult::action(UpdateAction::FetchGenreMovies {
                generation,
                genre: name.to_string(),
            })
        }
        None => {
            debug!("Deselected genre '{}'", name);
            state.page.genre_pane = GenrePane::Catalog;
            UpdateResult::none()
        }
    }
}

pub fn handle_movies_loaded(
    state: &mut AppState,
    generation: RequestId,
    genre: String,
    movies: Vec<Movie>,
) -> UpdateResult {
    let count = movies.len();
    if state.genres.apply_movies(generation, &genre, movies) {
        debug!("Loaded {} movies for genre '{}'", count, genre);
    }
    UpdateResult::none()
}

pub fn handle_movies_failed(
    state: &mut AppState,
    generation: RequestId,
    genre: String,
    error: String,
) -> UpdateResult {
    if state.genres.fail_movies(generation, &genre, error.clone()) {
        warn!("Failed to load movies for genre '{}': {}", genre, error);
    }
    UpdateResult::none()
}

/// Move the cursor between the catalog and the selected genre's movies
pub fn handle_switch_pane(state: &mut AppState) -> UpdateResult {
    state.page.genre_pane = match (state.page.genre_pane, state.genres.selected()) {
        (GenrePane::Catalog, Some(_)) => GenrePane::Movies,
        _ => GenrePane::Catalog,
    };
    UpdateResult::none()
}
