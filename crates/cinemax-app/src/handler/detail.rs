//! Detail overlay handlers

use cinemax_core::MovieDetail;
use tracing::{debug, warn};

use crate::request::RequestId;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_open(state: &mut AppState, movie_id: i64) -> UpdateResult {
    debug!("Opening detail for movie {}", movie_id);
    state.suggestions.close();
    let generation = state.detail.open(movie_id);
    UpdateResult::action(UpdateAction::FetchMovieDetail {
        generation,
        movie_id,
    })
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    if state.detail.close() {
        debug!("Closed detail overlay");
    }
    UpdateResult::none()
}

pub fn handle_loaded(
    state: &mut AppState,
    generation: RequestId,
    movie_id: i64,
    detail: Box<MovieDetail>,
) -> UpdateResult {
    state.detail.apply(generation, movie_id, detail);
    UpdateResult::none()
}

pub fn handle_failed(
    state: &mut AppState,
    generation: RequestId,
    movie_id: i64,
    error: String,
) -> UpdateResult {
    if state.detail.fail(generation, movie_id) {
        warn!("Failed to load detail for movie {}: {}", movie_id, error);
    }
    UpdateResult::none()
}
