//! Genre catalog and toggle selection

use cinemax_core::{Genre, Movie};
use tracing::debug;

use crate::load_state::LoadState;
use crate::request::{RequestId, RequestTracker};

/// Catalog of genres plus the movies of the selected one
#[derive(Debug, Clone, Default)]
pub struct GenreBrowser {
    catalog: LoadState<Vec<Genre>>,
    selected: Option<String>,
    movies: LoadState<Vec<Movie>>,
    requests: RequestTracker,
}

impl GenreBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &LoadState<Vec<Genre>> {
        &self.catalog
    }

    pub fn genres(&self) -> &[Genre] {
        self.catalog.items()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn movies(&self) -> &LoadState<Vec<Movie>> {
        &self.movies
    }

    /// Mark the catalog as loading if it still needs fetching.
    ///
    /// Returns true when the caller should issue the fetch. A loaded catalog
    /// is never refetched.
    pub fn begin_catalog_load(&mut self) -> bool {
        if self.catalog.needs_fetch() {
            self.catalog = LoadState::Loading;
            true
        } else {
            false
        }
    }

    pub fn catalog_loaded(&mut self, genres: Vec<Genre>) {
        self.catalog = LoadState::Loaded(genres);
    }

    pub fn catalog_failed(&mut self, message: String) {
        self.catalog = LoadState::Failed(message);
    }

    /// Select `name`, or clear the selection if it is already selected.
    ///
    /// Returns the generation to fetch the genre's movies under.
    pub fn toggle(&mut self, name: &str) -> Option<RequestId> {
        if self.selected.as_deref() == Some(name) {
            self.clear_selection();
            return None;
        }
        self.selected = Some(name.to_string());
        self.movies = LoadState::Loading;
        Some(self.requests.issue())
    }

    /// Apply a genre reply. Returns false when it was stale.
    pub fn apply_movies(&mut self, id: RequestId, genre: &str, movies: Vec<Movie>) -> bool {
        if !self.accepts(id, genre) {
            return false;
        }
        self.movies = LoadState::Loaded(movies);
        true
    }

    /// Apply a genre failure. Returns false when it was stale.
    pub fn fail_movies(&mut self, id: RequestId, genre: &str, message: String) -> bool {
        if !self.accepts(id, genre) {
            return false;
        }
        self.movies = LoadState::Failed(message);
        true
    }

    /// Deselect and drop the list, superseding any in-flight fetch
    pub fn clear_selection(&mut self) {
        self.requests.invalidate();
        self.selected = None;
        self.movies = LoadState::NotLoaded;
    }

    fn accepts(&self, id: RequestId, genre: &str) -> bool {
        let current =
            self.requests.is_current(id) && self.selected.as_deref() == Some(genre);
        if !current {
            debug!("Discarding stale genre reply {} for '{}'", id, genre);
        }
        current
    }
}
