//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for each focus/overlay mode
//! - `search`: Suggestion and recommendation handlers
//! - `navigation`: Section and legal page handlers
//! - `genres`: Genre catalog and selection handlers
//! - `detail`: Detail overlay handlers

pub(crate) mod detail;
pub(crate) mod genres;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod search;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;
use crate::request::RequestId;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Start (or restart) the suggestion debounce timer
    ScheduleSuggestions {
        generation: RequestId,
        delay: Duration,
    },

    /// Drop any pending suggestion timer
    CancelSuggestions,

    /// GET /autocomplete
    FetchSuggestions { generation: RequestId, query: String },

    /// POST /recommend
    FetchRecommendations { generation: RequestId, title: String },

    /// GET /top-movies
    FetchTopMovies,

    /// GET /genres
    FetchGenreCatalog,

    /// GET /movies-by-genre
    FetchGenreMovies { generation: RequestId, genre: String },

    /// GET /movie/{id}
    FetchMovieDetail { generation: RequestId, movie_id: i64 },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Both an action and a follow-up message
    pub fn action_then(action: UpdateAction, msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}
