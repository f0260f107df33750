//! Recommendation search lifecycle

use cinemax_core::{Error, Movie, Result};
use tracing::debug;

use crate::request::{RequestId, RequestTracker};

/// Inline message for an empty submission
pub const EMPTY_TITLE_MESSAGE: &str = "Please enter a movie title";

/// Inline message when the service gives no usable detail
pub const RECOMMEND_FAILED_MESSAGE: &str = "Failed to get recommendations";

/// What the results area is showing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Success(Vec<Movie>),
    Failed(String),
}

/// An accepted submission that must be sent to the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: RequestId,
    pub title: String,
}

/// One search from submission to displayed result
#[derive(Debug, Clone, Default)]
pub struct RecommendationSession {
    state: SessionState,
    /// Title shown above the results ("Because you liked ...")
    title: Option<String>,
    requests: RequestTracker,
}

impl RecommendationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn results(&self) -> &[Movie] {
        match &self.state {
            SessionState::Success(movies) => movies,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == SessionState::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Loading
    }

    /// Start a search for `title`.
    ///
    /// An empty or whitespace-only title fails validation without a request;
    /// either way anything already in flight is superseded.
    pub fn submit(&mut self, title: &str) -> Result<Submission> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            self.requests.invalidate();
            self.title = None;
            self.state = SessionState::Failed(EMPTY_TITLE_MESSAGE.to_string());
            return Err(Error::validation(EMPTY_TITLE_MESSAGE));
        }

        let id = self.requests.issue();
        self.title = Some(trimmed.to_string());
        self.state = SessionState::Loading;
        Ok(Submission {
            id,
            title: trimmed.to_string(),
        })
    }

    /// Apply a successful reply. Returns false when it was stale.
    pub fn complete(&mut self, id: RequestId, movies: Vec<Movie>) -> bool {
        if !self.requests.is_current(id) {
            debug!("Discarding stale recommendations {}", id);
            return false;
        }
        self.state = SessionState::Success(movies);
        true
    }

    /// Apply a failed reply. Returns false when it was stale.
    pub fn fail(&mut self, id: RequestId, message: String) -> bool {
        if !self.requests.is_current(id) {
            debug!("Discarding stale recommendation failure {}", id);
            return false;
        }
        self.state = SessionState::Failed(message);
        true
    }

    /// Back to idle, dropping title, results, error and any in-flight reply
    pub fn clear(&mut self) {
        self.requests.invalidate();
        self.title = None;
        self.state = SessionState::Idle;
    }

    /// Hide an inline error message
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, SessionState::Failed(_)) {
            self.title = None;
            self.state = SessionState::Idle;
        }
    }
}
