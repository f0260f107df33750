//! Movie detail overlay

use cinemax_core::MovieDetail;
use tracing::debug;

use crate::load_state::LoadState;
use crate::request::{RequestId, RequestTracker};

/// Shown in the overlay when the detail fetch fails
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to load details.";

#[derive(Debug, Clone, PartialEq)]
struct OpenDetail {
    movie_id: i64,
    content: LoadState<Box<MovieDetail>>,
    scroll: u16,
}

/// Modal overlay showing one movie's full record
#[derive(Debug, Clone, Default)]
pub struct DetailOverlay {
    open: Option<OpenDetail>,
    requests: RequestTracker,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn movie_id(&self) -> Option<i64> {
        self.open.as_ref().map(|o| o.movie_id)
    }

    pub fn content(&self) -> Option<&LoadState<Box<MovieDetail>>> {
        self.open.as_ref().map(|o| &o.content)
    }

    pub fn scroll(&self) -> u16 {
        self.open.as_ref().map(|o| o.scroll).unwrap_or(0)
    }

    /// Open for `movie_id`, replacing whatever was open
    pub fn open(&mut self, movie_id: i64) -> RequestId {
        let id = self.requests.issue();
        self.open = Some(OpenDetail {
            movie_id,
            content: LoadState::Loading,
            scroll: 0,
        });
        id
    }

    /// Apply a detail reply. Returns false when it was stale.
    pub fn apply(&mut self, id: RequestId, movie_id: i64, detail: Box<MovieDetail>) -> bool {
        match self.current_mut(id, movie_id) {
            Some(open) => {
                open.content = LoadState::Loaded(detail);
                true
            }
            None => false,
        }
    }

    /// Apply a detail failure. Returns false when it was stale.
    pub fn fail(&mut self, id: RequestId, movie_id: i64) -> bool {
        match self.current_mut(id, movie_id) {
            Some(open) => {
                open.content = LoadState::Failed(DETAIL_FAILED_MESSAGE.to_string());
                true
            }
            None => false,
        }
    }

    /// Close the overlay. Returns false if it was already closed.
    pub fn close(&mut self) -> bool {
        self.requests.invalidate();
        self.open.take().is_some()
    }

    pub fn scroll_up(&mut self) {
        if let Some(open) = self.open.as_mut() {
            open.scroll = open.scroll.saturating_sub(1);
        }
    }

    pub fn scroll_down(&mut self) {
        if let Some(open) = self.open.as_mut() {
            open.scroll = open.scroll.saturating_add(1);
        }
    }

    /// Keep the scroll offset within the rendered content height
    pub fn clamp_scroll(&mut self, max: u16) {
        if let Some(open) = self.open.as_mut() {
            open.scroll = open.scroll.min(max);
        }
    }

    fn current_mut(&mut self, id: RequestId, movie_id: i64) -> Option<&mut OpenDetail> {
        if !self.requests.is_current(id) {
            debug!("Discarding stale detail reply {} for movie {}", id, movie_id);
            return None;
        }
        self.open.as_mut().filter(|open| open.movie_id == movie_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: i64, title: &str) -> Box<MovieDetail> {
        Box::new(MovieDetail::new(id, title))
    }

    #[test]
    fn test_open_starts_loading() {
        let mut overlay = DetailOverlay::new();
        overlay.open(42);
        assert!(overlay.is_open());
        assert_eq!(overlay.movie_id(), Some(42));
        assert!(overlay.content().unwrap().is_loading());
    }

    #[test]
    fn test_second_open_wins() {
        let mut overlay = DetailOverlay::new();
        let first = overlay.open(42);
        let second = overlay.open(7);

        assert!(!overlay.apply(first, 42, detail(42, "Answer")));
        assert!(overlay.apply(second, 7, detail(7, "Seven")));
        let shown = overlay.content().unwrap().loaded().unwrap();
        assert_eq!(shown.title, "Seven");
    }

    #[test]
    fn test_second_open_wins_regardless_of_order() {
        let mut overlay = DetailOverlay::new();
        let first = overlay.open(42);
        let second = overlay.open(7);

        assert!(overlay.apply(second, 7, detail(7, "Seven")));
        assert!(!overlay.apply(first, 42, detail(42, "Answer")));
        assert_eq!(overlay.movie_id(), Some(7));
    }

    #[test]
    fn test_reply_after_close_ignored() {
        let mut overlay = DetailOverlay::new();
        let id = overlay.open(42);
        assert!(overlay.close());
        assert!(!overlay.apply(id, 42, detail(42, "Answer")));
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_failure_message() {
        let mut overlay = DetailOverlay::new();
        let id = overlay.open(42);
        assert!(overlay.fail(id, 42));
        assert_eq!(
            overlay.content().unwrap().error(),
            Some(DETAIL_FAILED_MESSAGE)
        );
    }

    #[test]
    fn test_close_when_closed() {
        let mut overlay = DetailOverlay::new();
        assert!(!overlay.close());
    }

    #[test]
    fn test_scroll_resets_on_reopen() {
        let mut overlay = DetailOverlay::new();
        overlay.open(1);
        overlay.scroll_down();
        overlay.scroll_down();
        assert_eq!(overlay.scroll(), 2);
        overlay.clamp_scroll(1);
        assert_eq!(overlay.scroll(), 1);
        overlay.open(2);
        assert_eq!(overlay.scroll(), 0);
    }
}
