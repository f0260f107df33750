//! Autocomplete suggestion dropdown state machine
//!
//! ```text
//! Empty ──input >= min──▶ Pending ──reply──▶ Shown ──accept──▶ Selected
//!   ▲                        │  ▲               │
//!   └────input < min─────────┘  └────input──────┘
//! ```
//!
//! The engine never talks to the network. It hands out a [`RequestId`] when a
//! fetch should be scheduled and validates replies against it; the debounce
//! timer and the fetch itself are actions run by the engine loop.

use tracing::debug;

use crate::request::{RequestId, RequestTracker};

/// Minimum trimmed query length before suggestions are requested
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionPhase {
    /// Nothing to show
    #[default]
    Empty,
    /// Waiting for the debounce timer or the reply
    Pending,
    /// Suggestions available
    Shown,
    /// A suggestion was accepted into the search input
    Selected,
}

/// Suggestion list, highlight and dropdown visibility
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    items: Vec<String>,
    /// `None` means no row highlighted
    highlighted: Option<usize>,
    open: bool,
    phase: SuggestionPhase,
    requests: RequestTracker,
}

impl SuggestionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_item(&self) -> Option<&str> {
        self.highlighted
            .and_then(|i| self.items.get(i))
            .map(String::as_str)
    }

    pub fn phase(&self) -> SuggestionPhase {
        self.phase
    }

    /// Dropdown is visible
    pub fn is_open(&self) -> bool {
        self.open && !self.items.is_empty()
    }

    pub fn is_pending(&self) -> bool {
        self.phase == SuggestionPhase::Pending
    }

    /// React to the search input changing.
    ///
    /// Any in-flight request is superseded. Returns the generation to
    /// schedule a debounced fetch for, or `None` when the query is too
    /// short, in which case the list is cleared.
    pub fn on_input(&mut self, text: &str, min_chars: usize) -> Option<RequestId> {
        if text.trim().chars().count() < min_chars {
            self.reset();
            return None;
        }
        self.phase = SuggestionPhase::Pending;
        Some(self.requests.issue())
    }

    /// Debounce window elapsed for `id`.
    ///
    /// Returns the query to fetch when `id` is still the latest scheduled
    /// request.
    pub fn take_due(&self, id: RequestId, current_input: &str) -> Option<String> {
        if self.requests.is_current(id) && self.is_pending() {
            Some(current_input.to_string())
        } else {
            debug!("Dropping superseded suggestion timer {}", id);
            None
        }
    }

    /// Apply a reply. Returns false when it was stale and discarded.
    pub fn apply(
        &mut self,
        id: RequestId,
        query: &str,
        suggestions: Vec<String>,
        current_input: &str,
    ) -> bool {
        if !self.requests.is_current(id) || query != current_input {
            debug!("Discarding stale suggestions {} for '{}'", id, query);
            return false;
        }

        self.items = suggestions;
        self.highlighted = None;
        self.open = !self.items.is_empty();
        self.phase = if self.items.is_empty() {
            SuggestionPhase::Empty
        } else {
            SuggestionPhase::Shown
        };
        true
    }

    /// A fetch failed. Failures are silent: the current list is kept.
    pub fn fail(&mut self, id: RequestId) -> bool {
        if !self.requests.is_current(id) {
            return false;
        }
        self.phase = if self.items.is_empty() {
            SuggestionPhase::Empty
        } else {
            SuggestionPhase::Shown
        };
        true
    }

    /// Move the highlight down, stopping at the last row
    pub fn highlight_next(&mut self) {
        if !self.is_open() {
            return;
        }
        let last = self.items.len() - 1;
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    /// Move the highlight up; past the first row nothing is highlighted
    pub fn highlight_prev(&mut self) {
        if !self.is_open() {
            return;
        }
        self.highlighted = match self.highlighted {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Accept the highlighted row
    pub fn accept(&mut self) -> Option<String> {
        let index = self.highlighted?;
        self.accept_at(index)
    }

    /// Accept the row at `index` (mouse click)
    pub fn accept_at(&mut self, index: usize) -> Option<String> {
        if !self.is_open() {
            return None;
        }
        let item = self.items.get(index)?.clone();
        self.requests.invalidate();
        self.items.clear();
        self.highlighted = None;
        self.open = false;
        self.phase = SuggestionPhase::Selected;
        Some(item)
    }

    /// Hide the dropdown without selecting; the typed text is untouched
    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    /// Show the current list again when the input regains focus
    pub fn reopen(&mut self) {
        if !self.items.is_empty() {
            self.open = true;
        }
    }

    /// Close and supersede anything in flight; used when a search is submitted
    pub fn dismiss(&mut self) {
        self.requests.invalidate();
        self.close();
        if self.is_pending() {
            self.phase = if self.items.is_empty() {
                SuggestionPhase::Empty
            } else {
                SuggestionPhase::Shown
            };
        }
    }

    /// Back to `Empty`, superseding anything in flight
    pub fn reset(&mut self) {
        self.requests.invalidate();
        self.items.clear();
        self.highlighted = None;
        self.open = false;
        self.phase = SuggestionPhase::Empty;
    }
}
