//! Request generations for discarding stale replies
//!
//! Every component that talks to the service owns a [`RequestTracker`].
//! Issuing a request bumps the generation; a reply is only applied when it
//! carries the latest generation. Superseding in-flight work without issuing
//! a new request (clearing, closing) is done with [`RequestTracker::invalidate`].

use std::fmt;

/// Generation number tagging one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Latest-generation bookkeeping for one component
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new generation, superseding all earlier ones
    pub fn issue(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    /// Supersede every outstanding request without issuing a new one
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_supersedes_previous() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue();
        let second = tracker.issue();

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn test_invalidate_supersedes_outstanding() {
        let mut tracker = RequestTracker::new();
        let id = tracker.issue();
        tracker.invalidate();
        assert!(!tracker.is_current(id));

        let next = tracker.issue();
        assert!(tracker.is_current(next));
    }

    #[test]
    fn test_default_id_is_never_current_after_issue() {
        let mut tracker = RequestTracker::new();
        tracker.issue();
        assert!(!tracker.is_current(RequestId::default()));
    }

    #[test]
    fn test_display() {
        let mut tracker = RequestTracker::new();
        assert_eq!(tracker.issue().to_string(), "#1");
    }
}
