//! Cancellable debounce timer
//!
//! Each `schedule` aborts the pending timer task and starts a new one, so
//! only the last message scheduled within the quiet period is delivered.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::message::Message;

#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `message` on `tx` after `delay`, replacing any pending timer
    pub fn schedule(&mut self, delay: Duration, tx: mpsc::Sender<Message>, message: Message) {
        self.cancel();
        trace!("Debounce scheduled in {:?}", delay);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(message).await;
        }));
    }

    /// Drop the pending timer, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// A timer is scheduled and has not fired yet
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestTracker;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::new();

        debouncer.schedule(Duration::from_millis(300), tx, Message::Tick);
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(matches!(rx.recv().await, Some(Message::Tick)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_pending() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::new();
        let mut tracker = RequestTracker::new();
        let delay = Duration::from_millis(300);

        for _ in 0..3 {
            let generation = tracker.issue();
            debouncer.schedule(
                delay,
                tx.clone(),
                Message::SuggestionDebounceElapsed { generation },
            );
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        tokio::time::sleep(Duration::from_millis(500)).await;

        let mut fired = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            fired.push(msg);
        }
        assert_eq!(fired.len(), 1);
        assert!(matches!(
            fired[0],
            Message::SuggestionDebounceElapsed { generation } if tracker.is_current(generation)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_delivery() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::new();

        debouncer.schedule(Duration::from_millis(300), tx, Message::Tick);
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }
}
