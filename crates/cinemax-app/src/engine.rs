//! Engine - orchestration state shared by the TUI runner and tests
//!
//! The Engine owns the TEA state, the message channel, the movie service
//! handle and the suggestion debouncer. Input sources (terminal events,
//! signal handler, background fetches) feed the channel; the runner drains
//! it and renders.

use std::sync::Arc;

use cinemax_api::MovieApi;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::Settings;
use crate::debounce::Debouncer;
use crate::message::Message;
use crate::process;
use crate::state::AppState;

/// Capacity of the unified message channel
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for CineMax.
pub struct Engine<A> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, fetch tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Movie service the fetch actions run against
    api: Arc<A>,

    /// Pending autocomplete timer
    debouncer: Debouncer,

    /// Resolved settings
    pub settings: Settings,
}

impl<A> Engine<A>
where
    A: MovieApi + Sync + 'static,
{
    pub fn new(api: A, settings: Settings) -> Self {
        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

        Self {
            state,
            msg_tx,
            msg_rx,
            api: Arc::new(api),
            debouncer: Debouncer::new(),
            settings,
        }
    }

    /// Kick off the initial loads. Must be called inside a tokio runtime.
    pub fn start(&mut self) {
        info!("Engine starting");
        self.process_message(Message::Startup);
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.api,
            &self.msg_tx,
            &mut self.debouncer,
        );
    }

    /// Process every message already queued, without waiting.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns false when every sender is gone.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Stop timers. In-flight fetches are left to finish; their replies are
    /// dropped with the channel.
    pub async fn shutdown(&mut self) {
        debug!("Engine shutting down");
        self.debouncer.cancel();
        self.msg_rx.close();
    }
}
