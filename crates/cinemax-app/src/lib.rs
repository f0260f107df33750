//! cinemax-app - Application state and orchestration for CineMax
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! every input becomes a [`Message`], [`handler::update`] mutates [`AppState`]
//! and returns follow-up messages or [`UpdateAction`]s, and the [`Engine`]
//! dispatches actions as background tasks against a [`cinemax_api::MovieApi`].
//!
//! Each screen component owns its own state machine:
//! - [`suggestions::SuggestionEngine`] - debounced autocomplete dropdown
//! - [`recommendation::RecommendationSession`] - one submitted search
//! - [`genres::GenreBrowser`] - genre catalog and toggle selection
//! - [`detail::DetailOverlay`] - movie detail modal
//!
//! Network replies are tagged with a [`request::RequestId`] so that replies
//! for superseded requests are dropped.

pub mod actions;
pub mod config;
pub mod debounce;
pub mod detail;
pub mod engine;
pub mod genres;
pub mod handler;
pub mod input_key;
pub mod load_state;
pub mod message;
pub mod process;
pub mod recommendation;
pub mod request;
pub mod section;
pub mod signals;
pub mod state;
pub mod suggestions;

// Re-export primary types
pub use config::Settings;
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{ClickTarget, Message};
pub use section::SectionCommand;
pub use state::AppState;
