//! cinemax-api - HTTP gateway to the CineMax movie service
//!
//! [`ApiClient`] is the single place that knows how to reach the service: it
//! joins paths onto the configured base URL, encodes query values, and maps
//! transport and HTTP failures onto [`cinemax_core::Error`].
//!
//! [`MovieApi`] is the typed surface the application depends on. The TEA
//! layer only ever sees this trait, so tests substitute an in-memory fake.

pub mod client;
pub mod service;

pub use client::{encode_component, ApiClient, DEFAULT_BASE_URL};
pub use service::{HttpMovieApi, LocalMovieApi, MovieApi};
