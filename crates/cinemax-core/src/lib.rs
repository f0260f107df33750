//! # cinemax-core - Core Domain Types
//!
//! Foundation crate for CineMax. Provides the movie domain model, error
//! handling, logging setup, and display formatting shared by every other
//! crate in the workspace.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Movie`] - Movie summary as returned by list endpoints
//! - [`MovieDetail`] - Full record for the detail overlay
//! - [`Genre`] - Genre name with its catalog size
//! - [`Section`] - Top-level navigation section
//! - [`LegalPage`] - Static legal/about pages
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ### Formatting (`format`)
//! - [`format_runtime()`], [`format_money()`], [`release_year()`] - detail view helpers
//! - [`crew_role_label()`], [`group_crew_by_role()`] - Short labels for crew jobs
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use cinemax_core::prelude::*;
//! ```

pub mod error;
pub mod format;
pub mod legal;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all CineMax crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result};
pub use format::{
    crew_role_label, format_count, format_money, format_rating, format_runtime,
    group_crew_by_role, release_year,
};
pub use legal::{LegalContent, LegalSection};
pub use types::{CastMember, CrewMember, Genre, LegalPage, Movie, MovieDetail, Section};
