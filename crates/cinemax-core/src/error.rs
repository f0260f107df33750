//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Movie Service Errors
    // ─────────────────────────────────────────────────────────────
    /// Input rejected before any request was made
    #[error("{message}")]
    Validation { message: String },

    /// Transport failure: connection refused, timeout, truncated body
    #[error("Network error: {message}")]
    Network { message: String },

    /// The service answered with a non-2xx status
    #[error("Service error (HTTP {status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Service { status: u16, detail: Option<String> },

    /// A 2xx body that could not be decoded into the expected shape
    #[error("Unexpected response from service: {message}")]
    Decode { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn service(status: u16, detail: Option<String>) -> Self {
        Self::Service { status, detail }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// The server-provided `detail` string, if the service sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Service { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user inline.
    ///
    /// Validation messages and service details are shown verbatim; every
    /// other failure collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Validation { message } => message.clone(),
            Error::Service {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TerminalInit(_) | Error::ConfigInvalid { .. }
        )
    }
}
