//! Settings types (`config.toml`)

use std::time::Duration;

use cinemax_api::DEFAULT_BASE_URL;
use cinemax_core::prelude::*;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::suggestions::DEFAULT_MIN_QUERY_CHARS;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Movie service connection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the movie service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds; 0 waits forever
    #[serde(default)]
    pub request_timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: 0,
        }
    }
}

impl ApiSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

/// Search-as-you-type behavior
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchSettings {
    /// Quiet period before suggestions are requested
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Trimmed characters needed before suggestions are requested
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_chars: default_min_query_chars(),
        }
    }
}

impl SearchSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Capture mouse clicks
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { mouse: true }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_min_query_chars() -> usize {
    DEFAULT_MIN_QUERY_CHARS
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// Replace the service base URL when `url` is given
    pub fn with_api_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api.base_url = url;
        }
        self
    }

    /// Reject settings the application cannot run with
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.base_url).map_err(|e| {
            Error::config_invalid(format!(
                "api.base_url '{}' is not a valid URL: {}",
                self.api.base_url, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config_invalid(format!(
                "api.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.search.min_query_chars == 0 {
            return Err(Error::config_invalid(
                "search.min_query_chars must be at least 1",
            ));
        }
        Ok(())
    }
}
