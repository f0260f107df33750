//! JSON-over-HTTP client for the movie service

use std::time::Duration;

use cinemax_core::prelude::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Service address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Characters left unescaped by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single query value or path segment.
///
/// Spaces become `%20` (not `+`), so the service sees exactly what was typed.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Error body the service sends alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Extract the `detail` string from an error body.
///
/// Validation errors carry a list in `detail`; only plain strings are
/// surfaced to the user.
fn parse_detail(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()?
        .detail?
        .as_str()
        .map(str::to_owned)
}

/// HTTP client bound to one service base URL.
///
/// Requests are never retried. A timeout applies only when configured.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client with no request timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Create a client, optionally bounding every request by `timeout`
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        debug!(
            "API client ready: base_url={}, timeout={:?}",
            base_url, timeout
        );
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL for `path` with encoded query pairs
    pub fn url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = String::with_capacity(self.base_url.len() + path.len() + 16);
        url.push_str(&self.base_url);
        if !path.starts_with('/') {
            url.push('/');
        }
        url.push_str(path);

        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&encode_component(key));
            url.push('=');
            url.push_str(&encode_component(value));
        }
        url
    }

    /// GET `path` and decode the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.url(path, query);
        trace!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        decode_response(response).await
    }

    /// POST `body` as JSON to `path` and decode the JSON reply
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, &[]);
        trace!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        decode_response(response).await
    }
}

/// Map a response onto the gateway's error taxonomy
async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| Error::network(e.to_string()))?;

    if !status.is_success() {
        return Err(Error::service(status.as_u16(), parse_detail(&body)));
    }

    serde_json::from_slice(&body).map_err(|e| Error::decode(e.to_string()))
}

/// Validate the base URL and strip trailing slashes
fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = url::Url::parse(trimmed)
        .map_err(|e| Error::config_invalid(format!("Invalid API base URL '{}': {}", raw, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(Error::config_invalid(format!(
            "Unsupported API URL scheme '{}' (expected http or https)",
            other
        ))),
    }
}
