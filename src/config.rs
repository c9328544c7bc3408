//! Client configuration loaded from environment variables.
//!
//! Everything has a local-development fallback, so configuration never
//! fails: an unset environment simply points the client at a backend on
//! localhost.

use std::env;
use std::time::Duration;

/// Default backend base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// API client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    /// Fixed per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a config with an explicit base URL and the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize(base_url.into()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `NETRA_API_URL` and `NETRA_TIMEOUT_SECS`, loading a `.env`
    /// file first if one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = env::var("NETRA_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_secs = env::var("NETRA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url: normalize(base_url),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn normalize(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
