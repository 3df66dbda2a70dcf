//! Client configuration.

use std::time::Duration;

use serde::Deserialize;

/// API client configuration loaded from environment variables.
///
/// Environment variables are prefixed with `PROFILE_`:
/// - `PROFILE_API_URL`: API base URL (default: "http://localhost:8080")
/// - `PROFILE_REQUEST_TIMEOUT_SECS`: Per-request timeout (default: 30)
/// - `PROFILE_API_TOKEN`: Bearer token forwarded on every request (optional)
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Bearer token (optional)
    #[serde(default)]
    pub api_token: Option<String>,
}

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("PROFILE_").from_env::<ClientConfig>()
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout_secs(),
            api_token: None,
        }
    }
}
