//! Profile loading error types.

use thiserror::Error;

/// Generic message shown to the user for any load failure.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load user profile.";

/// Coarse classification of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Network,
    MalformedResponse,
}

/// Errors that can occur while loading a profile bundle.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport failure or unexpected HTTP status.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be interpreted.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::NotFound(_) => ErrorKind::NotFound,
            LoadError::Network(_) => ErrorKind::Network,
            LoadError::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }

    /// Text for the display layer. Identical for every kind.
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            LoadError::MalformedResponse(e.to_string())
        } else {
            LoadError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::MalformedResponse(e.to_string())
    }
}

/// Errors raised while building an API client.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API base URL cannot be used as a request base.
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Result type alias using LoadError.
pub type LoadResult<T> = Result<T, LoadError>;
