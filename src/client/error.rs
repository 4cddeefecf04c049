//! Error types for the Kraken API client.

/// Errors returned by the Kraken API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Base URL that cannot carry endpoint paths.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Resource not found (404).
    #[error("not found: {path}: {message}")]
    NotFound { path: String, message: String },

    /// Unauthorized (401), usually a missing or expired OAuth token.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Permission denied (403), the token lacks a required scope.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Server returned an error status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Page size outside the accepted `1..=100` range.
    #[error("limit must be between 1 and 100, got {0}")]
    InvalidLimit(u32),

    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Classify a transport error, surfacing timeouts separately.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Http(err)
        }
    }
}
