//! API client error types.

use thiserror::Error;

/// Errors that can occur while talking to the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server responded with a non-success status. The message is the
    /// best human-readable explanation extractable from the response body
    /// (JSON `error`/`message` field, raw text, or the caller's fallback).
    #[error("{0}")]
    Api(String),

    /// The request never produced a usable response (connection, decode).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// An authenticated call was attempted with no stored token. Failed
    /// before any network I/O.
    #[error("No authentication token found")]
    MissingToken,
}

impl ApiError {
    /// The message to surface in page-level error state.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
