//! Error types for the Bygningsreglement search client
//!
//! Errors fall into three families that callers can branch on:
//! transport failures (the request itself failed), application errors
//! (the request succeeded but the service reported a problem) and decode
//! errors (the body did not have the expected shape).
//! SearchError implements Serialize so it can be handed to JSON front ends.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for search client operations
#[derive(Error, Debug)]
pub enum SearchError {
    /// Server answered with a non-2xx status
    #[error("HTTP request failed with status {0}")]
    HttpStatus(u16),

    /// Request did not complete within the configured timeout
    #[error("HTTP request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Connection or other transport-level failure
    #[error("HTTP request failed: {0}")]
    Connection(#[source] reqwest::Error),

    /// Request succeeded but the body carried an `errorMessage`
    #[error("API error: {0}")]
    Application(String),

    /// Body was not valid JSON or lacked the expected fields
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Query violated an input constraint; no request was sent
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Configured base URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Blocking client could not start its runtime
    #[error("Failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl SearchError {
    /// Whether the request itself failed (status, timeout or connection).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SearchError::HttpStatus(_) | SearchError::Timeout(_) | SearchError::Connection(_)
        )
    }

    /// HTTP status code carried by a transport error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::HttpStatus(code) => Some(*code),
            SearchError::Timeout(e) | SearchError::Connection(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            return SearchError::Timeout(error);
        }
        if let Some(status) = error.status() {
            return SearchError::HttpStatus(status.as_u16());
        }
        SearchError::Connection(error)
    }
}

/// Serialize SearchError as its display string
impl Serialize for SearchError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for search client operations
pub type Result<T> = std::result::Result<T, SearchError>;
