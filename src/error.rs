//! Unified error types for the observer.

use thiserror::Error;

/// Unified error type for the observer process.
#[derive(Error, Debug)]
pub enum ObserverError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Market provider error.
    #[error("market error: {0}")]
    Market(#[from] MarketError),

    /// Event sink error.
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Listing and order-book provider errors.
#[derive(Error, Debug)]
pub enum MarketError {
    /// Provider returned a non-success status.
    #[error("failed to fetch {what}: {reason}")]
    FetchFailed {
        /// What was being fetched (the listing page or a token id).
        what: String,
        /// Reason for failure.
        reason: String,
    },

    /// Response body did not match the expected shape.
    #[error("failed to parse provider response: {0}")]
    ParseError(String),

    /// HTTP request failed.
    #[error("http request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Event sink append errors.
#[derive(Error, Debug)]
pub enum SinkError {
    /// Event log could not be opened for append.
    #[error("failed to open event log {path}: {source}")]
    Open {
        /// Destination path.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Write or sync of a record failed.
    #[error("failed to append event record: {0}")]
    Append(#[from] std::io::Error),

    /// Record could not be serialized.
    #[error("failed to serialize event record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ObserverError>;
