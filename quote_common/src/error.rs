//! Error types shared between client and server.
//!
//! The `QuoteError` enum is the taxonomy every bounded operation reports in:
//! deadline expiry, cancellation, network failures, malformed payloads,
//! unexpected HTTP statuses, storage failures, and local I/O.
use std::io;
use std::time::Duration;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// A bounded operation did not finish before its deadline.
    #[error("operation timed out after {0:?}")]
    Timeout(Duration),

    /// The enclosing scope was cancelled while the operation was pending.
    #[error("operation cancelled")]
    Cancelled,

    /// Network-level failure: DNS, connection refused, reset, TLS.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The body is not valid JSON or lacks an expected field.
    #[error("decode error: {0}")]
    Decode(String),

    /// The peer answered with a status other than `200 OK`.
    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),

    /// Database failure other than a timeout.
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error originating from files or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for QuoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            QuoteError::Decode(err.to_string())
        } else {
            QuoteError::Transport(err)
        }
    }
}
