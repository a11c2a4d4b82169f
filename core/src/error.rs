//! Error types for the notices API adapter.
//!
//! # Design
//! `Transport` and `Status` both mean "the remote call did not give us a
//! usable response" and are grouped by `is_transport`. `Decode` covers a body
//! that arrived but is not a JSON document. None of these escape the page
//! handler; they are turned into an inline error block there.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The HTTP call itself failed: connection refused, DNS, TLS, timeout.
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body is not a usable JSON document.
    #[error("Error decoding JSON response: {0}")]
    Decode(String),

    #[error("{0}")]
    Generic(String),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Status { .. })
    }
}
