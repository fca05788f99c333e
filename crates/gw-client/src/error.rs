//! Error types for the service clients.

use thiserror::Error;

/// Failures of a service call, including local validation.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The service answered that the two nodes are not connected.
    #[error("{0}")]
    NoPath(String),

    /// The service answered with a non-2xx status or an explicit failure.
    #[error("{0}")]
    Service(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed service response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// True for errors raised without touching the network.
    pub fn is_local(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}
