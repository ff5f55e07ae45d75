//! Client error types

use thiserror::Error;

/// Auth API client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Authentication rejected by the server
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Server answered with a status the endpoint does not succeed with
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from a non-success HTTP status
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            401 => Self::AuthenticationFailed(message),
            code => Self::UnexpectedStatus {
                status: code,
                message,
            },
        }
    }

    /// HTTP status the server answered with, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationFailed(_) => Some(401),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Configuration(_) => None,
        }
    }
}
