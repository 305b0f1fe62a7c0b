//! Error types for OPS calls.

use http::StatusCode;
use thiserror::Error;

/// Failures surfaced by the token cache and the authenticated fetcher.
///
/// None of these are retried locally; they travel up to the tool layer and are
/// reported to the host as a failed tool invocation.
#[derive(Error, Debug)]
pub enum OpsError {
    /// The token endpoint rejected the client credentials.
    #[error("OPS authentication failed with status {status}: {body}")]
    Authentication { status: StatusCode, body: String },

    /// A resource endpoint answered with a failure status (not found, bad query, throttled...).
    #[error("OPS request failed with status {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    /// No response within the request timeout.
    #[error("OPS request timed out: {0}")]
    Timeout(String),

    /// A success response whose body could not be decoded.
    #[error("OPS response could not be decoded: {0}")]
    Decode(String),

    /// Connection-level failure (DNS, refused, TLS).
    #[error("OPS transport error: {0}")]
    Transport(String),
}

impl OpsError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            OpsError::Authentication { status, .. } | OpsError::Upstream { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OpsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OpsError::Timeout(err.to_string())
        } else if err.is_decode() {
            OpsError::Decode(err.to_string())
        } else {
            OpsError::Transport(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, OpsError>;
