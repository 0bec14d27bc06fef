//! Error type for backend calls

use thiserror::Error;

/// Failure of a request to the users backend.
///
/// Validation problems are not errors; they live in the form's message map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection refused, DNS failure, broken transfer
    #[error("Network error: {detail}")]
    Network { detail: String },

    /// Request did not complete within the configured timeout
    #[error("Request timed out: {detail}")]
    Timeout { detail: String },

    /// Backend answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON
    #[error("Failed to parse response: {detail}")]
    Parse { detail: String },
}

impl ApiError {
    /// Whether the backend was reached at all
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout {
                detail: e.to_string(),
            }
        } else {
            Self::Network {
                detail: e.to_string(),
            }
        }
    }
}

/// Result alias for backend calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;
