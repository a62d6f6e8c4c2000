//! Error type shared by every REST call.

use thiserror::Error;

/// Failure of a REST request against the course-platform API.
///
/// `Clone` so a single in-flight request can resolve every waiter that
/// joined it through the query cache.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The API rejected the bearer token (HTTP 401).
    #[error("not authenticated")]
    Unauthorized,

    /// The API answered with a non-success status.
    #[error("request failed: status {status}")]
    Status { status: u16 },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The envelope reported `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Map an HTTP status code to an error, or `None` for 2xx.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(Self::Unauthorized),
            _ => Some(Self::Status { status }),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
