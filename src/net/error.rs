//! Failure taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! Transport and parse failures are kept apart from application rejections
//! because only the latter can carry server-supplied detail text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors returned by [`super::api::Api`] calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Network(String),

    /// The response body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The server answered with a non-2xx status.
    #[error("server rejected request with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// No browser transport in this build.
    #[error("HTTP transport not available in this build")]
    Unavailable,
}

impl ApiError {
    /// Server-supplied detail text, when the failure is an application
    /// rejection that carried a non-empty one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref().filter(|d| !d.is_empty()),
            _ => None,
        }
    }

    /// True for well-formed non-2xx responses.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
