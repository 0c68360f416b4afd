//! Request-failure type shared by every endpoint helper.

use thiserror::Error;

use super::types::ErrorBody;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, connection reset, CORS, offline.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// A success body could not be decoded into the expected type.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request body could not be encoded.
    #[error("invalid request body: {0}")]
    Encode(String),
    /// HTTP is only available in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a raw response body, picking up the
    /// server's `error` (or `message`) field when the body is JSON.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error.or(b.message))
            .filter(|m| !m.trim().is_empty());
        Self::Status { status, message }
    }

    /// The message the server attached to a failed request, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Unavailable)
    }
}
