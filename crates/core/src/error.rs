//! Client error taxonomy.
//!
//! Every failure the console can observe falls into one of these classes:
//! authentication failure (fatal to the session), an API error response with
//! a human-readable message, a transport failure, a decode failure, or a
//! client-side validation failure that never reached the network.

use thiserror::Error;

/// Result type used across the gateway and auth layers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error observed by the console when talking to (or preparing to talk to)
/// the backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend rejected the session (HTTP 401). Always fatal to the
    /// session; the gateway clears it before returning this.
    #[error("session is no longer valid")]
    Unauthorized,

    /// The backend returned an error response with an extractable message
    /// (validation errors, conflicts, 5xx with a body).
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never completed (connection refused, timeout, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded into the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The request was rejected client-side before any network call.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl ApiError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True when the error invalidated the session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// HTTP status carried by the error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_its_message() {
        let err = ApiError::api(422, "command must not be empty");
        assert_eq!(err.to_string(), "command must not be empty");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn unauthorized_is_flagged() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::network("refused").is_unauthorized());
    }
}
