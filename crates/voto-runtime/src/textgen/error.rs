//! Text generation errors.

use thiserror::Error;
use voto_types::ErrorCode;

/// Failure taxonomy for text generation calls.
///
/// [`from_status`](Self::from_status) maps HTTP-shaped backend failures:
///
/// | Status | Variant |
/// |--------|---------|
/// | 429 | [`RateLimited`](Self::RateLimited) |
/// | 401, 403 | [`Auth`](Self::Auth) |
/// | 500-599 | [`Server`](Self::Server) |
/// | anything else | [`Network`](Self::Network) |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No generation backend is configured.
    #[error("text generation is not configured")]
    Unconfigured,

    /// The call exceeded its deadline.
    #[error("text generation timed out")]
    Timeout,

    /// The backend throttled the call.
    #[error("text generation rate limited")]
    RateLimited,

    /// The backend rejected the caller's key or permissions.
    #[error("text generation auth failure: {0}")]
    Auth(String),

    /// The backend failed internally.
    #[error("text generation server failure: {0}")]
    Server(String),

    /// Transport-level failure before a response arrived.
    #[error("text generation network failure: {0}")]
    Network(String),
}

impl GenerationError {
    /// Creates an Auth error.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Creates a Server error.
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }

    /// Creates a Network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Classifies an HTTP status code from a generation backend.
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            429 => Self::RateLimited,
            401 | 403 => Self::Auth(message.into()),
            500..=599 => Self::Server(message.into()),
            _ => Self::Network(message.into()),
        }
    }

    /// Returns `true` when retrying the same call may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::RateLimited | Self::Server(_) | Self::Network(_)
        )
    }
}

impl ErrorCode for GenerationError {
    fn code(&self) -> &'static str {
        match self {
            Self::Unconfigured => "TEXTGEN_UNCONFIGURED",
            Self::Timeout => "TEXTGEN_TIMEOUT",
            Self::RateLimited => "TEXTGEN_RATE_LIMITED",
            Self::Auth(_) => "TEXTGEN_AUTH",
            Self::Server(_) => "TEXTGEN_SERVER",
            Self::Network(_) => "TEXTGEN_NETWORK",
        }
    }

    fn is_recoverable(&self) -> bool {
        self.is_retryable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voto_types::assert_error_codes;

    #[test]
    fn status_classification() {
        assert_eq!(
            GenerationError::from_status(429, "slow down"),
            GenerationError::RateLimited
        );
        assert_eq!(
            GenerationError::from_status(401, "bad key"),
            GenerationError::Auth("bad key".into())
        );
        assert_eq!(
            GenerationError::from_status(403, "forbidden"),
            GenerationError::Auth("forbidden".into())
        );
        assert_eq!(
            GenerationError::from_status(503, "overloaded"),
            GenerationError::Server("overloaded".into())
        );
        assert_eq!(
            GenerationError::from_status(418, "teapot"),
            GenerationError::Network("teapot".into())
        );
    }

    #[test]
    fn retryability() {
        assert!(GenerationError::Timeout.is_retryable());
        assert!(GenerationError::RateLimited.is_retryable());
        assert!(GenerationError::server("boom").is_retryable());
        assert!(GenerationError::network("reset").is_retryable());

        assert!(!GenerationError::Unconfigured.is_retryable());
        assert!(!GenerationError::auth("bad key").is_retryable());
    }

    #[test]
    fn error_codes() {
        assert_error_codes(
            &[
                GenerationError::Unconfigured,
                GenerationError::Timeout,
                GenerationError::RateLimited,
                GenerationError::auth("x"),
                GenerationError::server("x"),
                GenerationError::network("x"),
            ],
            "TEXTGEN_",
        );
    }
}
