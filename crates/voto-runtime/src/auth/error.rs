//! User-visible authentication errors.
//!
//! Providers report failures as a raw [`ProviderError`](super::ProviderError)
//! carrying whatever message the backing service produced. [`AuthError`]
//! is the classified, caller-displayable form: the session store maps every
//! provider failure through [`AuthError::classify`] before surfacing it.

use super::provider::ProviderError;
use thiserror::Error;
use voto_types::ErrorCode;

/// Classified sign-in failure.
///
/// # Classification
///
/// [`classify`](Self::classify) inspects the provider message content,
/// because the upstream service distinguishes cases only by text:
///
/// | Provider message contains | Variant |
/// |---------------------------|---------|
/// | `Invalid login credentials` | [`InvalidCredentials`](Self::InvalidCredentials) |
/// | `Email not confirmed` | [`UnconfirmedIdentity`](Self::UnconfirmedIdentity) |
/// | `Too many requests` | [`RateLimited`](Self::RateLimited) |
/// | anything else | [`Unknown`](Self::Unknown) with the message preserved |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The identifier/secret pair was rejected.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The identity exists but has not been confirmed yet.
    #[error("identity not confirmed yet")]
    UnconfirmedIdentity,

    /// Too many attempts in a short window.
    #[error("too many attempts, try again later")]
    RateLimited,

    /// Anything the classifier does not recognize, message preserved.
    #[error("sign-in failed: {0}")]
    Unknown(String),
}

impl AuthError {
    /// Creates an [`Unknown`](Self::Unknown) error with the given message.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown(message.into())
    }

    /// Classifies a raw provider failure by message content.
    ///
    /// # Example
    ///
    /// ```
    /// use voto_runtime::auth::{AuthError, ProviderError};
    ///
    /// let raw = ProviderError::new("Invalid login credentials");
    /// assert_eq!(AuthError::classify(&raw), AuthError::InvalidCredentials);
    /// ```
    #[must_use]
    pub fn classify(error: &ProviderError) -> Self {
        let message = error.message();
        if message.contains("Invalid login credentials") {
            Self::InvalidCredentials
        } else if message.contains("Email not confirmed") {
            Self::UnconfirmedIdentity
        } else if message.contains("Too many requests") {
            Self::RateLimited
        } else {
            Self::Unknown(message.to_owned())
        }
    }
}

impl From<ProviderError> for AuthError {
    fn from(error: ProviderError) -> Self {
        Self::classify(&error)
    }
}

impl ErrorCode for AuthError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "AUTH_INVALID_CREDENTIALS",
            Self::UnconfirmedIdentity => "AUTH_UNCONFIRMED_IDENTITY",
            Self::RateLimited => "AUTH_RATE_LIMITED",
            Self::Unknown(_) => "AUTH_UNKNOWN",
        }
    }

    fn is_recoverable(&self) -> bool {
        // Retrying the same input cannot fix a rejected or unconfirmed
        // identity; rate limits and unknown failures may clear on retry.
        matches!(self, Self::RateLimited | Self::Unknown(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voto_types::assert_error_codes;

    #[test]
    fn classification_table() {
        let cases = [
            ("Invalid login credentials", AuthError::InvalidCredentials),
            (
                "AuthApiError: Invalid login credentials",
                AuthError::InvalidCredentials,
            ),
            ("Email not confirmed", AuthError::UnconfirmedIdentity),
            ("Too many requests", AuthError::RateLimited),
        ];

        for (message, expected) in cases {
            let raw = ProviderError::new(message);
            assert_eq!(AuthError::classify(&raw), expected, "message: {message}");
        }
    }

    #[test]
    fn unrecognized_messages_fall_back_to_unknown() {
        let raw = ProviderError::new("upstream exploded");
        assert_eq!(
            AuthError::classify(&raw),
            AuthError::Unknown("upstream exploded".into())
        );
    }

    #[test]
    fn from_provider_error_classifies() {
        let err: AuthError = ProviderError::new("Too many requests").into();
        assert_eq!(err, AuthError::RateLimited);
    }

    #[test]
    fn display_is_caller_presentable() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "invalid credentials");
        assert_eq!(
            AuthError::unknown("timed out").to_string(),
            "sign-in failed: timed out"
        );
    }

    #[test]
    fn error_codes() {
        assert_error_codes(
            &[
                AuthError::InvalidCredentials,
                AuthError::UnconfirmedIdentity,
                AuthError::RateLimited,
                AuthError::unknown("x"),
            ],
            "AUTH_",
        );
    }

    #[test]
    fn recoverability() {
        assert!(!AuthError::InvalidCredentials.is_recoverable());
        assert!(!AuthError::UnconfirmedIdentity.is_recoverable());
        assert!(AuthError::RateLimited.is_recoverable());
        assert!(AuthError::unknown("x").is_recoverable());
    }
}
