//! Validated sign-in credentials.
//!
//! [`Credentials`] can only be constructed through [`TryNew`], so every
//! provider implementation receives an identifier and secret that are
//! guaranteed non-empty. Empty input is rejected locally, before any
//! network call is made.

use std::fmt;
use thiserror::Error;
use voto_types::{ErrorCode, TryNew};

/// A validated identifier/secret pair for password sign-in.
///
/// The secret is never printed: the `Debug` implementation redacts it.
///
/// # Example
///
/// ```
/// use voto_runtime::auth::Credentials;
/// use voto_types::TryNew;
///
/// let creds = Credentials::try_new(("ana@example.com".into(), "s3cret".into())).unwrap();
/// assert_eq!(creds.identifier(), "ana@example.com");
///
/// let empty = Credentials::try_new(("ana@example.com".into(), "   ".into()));
/// assert!(empty.is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    identifier: String,
    secret: String,
}

impl Credentials {
    /// Returns the sign-in identifier (typically an email address).
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the secret.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl TryNew for Credentials {
    type Error = CredentialsError;
    type Args = (String, String);

    fn try_new((identifier, secret): Self::Args) -> Result<Self, Self::Error> {
        if identifier.trim().is_empty() {
            return Err(CredentialsError::EmptyIdentifier);
        }
        if secret.trim().is_empty() {
            return Err(CredentialsError::EmptySecret);
        }
        Ok(Self { identifier, secret })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"[redacted]")
            .finish()
    }
}

/// Validation failures for [`Credentials`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialsError {
    /// The identifier was empty or whitespace.
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    /// The secret was empty or whitespace.
    #[error("secret must not be empty")]
    EmptySecret,
}

impl ErrorCode for CredentialsError {
    fn code(&self) -> &'static str {
        match self {
            Self::EmptyIdentifier => "AUTH_EMPTY_IDENTIFIER",
            Self::EmptySecret => "AUTH_EMPTY_SECRET",
        }
    }

    fn is_recoverable(&self) -> bool {
        // The caller can re-prompt and try again
        true
    }
}
