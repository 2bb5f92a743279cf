//! Application-level error type.
//!
//! [`AppError`] unifies all internal errors for the application layer.

use thiserror::Error;
use voto_runtime::auth::AuthError;
use voto_runtime::config::ConfigError;
use voto_runtime::datastore::DatastoreError;
use voto_runtime::textgen::GenerationError;
use voto_types::ErrorCode;

/// Unified application error.
///
/// Collects all internal errors into a single type for frontend handling.
///
/// # Example
///
/// ```
/// use voto_app::{AppError, AuthError};
///
/// // Internal error automatically converts to AppError
/// let auth_err = AuthError::InvalidCredentials;
/// let app_err: AppError = auth_err.into();
///
/// // Frontends can use Display for user-facing messages
/// eprintln!("Error: {}", app_err);
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading or parsing failed
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Authentication failed
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Datastore operation failed
    #[error("datastore error: {0}")]
    Datastore(#[from] DatastoreError),

    /// Text generation failed
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
}

impl ErrorCode for AppError {
    fn code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.code(),
            Self::Auth(e) => e.code(),
            Self::Datastore(e) => e.code(),
            Self::Generation(e) => e.code(),
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            Self::Config(e) => e.is_recoverable(),
            Self::Auth(e) => e.is_recoverable(),
            Self::Datastore(e) => e.is_recoverable(),
            Self::Generation(e) => e.is_recoverable(),
        }
    }
}
