//! Unified error interface for Voto.
//!
//! This module provides the [`ErrorCode`] trait for standardized
//! error handling across all Voto crates.
//!
//! # Design
//!
//! All Voto error types should implement [`ErrorCode`] to provide:
//!
//! - **Machine-readable codes**: For programmatic error handling
//! - **Recoverability info**: For retry logic and user feedback
//!
//! # Example
//!
//! ```
//! use voto_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum LookupError {
//!     NotFound(String),
//!     Timeout,
//! }
//!
//! impl ErrorCode for LookupError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::NotFound(_) => "LOOKUP_NOT_FOUND",
//!             Self::Timeout => "LOOKUP_TIMEOUT",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::Timeout)
//!     }
//! }
//!
//! let err = LookupError::Timeout;
//! assert_eq!(err.code(), "LOOKUP_TIMEOUT");
//! assert!(err.is_recoverable());
//! ```

/// Unified error code interface for Voto errors.
///
/// Implement this trait for all error types to enable:
///
/// - Consistent error code format across crates
/// - Unified error handling in the session store and app layer
/// - Standardized logging and monitoring
///
/// # Code Format
///
/// Error codes should be:
///
/// - **UPPER_SNAKE_CASE**: e.g., `"TIMEOUT"`, `"ACCESS_DENIED"`
/// - **Namespace-prefixed for specificity**: e.g., `"AUTH_RATE_LIMITED"`, `"STORE_QUERY"`
/// - **Stable**: Codes should not change once defined (API contract)
///
/// # Recoverability
///
/// An error is recoverable if:
///
/// - Retrying the operation may succeed
/// - The user can take action to fix it
/// - It's a transient condition (network, timeout)
///
/// Non-recoverable errors:
///
/// - Invalid input (won't change on retry)
/// - Access denied (requires a different role, not retry)
/// - Internal errors (bugs)
///
/// # Example Implementation
///
/// ```
/// use voto_types::ErrorCode;
///
/// enum SignInError {
///     RateLimited,
///     InvalidCredentials,
///     ProviderUnreachable,
/// }
///
/// impl ErrorCode for SignInError {
///     fn code(&self) -> &'static str {
///         match self {
///             Self::RateLimited => "AUTH_RATE_LIMITED",
///             Self::InvalidCredentials => "AUTH_INVALID_CREDENTIALS",
///             Self::ProviderUnreachable => "AUTH_PROVIDER_UNREACHABLE",
///         }
///     }
///
///     fn is_recoverable(&self) -> bool {
///         match self {
///             // Backs off on its own
///             Self::RateLimited => true,
///             // Wrong secret won't become right
///             Self::InvalidCredentials => false,
///             // Network may come back
///             Self::ProviderUnreachable => true,
///         }
///     }
/// }
/// ```
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    ///
    /// # Format
    ///
    /// - UPPER_SNAKE_CASE
    /// - Optionally prefixed with domain (e.g., `"AUTH_"`, `"STORE_"`)
    /// - Stable across versions (breaking change if modified)
    ///
    /// # Examples
    ///
    /// - `"TIMEOUT"`
    /// - `"ACCESS_DENIED"`
    /// - `"AUTH_RATE_LIMITED"`
    /// - `"STORE_QUERY"`
    fn code(&self) -> &'static str;

    /// Returns whether the error is recoverable.
    ///
    /// # Returns
    ///
    /// - `true`: Retry may succeed, or user can take corrective action
    /// - `false`: Retry will not help, requires code/config change
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows Voto conventions.
///
/// # Checks
///
/// 1. Code is UPPER_SNAKE_CASE
/// 2. Code starts with expected prefix
/// 3. Code is not empty
///
/// # Panics
///
/// Panics with descriptive message if validation fails.
///
/// # Example
///
/// ```
/// use voto_types::{ErrorCode, assert_error_code};
///
/// #[derive(Debug)]
/// enum LookupError { Timeout }
///
/// impl ErrorCode for LookupError {
///     fn code(&self) -> &'static str { "LOOKUP_TIMEOUT" }
///     fn is_recoverable(&self) -> bool { true }
/// }
///
/// let err = LookupError::Timeout;
/// assert_error_code(&err, "LOOKUP_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    // Check not empty
    assert!(!code.is_empty(), "Error code must not be empty");

    // Check prefix
    assert!(
        code.starts_with(expected_prefix),
        "Error code '{}' must start with prefix '{}'",
        code,
        expected_prefix
    );

    // Check UPPER_SNAKE_CASE
    assert!(
        is_upper_snake_case(code),
        "Error code '{}' must be UPPER_SNAKE_CASE",
        code
    );
}

/// Validates multiple error codes at once.
///
/// Use this to verify all variants of an error enum.
///
/// # Example
///
/// ```
/// use voto_types::{ErrorCode, assert_error_codes};
///
/// #[derive(Debug)]
/// enum LookupError { NotFound, Timeout }
///
/// impl ErrorCode for LookupError {
///     fn code(&self) -> &'static str {
///         match self {
///             Self::NotFound => "LOOKUP_NOT_FOUND",
///             Self::Timeout => "LOOKUP_TIMEOUT",
///         }
///     }
///     fn is_recoverable(&self) -> bool { false }
/// }
///
/// assert_error_codes(&[LookupError::NotFound, LookupError::Timeout], "LOOKUP_");
/// ```
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

/// Checks if a string is UPPER_SNAKE_CASE.
fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }

    // Must not start or end with underscore
    if s.starts_with('_') || s.ends_with('_') {
        return false;
    }

    // Must not have consecutive underscores
    if s.contains("__") {
        return false;
    }

    // All chars must be uppercase letters, digits, or underscore
    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
