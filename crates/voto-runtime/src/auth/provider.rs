//! The identity-provider abstraction.
//!
//! # Design Principles
//!
//! - **Thin surface**: the provider authenticates and reports identity; it
//!   never sees profiles, roles or the datastore.
//! - **Event driven**: successful authentication is announced through the
//!   event channel, not through the `sign_in_with_password` return value
//!   alone. The session store resolves profiles from events, so a sign-in
//!   performed in another tab or a background token refresh flows through
//!   the same path as a local call.
//! - **Raw errors**: implementations return [`ProviderError`] with the
//!   backend's message intact; classification into
//!   [`AuthError`](super::AuthError) happens in one place, in the store.

use super::credentials::Credentials;
use std::future::Future;
use thiserror::Error;
use tokio::sync::broadcast;
use voto_event::AuthEvent;
use voto_types::Identity;

/// An external identity provider (password sign-in plus identity events).
///
/// Implementations must be cheap to clone or share; the session store holds
/// one instance for the lifetime of the application.
///
/// # Example
///
/// ```ignore
/// use voto_runtime::auth::{AuthProvider, Credentials, ProviderError};
///
/// async fn check<P: AuthProvider>(provider: &P, creds: &Credentials) {
///     match provider.sign_in_with_password(creds).await {
///         Ok(identity) => println!("signed in as {identity}"),
///         Err(err) => eprintln!("rejected: {err}"),
///     }
/// }
/// ```
pub trait AuthProvider: Send + Sync {
    /// Authenticates with an identifier/secret pair.
    ///
    /// On success the provider also emits [`AuthEvent::SignedIn`] on its
    /// event channel; callers should treat the returned [`Identity`] as an
    /// acknowledgement, not as session state.
    fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Identity, ProviderError>> + Send;

    /// Ends the current provider-side session, if any.
    fn sign_out(&self) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Returns the identity restored from durable provider state, if any.
    ///
    /// Called once at startup to re-establish a previous session.
    fn current_identity(
        &self,
    ) -> impl Future<Output = Result<Option<Identity>, ProviderError>> + Send;

    /// Subscribes to identity lifecycle events.
    ///
    /// Every receiver sees every event; dropping the receiver unsubscribes.
    fn events(&self) -> broadcast::Receiver<AuthEvent>;
}

/// A raw failure reported by an identity provider.
///
/// Carries the backend's message verbatim so that
/// [`AuthError::classify`](super::AuthError::classify) can inspect it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    message: String,
}

impl ProviderError {
    /// Creates a provider error from a backend message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the backend message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_preserves_message() {
        let err = ProviderError::new("Invalid login credentials");
        assert_eq!(err.message(), "Invalid login credentials");
        assert_eq!(err.to_string(), "Invalid login credentials");
    }
}
