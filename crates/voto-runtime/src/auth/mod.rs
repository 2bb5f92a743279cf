//! Authentication boundary: credentials, the provider trait and error
//! classification.
//!
//! # Flow
//!
//! ```text
//! (identifier, secret)
//!        │
//!        ▼
//!  Credentials::try_new     ── rejects empty input locally
//!        │
//!        ▼
//!  AuthProvider::sign_in_with_password
//!        │
//!        ├── Ok(Identity)   ── provider emits AuthEvent::SignedIn
//!        │
//!        └── Err(ProviderError)
//!                  │
//!                  ▼
//!           AuthError::classify   ── one classification point
//! ```

mod credentials;
mod error;
mod provider;

pub use credentials::{Credentials, CredentialsError};
pub use error::AuthError;
pub use provider::{AuthProvider, ProviderError};
