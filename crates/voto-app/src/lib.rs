//! Voto Application Layer.
//!
//! This crate provides:
//!
//! - **`VotoApp`**: High-level facade wiring config, session and policy
//! - **Re-exports**: Convenient access to all Voto crates
//! - **`AppError`**: Unified application-level error type
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Shared Types Layer                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  voto-types, voto-event, voto-access                        │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Runtime Layer                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  voto-runtime (auth, datastore, session, config)            │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Application Layer  ◄── HERE                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  voto-app (VotoApp facade + re-exports + AppError)          │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Frontend Layer                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  embedding UI (CLI, desktop, service)                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Error Handling Strategy
//!
//! ```text
//! Internal Errors (AuthError, DatastoreError, ConfigError, ...)
//!                    ↓ From impl
//!               AppError (this crate)
//!                    ↓ Display / ErrorCode
//!               Frontend output
//! ```

mod app;
mod error;

pub use app::{VotoApp, VotoAppBuilder};
pub use error::AppError;

// Re-export from the shared types layer
pub use voto_access::{
    AccessPolicy, Action, ActionSet, PolicyViolation, ResourceKind, ResourceScope, RoleSet,
    ScopeFilter,
};
pub use voto_event::{AuthEvent, SessionChange};
pub use voto_types::{
    ErrorCode, Identity, Profile, ProfileId, Role, Session, SessionStatus, TryNew,
};

// Re-export from the runtime layer
pub use voto_runtime::{
    AuthError, AuthProvider, ConfigError, ConfigLoader, ConfigResolver, ConnectionMode,
    Credentials, CredentialsError, Datastore, DatastoreError, GenerationError, GenerationParams,
    InMemoryDatastore, NoOpResolver, NullGenerator, ProfileRecord, ProviderError, ServiceStatus,
    SessionStore, SystemHealth, TextGenerator, VotoConfig, DEFAULT_SIGN_IN_TIMEOUT,
};
