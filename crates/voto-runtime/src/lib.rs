//! Voto Runtime - Internal implementation layer.
//!
//! This crate provides the internal runtime infrastructure for Voto:
//! session lifecycle, profile resolution, configuration, and the
//! backend seams (auth provider, datastore, text generator). Frontends
//! should depend on `voto-app` rather than on this crate directly.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Shared Types Layer                       │
//! │  (External, SemVer stable)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  voto-types     : ProfileId, Identity, Profile, Session     │
//! │  voto-event     : AuthEvent, SessionChange                  │
//! │  voto-access    : AccessPolicy, ResourceScope, ScopeFilter  │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Runtime Layer (THIS CRATE)                 │
//! │  (Internal, implementation details)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  auth/      : Credentials, AuthProvider, AuthError          │
//! │  datastore/ : Datastore, InMemoryDatastore, ProfileRecord   │
//! │  session/   : SessionStore (the state machine)              │
//! │  config/    : VotoConfig, ConfigLoader                      │
//! │  textgen/   : TextGenerator, GenerationParams               │
//! │  health     : SystemHealth probe                            │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Application Layer                          │
//! │  (voto-app: VotoApp facade + AppError)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! ## [`auth`] - Credentials & Provider Seam
//!
//! The boundary to the external identity provider:
//!
//! - [`Credentials`](auth::Credentials): validated sign-in input
//! - [`AuthProvider`](auth::AuthProvider): provider trait (sign in/out, events)
//! - [`AuthError`](auth::AuthError): classified sign-in failures
//!
//! ## [`datastore`] - Record Storage Seam
//!
//! Collection-oriented JSON record storage:
//!
//! - [`Datastore`](datastore::Datastore): find/insert/update trait
//! - [`InMemoryDatastore`](datastore::InMemoryDatastore): in-process backend
//! - [`ProfileRecord`](datastore::ProfileRecord): the `profiles` row shape
//!
//! ## [`session`] - Session Lifecycle
//!
//! The serialized session state machine:
//!
//! - [`SessionStore`](session::SessionStore): sign-in/out, restore, event pump
//! - Subscribers observe [`SessionChange`](voto_event::SessionChange) broadcasts
//!
//! ## [`config`] - Configuration Management
//!
//! Hierarchical configuration with layered merging:
//!
//! - [`VotoConfig`](config::VotoConfig): unified configuration type
//! - [`ConfigLoader`](config::ConfigLoader): multi-source config loader
//!
//! Configuration priority: Environment > Project > Global > Default
//!
//! ## [`textgen`] - Assisted Text Generation
//!
//! Optional text generation behind a seam:
//!
//! - [`TextGenerator`](textgen::TextGenerator): generate with fallback
//! - [`GenerationParams`](textgen::GenerationParams): sampling knobs
//!
//! ## [`health`] - Connectivity Probe
//!
//! - [`SystemHealth`](health::SystemHealth): datastore reachability snapshot
//!
//! ## [`testing`] - Test Doubles
//!
//! [`StubProvider`](testing::StubProvider) and
//! [`UnreliableDatastore`](testing::UnreliableDatastore), shipped so
//! embedders can drive the lifecycle in their own tests. Not re-exported
//! at the crate root.
//!
//! # Why This Separation?
//!
//! The runtime layer is intentionally separate from the shared types because:
//!
//! 1. **Stability boundary**: shared types are SemVer stable, runtime internals can change
//! 2. **Minimal embedder dependencies**: policy-only consumers need types/access alone
//! 3. **Implementation freedom**: backends swap behind traits without breaking callers
//! 4. **Clear boundaries**: prevents accidental coupling to internal details

pub mod auth;
pub mod config;
pub mod datastore;
pub mod health;
pub mod session;
pub mod testing;
pub mod textgen;

// Re-exports for convenience
pub use auth::{AuthError, AuthProvider, Credentials, CredentialsError, ProviderError};
pub use config::{
    default_config_dir, default_config_path, ConfigError, ConfigLoader, ConfigResolver,
    ConnectionConfig, ConnectionMode, NoOpResolver, TextGenConfig, TimeoutsConfig, VotoConfig,
};
pub use datastore::{Datastore, DatastoreError, InMemoryDatastore, ProfileRecord};
pub use health::{ServiceStatus, SystemHealth};
pub use session::{SessionStore, DEFAULT_SIGN_IN_TIMEOUT};
pub use textgen::{GenerationError, GenerationParams, NullGenerator, TextGenerator};

// Re-export the shared vocabulary (it's part of the public API)
pub use voto_access::ScopeFilter;
pub use voto_event::{AuthEvent, SessionChange};
pub use voto_types::{Identity, Profile, ProfileId, Role, Session, SessionStatus};
