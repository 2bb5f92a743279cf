//! Voto Application.
//!
//! High-level application wrapper that integrates:
//!
//! - [`SessionStore`] - the session state machine
//! - [`AccessPolicy`] - role-based data access decisions
//! - [`VotoConfig`] - layered configuration
//! - [`SystemHealth`] - datastore connectivity probe
//!
//! # Startup Flow
//!
//! ```text
//! VotoApp::builder(provider, datastore)
//!         │
//!         ▼
//! ConfigLoader.load() ──► ConfigResolver.apply()
//!         │
//!         ▼
//! connection configured? ──no──► ConnectionMode::Demo
//!         │ yes                        │
//!         ▼                            │
//! ConnectionMode::Production           │
//!         │                            │
//!         ├────────────────────────────┘
//!         ▼
//! spawn event pump ──► restore() ──► settled VotoApp
//! ```
//!
//! # Example
//!
//! ```no_run
//! use voto_app::VotoApp;
//! use voto_runtime::datastore::InMemoryDatastore;
//! use voto_runtime::testing::StubProvider;
//!
//! # async fn example() -> Result<(), voto_app::AppError> {
//! let app = VotoApp::builder(StubProvider::new(), InMemoryDatastore::new())
//!     .build()
//!     .await?;
//!
//! let mut changes = app.subscribe();
//! app.sign_in("ana@example.com", "s3cret").await?;
//!
//! while let Ok(change) = changes.recv().await {
//!     if change.is_sign_in() {
//!         println!("signed in as {}", change.session());
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::VotoAppBuilder;

use crate::AppError;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use voto_access::{AccessPolicy, ResourceKind, ResourceScope};
use voto_event::SessionChange;
use voto_runtime::auth::AuthProvider;
use voto_runtime::config::{ConnectionMode, VotoConfig};
use voto_runtime::datastore::Datastore;
use voto_runtime::health::SystemHealth;
use voto_runtime::session::SessionStore;
use voto_runtime::textgen::GenerationParams;
use voto_types::{Role, Session};

/// Voto application facade.
///
/// Owns the session store, the loaded configuration and the connection
/// mode; access decisions are answered from the current session through
/// [`AccessPolicy`].
pub struct VotoApp<P, D> {
    /// Loaded configuration (merged from all sources).
    pub(super) config: VotoConfig,
    /// Connection mode selected from the configuration.
    pub(super) mode: ConnectionMode,
    /// Datastore handle, retained for health probes.
    pub(super) datastore: D,
    /// The session state machine.
    pub(super) session: SessionStore<P, D>,
    /// Provider event pump task.
    pub(super) pump: JoinHandle<()>,
}

impl<P, D> VotoApp<P, D>
where
    P: AuthProvider + 'static,
    D: Datastore + Clone + 'static,
{
    /// Starts building an application around the given backends.
    #[must_use]
    pub fn builder(provider: P, datastore: D) -> VotoAppBuilder<P, D> {
        VotoAppBuilder::new(provider, datastore)
    }

    /// Returns the session store.
    #[must_use]
    pub fn session_store(&self) -> &SessionStore<P, D> {
        &self.session
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn config(&self) -> &VotoConfig {
        &self.config
    }

    /// Returns the connection mode the app started in.
    #[must_use]
    pub fn mode(&self) -> ConnectionMode {
        self.mode
    }

    /// Returns a snapshot of the current session.
    #[must_use]
    pub fn current_session(&self) -> Session {
        self.session.current_session()
    }

    /// Subscribes to session changes.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionChange> {
        self.session.subscribe()
    }

    /// Signs in with an identifier/secret pair.
    ///
    /// The session becomes `authenticated` asynchronously through the
    /// event pump; subscribe to observe the transition.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Auth`] with the classified failure.
    pub async fn sign_in(&self, identifier: &str, secret: &str) -> Result<(), AppError> {
        self.session.sign_in(identifier, secret).await?;
        Ok(())
    }

    /// Signs out, clearing the local session first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Auth`] when the provider rejects the sign-out;
    /// the local session is already `anonymous` by then.
    pub async fn sign_out(&self) -> Result<(), AppError> {
        self.session.sign_out().await?;
        Ok(())
    }

    /// Clears the session's recorded error after it has been surfaced.
    pub fn clear_last_error(&self) {
        self.session.clear_last_error();
    }

    /// Returns the role the current session acts as.
    #[must_use]
    pub fn effective_role(&self) -> Role {
        self.session.current_session().effective_role()
    }

    /// Evaluates the current session's scope over a resource kind.
    ///
    /// Sessions without a profile get the restrictive scope: nothing
    /// visible, nothing permitted.
    #[must_use]
    pub fn scope(&self, kind: ResourceKind) -> ResourceScope {
        match self.session.current_session().profile() {
            Some(profile) => AccessPolicy::for_profile(profile, kind),
            None => ResourceScope::restricted(),
        }
    }

    /// Returns the configured text generation parameters.
    #[must_use]
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams::from(&self.config.textgen)
    }

    /// Probes datastore connectivity.
    pub async fn health(&self) -> SystemHealth {
        SystemHealth::probe(&self.datastore, self.mode).await
    }

    /// Shuts the application down, stopping the event pump.
    pub fn shutdown(self) {
        self.pump.abort();
    }
}

impl<P, D> std::fmt::Debug for VotoApp<P, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VotoApp")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
