//! Builder for [`VotoApp`].

use super::VotoApp;
use crate::AppError;
use tracing::{info, warn};
use voto_runtime::auth::AuthProvider;
use voto_runtime::config::{ConfigLoader, ConfigResolver, NoOpResolver};
use voto_runtime::datastore::Datastore;
use voto_runtime::session::SessionStore;

/// Builder for [`VotoApp`].
///
/// The backends are injected up front; configuration is loaded at build
/// time through a [`ConfigLoader`] and then adjusted by an optional
/// [`ConfigResolver`] carrying the embedder's overrides (CLI flags,
/// programmatic settings).
///
/// # Example
///
/// ```no_run
/// use voto_app::{VotoApp, VotoAppBuilder};
/// use voto_runtime::datastore::InMemoryDatastore;
/// use voto_runtime::testing::StubProvider;
///
/// # async fn example() -> Result<(), voto_app::AppError> {
/// let app = VotoApp::builder(StubProvider::new(), InMemoryDatastore::new())
///     .build()
///     .await?;
///
/// println!("running in {} mode", app.mode());
/// # Ok(())
/// # }
/// ```
pub struct VotoAppBuilder<P, D, R = NoOpResolver> {
    /// Identity provider backend.
    provider: P,
    /// Record storage backend.
    datastore: D,
    /// Override resolver applied after loading.
    resolver: R,
    /// Configuration source layering.
    loader: ConfigLoader,
}

impl<P, D> VotoAppBuilder<P, D> {
    /// Creates a builder with the given backends and default config
    /// layering.
    #[must_use]
    pub fn new(provider: P, datastore: D) -> Self {
        Self {
            provider,
            datastore,
            resolver: NoOpResolver,
            loader: ConfigLoader::new(),
        }
    }
}

impl<P, D, R> VotoAppBuilder<P, D, R>
where
    P: AuthProvider + 'static,
    D: Datastore + Clone + 'static,
    R: ConfigResolver,
{
    /// Replaces the configuration loader, e.g. to point at a project
    /// directory or to skip environment variables in tests.
    #[must_use]
    pub fn with_config_loader(mut self, loader: ConfigLoader) -> Self {
        self.loader = loader;
        self
    }

    /// Sets a resolver applied on top of the loaded configuration.
    #[must_use]
    pub fn with_resolver<R2: ConfigResolver>(self, resolver: R2) -> VotoAppBuilder<P, D, R2> {
        VotoAppBuilder {
            provider: self.provider,
            datastore: self.datastore,
            resolver,
            loader: self.loader,
        }
    }

    /// Builds the application.
    ///
    /// Loads configuration, selects the connection mode from it (demo
    /// when the connection section is incomplete), spawns the provider
    /// event pump and restores the session. The returned app is settled:
    /// its session is never `pending`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if a configuration source cannot be
    /// read or parsed.
    pub async fn build(self) -> Result<VotoApp<P, D>, AppError> {
        let mut config = self.loader.load()?;
        self.resolver.apply(&mut config);

        let mode = config.connection.mode();
        if mode.is_demo() {
            warn!("connection not configured, starting in demo mode");
        }

        let session = SessionStore::with_sign_in_timeout(
            self.provider,
            self.datastore.clone(),
            mode,
            config.timeouts.sign_in(),
        );

        let runner = session.clone();
        let pump = tokio::spawn(async move { runner.run().await });

        session.restore().await;
        info!(mode = %mode, session = %session.current_session(), "application started");

        Ok(VotoApp {
            config,
            mode,
            datastore: self.datastore,
            session,
            pump,
        })
    }
}
