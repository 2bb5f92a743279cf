//! The session store: one mutable [`Session`], mutated only here.

use crate::auth::{AuthError, AuthProvider, Credentials};
use crate::config::ConnectionMode;
use crate::datastore::Datastore;
use crate::session::resolve::resolve_profile;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};
use voto_event::{AuthEvent, SessionChange};
use voto_types::{Session, TryNew};

/// Default deadline for a provider sign-in call.
pub const DEFAULT_SIGN_IN_TIMEOUT: Duration = Duration::from_secs(15);

/// Buffered session changes per subscriber before lagging.
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Owns the session lifecycle: restoration, sign-in, sign-out and the
/// provider event pump.
///
/// # Design Principles
///
/// - **One session**: exactly one mutable [`Session`] lives behind this
///   store; every caller reads the same state and all writes go through
///   the commit path.
/// - **Last writer wins**: async resolutions claim an epoch ticket before
///   awaiting; a commit whose ticket is no longer the latest is discarded,
///   so out-of-order completions can never roll the session back.
/// - **Fail closed**: sign-out clears local state before the provider is
///   asked, and a failed sign-in always settles on `anonymous`.
/// - **Demo aware**: in [`ConnectionMode::Demo`] the provider is never
///   called; the store settles on `anonymous` and sign-in fails fast.
///
/// # State Machine
///
/// ```text
///            restore: identity found          provider SignedIn /
///            ┌────────────────────────┐       CredentialsRefreshed
///            │                        ▼       ┌──────────────┐
///       ┌─────────┐             ┌───────────────┐            │
///       │ pending │             │ authenticated │◄───────────┘
///       └─────────┘             └───────────────┘
///            │                        │  sign_out / SignedOut
///            │ restore: none/error    ▼
///            │                  ┌───────────┐
///            └─────────────────►│ anonymous │◄── failed sign-in
///                               └───────────┘    (error transiently)
/// ```
///
/// # Example
///
/// ```no_run
/// use voto_runtime::config::ConnectionMode;
/// use voto_runtime::datastore::InMemoryDatastore;
/// use voto_runtime::session::SessionStore;
/// use voto_runtime::testing::StubProvider;
///
/// # async fn example() {
/// let store = SessionStore::new(
///     StubProvider::new(),
///     InMemoryDatastore::new(),
///     ConnectionMode::Production,
/// );
///
/// let mut changes = store.subscribe();
/// store.restore().await;
///
/// let session = store.current_session();
/// println!("restored as {session}");
/// # }
/// ```
///
/// Cloning is cheap and shares the same store; the clone handed to the
/// event pump task observes the same session as the original.
pub struct SessionStore<P, D> {
    inner: Arc<StoreInner<P, D>>,
}

struct StoreInner<P, D> {
    provider: P,
    datastore: D,
    mode: ConnectionMode,
    session: RwLock<Session>,
    epoch: AtomicU64,
    changes: broadcast::Sender<SessionChange>,
    sign_in_timeout: Duration,
}

impl<P, D> SessionStore<P, D>
where
    P: AuthProvider,
    D: Datastore,
{
    /// Creates a store with the default sign-in timeout.
    ///
    /// The session starts `pending`; call [`restore`](Self::restore) to
    /// settle it.
    #[must_use]
    pub fn new(provider: P, datastore: D, mode: ConnectionMode) -> Self {
        Self::with_sign_in_timeout(provider, datastore, mode, DEFAULT_SIGN_IN_TIMEOUT)
    }

    /// Creates a store with an explicit sign-in timeout.
    #[must_use]
    pub fn with_sign_in_timeout(
        provider: P,
        datastore: D,
        mode: ConnectionMode,
        sign_in_timeout: Duration,
    ) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(StoreInner {
                provider,
                datastore,
                mode,
                session: RwLock::new(Session::pending()),
                epoch: AtomicU64::new(0),
                changes,
                sign_in_timeout,
            }),
        }
    }

    /// Returns a snapshot of the current session.
    #[must_use]
    pub fn current_session(&self) -> Session {
        self.read_session()
    }

    /// Returns the connection mode this store was built with.
    #[must_use]
    pub fn mode(&self) -> ConnectionMode {
        self.inner.mode
    }

    /// Subscribes to session changes.
    ///
    /// Every status transition is delivered; dropping the receiver
    /// unsubscribes. A receiver that falls more than the channel capacity
    /// behind observes a lag marker and then continues with the latest
    /// changes.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionChange> {
        self.inner.changes.subscribe()
    }

    /// Settles the initial `pending` session from durable provider state.
    ///
    /// Identity found resolves a profile and authenticates; no identity
    /// settles on `anonymous`; a provider failure records the error and
    /// settles on `anonymous` as well. The session never stays `pending`.
    pub async fn restore(&self) {
        if self.inner.mode.is_demo() {
            info!("demo mode, settling session as anonymous");
            let ticket = self.claim();
            self.commit(ticket, Session::anonymous());
            return;
        }

        let ticket = self.claim();
        match self.inner.provider.current_identity().await {
            Ok(Some(identity)) => {
                debug!(identity = %identity.id, "restoring previous session");
                let profile = resolve_profile(&self.inner.datastore, &identity).await;
                self.commit(ticket, Session::authenticated(profile));
            }
            Ok(None) => {
                debug!("no previous session to restore");
                self.commit(ticket, Session::anonymous());
            }
            Err(provider_error) => {
                warn!(error = %provider_error, "session restoration failed");
                self.settle_failed(ticket, &AuthError::classify(&provider_error));
            }
        }
    }

    /// Signs in with an identifier/secret pair.
    ///
    /// Empty input is rejected locally as
    /// [`AuthError::InvalidCredentials`] before the provider is called.
    /// The call first ends any existing provider session (at most one
    /// identity at a time), then authenticates under the configured
    /// timeout.
    ///
    /// `Ok(())` means the provider accepted the credentials; the session
    /// becomes `authenticated` asynchronously, once the provider's
    /// `SignedIn` event has been pumped and the profile resolved. Callers
    /// must not assume `authenticated` immediately after this resolves.
    ///
    /// # Errors
    ///
    /// Any failure is returned classified and also recorded on the
    /// session: status passes through `error` and settles on `anonymous`
    /// with `last_error` set.
    pub async fn sign_in(&self, identifier: &str, secret: &str) -> Result<(), AuthError> {
        let credentials =
            match Credentials::try_new((identifier.to_owned(), secret.to_owned())) {
                Ok(credentials) => credentials,
                Err(validation) => {
                    debug!(error = %validation, "sign-in rejected locally");
                    return Err(self.fail(&AuthError::InvalidCredentials));
                }
            };

        if self.inner.mode.is_demo() {
            warn!("sign-in attempted in demo mode");
            return Err(self.fail(&AuthError::unknown(
                "service not configured, running in demo mode",
            )));
        }

        // Clean slate: at most one provider identity at a time.
        if let Err(stale) = self.inner.provider.sign_out().await {
            debug!(error = %stale, "pre-sign-in sign-out failed, continuing");
        }

        let attempt = timeout(
            self.inner.sign_in_timeout,
            self.inner.provider.sign_in_with_password(&credentials),
        )
        .await;

        match attempt {
            Ok(Ok(identity)) => {
                info!(identity = %identity.id, "sign-in accepted");
                Ok(())
            }
            Ok(Err(provider_error)) => {
                warn!(error = %provider_error, "sign-in rejected by provider");
                Err(self.fail(&AuthError::classify(&provider_error)))
            }
            Err(_elapsed) => {
                warn!(timeout = ?self.inner.sign_in_timeout, "sign-in timed out");
                Err(self.fail(&AuthError::unknown("sign-in timed out")))
            }
        }
    }

    /// Signs out, locally first.
    ///
    /// The session is cleared to `anonymous` before the provider is
    /// asked, so the caller is signed out even when the provider call
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns the classified provider failure, if any. The local session
    /// is already `anonymous` by then.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let ticket = self.claim();
        self.commit(ticket, Session::anonymous());

        if self.inner.mode.is_demo() {
            return Ok(());
        }

        match self.inner.provider.sign_out().await {
            Ok(()) => {
                info!("signed out");
                Ok(())
            }
            Err(provider_error) => {
                warn!(error = %provider_error, "provider sign-out failed, session cleared anyway");
                Err(AuthError::classify(&provider_error))
            }
        }
    }

    /// Clears `last_error` without touching the status or profile.
    pub fn clear_last_error(&self) {
        let ticket = self.claim();
        let cleared = self.read_session().clear_error();
        self.commit(ticket, cleared);
    }

    /// Applies one provider event to the session.
    ///
    /// `SignedIn` and `CredentialsRefreshed` resolve the profile anew, so
    /// stored role or name edits propagate on the next refresh;
    /// `SignedOut` clears the session.
    pub async fn handle_event(&self, event: AuthEvent) {
        debug!(event = %event, "provider event");
        let ticket = self.claim();
        match event {
            AuthEvent::SignedIn { identity } | AuthEvent::CredentialsRefreshed { identity } => {
                let profile = resolve_profile(&self.inner.datastore, &identity).await;
                self.commit(ticket, Session::authenticated(profile));
            }
            AuthEvent::SignedOut => {
                self.commit(ticket, Session::anonymous());
            }
        }
    }

    /// Pumps provider events into the session until the provider's event
    /// channel closes.
    ///
    /// Spawn this on a clone of the store. In demo mode it returns
    /// immediately, keeping the provider untouched.
    pub async fn run(&self) {
        if self.inner.mode.is_demo() {
            debug!("demo mode, event pump not started");
            return;
        }

        let mut events = self.inner.provider.events();
        loop {
            match events.recv().await {
                Ok(event) => self.handle_event(event).await,
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!(missed, "provider events lagged, continuing with latest");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("provider event channel closed, event pump stopping");
                    break;
                }
            }
        }
    }

    /// Records a failure on the session and returns it for the caller.
    ///
    /// The session passes through `error` and settles on `anonymous`,
    /// keeping the message as `last_error`.
    fn fail(&self, error: &AuthError) -> AuthError {
        let ticket = self.claim();
        self.settle_failed(ticket, error);
        error.clone()
    }

    fn settle_failed(&self, ticket: u64, error: &AuthError) {
        self.commit(ticket, Session::failed(error.to_string()));
        let settled = self.read_session().degrade();
        self.commit(ticket, settled);
    }

    /// Claims an epoch ticket; the commit made under it applies only
    /// while no newer ticket has been claimed.
    fn claim(&self) -> u64 {
        self.inner.epoch.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Commits a session under a ticket; returns whether it applied.
    fn commit(&self, ticket: u64, next: Session) -> bool {
        let mut guard = self.write_session();
        if self.inner.epoch.load(Ordering::SeqCst) != ticket {
            debug!(ticket, "stale session resolution discarded");
            return false;
        }
        if *guard == next {
            return false;
        }

        let previous = guard.status();
        *guard = next.clone();
        drop(guard);

        info!(previous = %previous, next = %next.status(), "session transition");
        let _ = self.inner.changes.send(SessionChange::new(previous, next));
        true
    }

    fn read_session(&self) -> Session {
        match self.inner.session.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => {
                error!("session lock poisoned, serving last written state");
                poisoned.into_inner().clone()
            }
        }
    }

    fn write_session(&self) -> std::sync::RwLockWriteGuard<'_, Session> {
        match self.inner.session.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                error!("session lock poisoned, overwriting last written state");
                poisoned.into_inner()
            }
        }
    }
}

impl<P, D> Clone for SessionStore<P, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P, D> fmt::Debug for SessionStore<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("mode", &self.inner.mode)
            .finish_non_exhaustive()
    }
}
