//! Test doubles for the session lifecycle.
//!
//! Shipped in the main tree so embedders can drive their own integration
//! tests with the same doubles this crate uses:
//!
//! - [`StubProvider`]: a scripted [`AuthProvider`] with call counters and
//!   manual event emission.
//! - [`UnreliableDatastore`]: an [`InMemoryDatastore`] wrapper with
//!   explicit fault and delay injection.
//!
//! Neither double fails randomly; every failure is injected by the test.

use crate::auth::{AuthProvider, Credentials, ProviderError};
use crate::datastore::{Datastore, DatastoreError, InMemoryDatastore};
use serde_json::Value;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::broadcast;
use voto_access::ScopeFilter;
use voto_event::AuthEvent;
use voto_types::Identity;

/// A scripted [`AuthProvider`].
///
/// Sign-in outcomes are queued with [`script_sign_in`](Self::script_sign_in)
/// and consumed in order; an unscripted call fails. A scripted success
/// behaves like the real provider: the identity becomes current and a
/// [`AuthEvent::SignedIn`] is emitted.
///
/// # Example
///
/// ```
/// use voto_runtime::testing::StubProvider;
/// use voto_types::{Identity, ProfileId};
///
/// let provider = StubProvider::new();
/// provider.script_sign_in(Ok(Identity::new(ProfileId::new(), "ana@example.com")));
/// assert_eq!(provider.sign_in_calls(), 0);
/// ```
#[derive(Clone)]
pub struct StubProvider {
    state: Arc<StubState>,
}

struct StubState {
    sign_in_script: Mutex<VecDeque<Result<Identity, ProviderError>>>,
    current: Mutex<Result<Option<Identity>, String>>,
    events: broadcast::Sender<AuthEvent>,
    sign_in_calls: AtomicUsize,
    sign_out_calls: AtomicUsize,
    current_identity_calls: AtomicUsize,
    fail_sign_out: AtomicBool,
    sign_in_delay_ms: AtomicU64,
}

impl StubProvider {
    /// Creates a provider with no scripted outcomes and no identity.
    #[must_use]
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            state: Arc::new(StubState {
                sign_in_script: Mutex::new(VecDeque::new()),
                current: Mutex::new(Ok(None)),
                events,
                sign_in_calls: AtomicUsize::new(0),
                sign_out_calls: AtomicUsize::new(0),
                current_identity_calls: AtomicUsize::new(0),
                fail_sign_out: AtomicBool::new(false),
                sign_in_delay_ms: AtomicU64::new(0),
            }),
        }
    }

    /// Queues the outcome of the next `sign_in_with_password` call.
    pub fn script_sign_in(&self, outcome: Result<Identity, ProviderError>) {
        self.state
            .sign_in_script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(outcome);
    }

    /// Sets the identity reported by `current_identity`.
    pub fn set_current_identity(&self, identity: Option<Identity>) {
        *self
            .state
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Ok(identity);
    }

    /// Makes `current_identity` fail with the given message.
    pub fn fail_current_identity(&self, message: impl Into<String>) {
        *self
            .state
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Err(message.into());
    }

    /// Makes `sign_out` fail until reset.
    pub fn fail_sign_out(&self, fail: bool) {
        self.state.fail_sign_out.store(fail, Ordering::SeqCst);
    }

    /// Delays every `sign_in_with_password` call by `delay`.
    pub fn set_sign_in_delay(&self, delay: Duration) {
        self.state
            .sign_in_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Emits an event as the provider would, e.g. a token refresh.
    pub fn emit(&self, event: AuthEvent) {
        let _ = self.state.events.send(event);
    }

    /// Number of `sign_in_with_password` calls so far.
    #[must_use]
    pub fn sign_in_calls(&self) -> usize {
        self.state.sign_in_calls.load(Ordering::SeqCst)
    }

    /// Number of `sign_out` calls so far.
    #[must_use]
    pub fn sign_out_calls(&self) -> usize {
        self.state.sign_out_calls.load(Ordering::SeqCst)
    }

    /// Number of `current_identity` calls so far.
    #[must_use]
    pub fn current_identity_calls(&self) -> usize {
        self.state.current_identity_calls.load(Ordering::SeqCst)
    }

    /// Returns `true` when no provider method has been called.
    #[must_use]
    pub fn was_untouched(&self) -> bool {
        self.sign_in_calls() == 0 && self.sign_out_calls() == 0 && self.current_identity_calls() == 0
    }
}

impl Default for StubProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProvider for StubProvider {
    fn sign_in_with_password(
        &self,
        _credentials: &Credentials,
    ) -> impl Future<Output = Result<Identity, ProviderError>> + Send {
        let state = Arc::clone(&self.state);
        async move {
            let delay_ms = state.sign_in_delay_ms.load(Ordering::SeqCst);
            if delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }

            state.sign_in_calls.fetch_add(1, Ordering::SeqCst);
            let outcome = state
                .sign_in_script
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front()
                .unwrap_or_else(|| Err(ProviderError::new("no scripted sign-in outcome")));

            if let Ok(ref identity) = outcome {
                *state
                    .current
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner) = Ok(Some(identity.clone()));
                let _ = state.events.send(AuthEvent::signed_in(identity.clone()));
            }
            outcome
        }
    }

    fn sign_out(&self) -> impl Future<Output = Result<(), ProviderError>> + Send {
        let state = Arc::clone(&self.state);
        async move {
            state.sign_out_calls.fetch_add(1, Ordering::SeqCst);
            if state.fail_sign_out.load(Ordering::SeqCst) {
                return Err(ProviderError::new("sign-out rejected"));
            }

            *state
                .current
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Ok(None);
            let _ = state.events.send(AuthEvent::signed_out());
            Ok(())
        }
    }

    fn current_identity(
        &self,
    ) -> impl Future<Output = Result<Option<Identity>, ProviderError>> + Send {
        let state = Arc::clone(&self.state);
        async move {
            state.current_identity_calls.fetch_add(1, Ordering::SeqCst);
            match &*state
                .current
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
            {
                Ok(identity) => Ok(identity.clone()),
                Err(message) => Err(ProviderError::new(message.clone())),
            }
        }
    }

    fn events(&self) -> broadcast::Receiver<AuthEvent> {
        self.state.events.subscribe()
    }
}

/// An [`InMemoryDatastore`] wrapper with explicit fault injection.
///
/// Clones share state, so the handle kept by the test controls the
/// faults seen by the handle given to the session store.
#[derive(Clone)]
pub struct UnreliableDatastore {
    state: Arc<UnreliableState>,
}

struct UnreliableState {
    inner: InMemoryDatastore,
    fail_finds: AtomicBool,
    fail_inserts: AtomicBool,
    find_delay_ms: AtomicU64,
    insert_calls: AtomicUsize,
}

impl UnreliableDatastore {
    /// Wraps a datastore; all faults start disabled.
    #[must_use]
    pub fn new(inner: InMemoryDatastore) -> Self {
        Self {
            state: Arc::new(UnreliableState {
                inner,
                fail_finds: AtomicBool::new(false),
                fail_inserts: AtomicBool::new(false),
                find_delay_ms: AtomicU64::new(0),
                insert_calls: AtomicUsize::new(0),
            }),
        }
    }

    /// Returns the wrapped datastore.
    #[must_use]
    pub fn inner(&self) -> &InMemoryDatastore {
        &self.state.inner
    }

    /// Makes every `find` fail until reset.
    pub fn fail_finds(&self, fail: bool) {
        self.state.fail_finds.store(fail, Ordering::SeqCst);
    }

    /// Makes every `insert` fail until reset.
    pub fn fail_inserts(&self, fail: bool) {
        self.state.fail_inserts.store(fail, Ordering::SeqCst);
    }

    /// Delays every `find` by `delay`.
    pub fn set_find_delay(&self, delay: Duration) {
        self.state
            .find_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Number of `insert` calls so far, failed ones included.
    #[must_use]
    pub fn insert_calls(&self) -> usize {
        self.state.insert_calls.load(Ordering::SeqCst)
    }
}

impl Datastore for UnreliableDatastore {
    fn find(
        &self,
        collection: &str,
        filter: &ScopeFilter,
    ) -> impl Future<Output = Result<Vec<Value>, DatastoreError>> + Send {
        let state = Arc::clone(&self.state);
        let collection = collection.to_owned();
        let filter = filter.clone();
        async move {
            let delay_ms = state.find_delay_ms.load(Ordering::SeqCst);
            if delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }

            if state.fail_finds.load(Ordering::SeqCst) {
                return Err(DatastoreError::backend("injected find failure"));
            }
            state.inner.find(&collection, &filter).await
        }
    }

    fn insert(
        &self,
        collection: &str,
        record: Value,
    ) -> impl Future<Output = Result<Value, DatastoreError>> + Send {
        let state = Arc::clone(&self.state);
        let collection = collection.to_owned();
        async move {
            state.insert_calls.fetch_add(1, Ordering::SeqCst);
            if state.fail_inserts.load(Ordering::SeqCst) {
                return Err(DatastoreError::backend("injected insert failure"));
            }
            state.inner.insert(&collection, record).await
        }
    }

    fn update(
        &self,
        collection: &str,
        key: &str,
        patch: Value,
    ) -> impl Future<Output = Result<(), DatastoreError>> + Send {
        let state = Arc::clone(&self.state);
        let collection = collection.to_owned();
        let key = key.to_owned();
        async move { state.inner.update(&collection, &key, patch).await }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voto_types::{ProfileId, TryNew};

    fn identity() -> Identity {
        Identity::new(ProfileId::new(), "ana@example.com")
    }

    fn credentials() -> Credentials {
        Credentials::try_new(("ana@example.com".into(), "s3cret".into())).unwrap()
    }

    #[tokio::test]
    async fn scripted_outcomes_are_consumed_in_order() {
        let provider = StubProvider::new();
        provider.script_sign_in(Err(ProviderError::new("Too many requests")));
        provider.script_sign_in(Ok(identity()));

        assert!(provider.sign_in_with_password(&credentials()).await.is_err());
        assert!(provider.sign_in_with_password(&credentials()).await.is_ok());
        assert_eq!(provider.sign_in_calls(), 2);
    }

    #[tokio::test]
    async fn unscripted_sign_in_fails() {
        let provider = StubProvider::new();
        let err = provider
            .sign_in_with_password(&credentials())
            .await
            .unwrap_err();
        assert!(err.message().contains("no scripted"));
    }

    #[tokio::test]
    async fn successful_sign_in_emits_and_becomes_current() {
        let provider = StubProvider::new();
        let mut events = provider.events();
        provider.script_sign_in(Ok(identity()));

        provider.sign_in_with_password(&credentials()).await.unwrap();

        assert!(events.try_recv().unwrap().is_signed_in());
        assert!(provider.current_identity().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn sign_out_clears_current_and_emits() {
        let provider = StubProvider::new();
        provider.set_current_identity(Some(identity()));
        let mut events = provider.events();

        provider.sign_out().await.unwrap();

        assert!(events.try_recv().unwrap().is_signed_out());
        assert!(provider.current_identity().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn failed_sign_out_keeps_current() {
        let provider = StubProvider::new();
        provider.set_current_identity(Some(identity()));
        provider.fail_sign_out(true);

        assert!(provider.sign_out().await.is_err());
        assert!(provider.current_identity().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn injected_find_failure() {
        let datastore = UnreliableDatastore::new(InMemoryDatastore::new());
        datastore.fail_finds(true);

        let err = datastore
            .find("profiles", &ScopeFilter::Unrestricted)
            .await
            .unwrap_err();
        assert!(matches!(err, DatastoreError::Backend(_)));

        datastore.fail_finds(false);
        assert!(datastore
            .find("profiles", &ScopeFilter::Unrestricted)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn insert_calls_count_failures_too() {
        let datastore = UnreliableDatastore::new(InMemoryDatastore::new());
        datastore.fail_inserts(true);

        let _ = datastore
            .insert("profiles", serde_json::json!({"id": "p1"}))
            .await;
        assert_eq!(datastore.insert_calls(), 1);
        assert!(datastore.inner().is_empty("profiles"));
    }
}
