//! The datastore abstraction.

use super::DatastoreError;
use serde_json::Value;
use std::future::Future;
use voto_access::ScopeFilter;

/// Pluggable record storage keyed by collection name.
///
/// Records are JSON objects; a record's identity is its `"id"` field.
/// Queries are expressed as [`ScopeFilter`]s, the same predicates the
/// access policy hands out, so a backend can translate them to its native
/// query form while [`InMemoryDatastore`](super::InMemoryDatastore)
/// evaluates them directly with [`ScopeFilter::matches`].
///
/// # Design Principles
///
/// - **Filters are the query language**: there is no separate predicate
///   type; what the policy grants is what the store executes.
/// - **Narrow surface**: three operations cover everything the session
///   core needs. Backends may do more, but nothing here depends on it.
///
/// # Example
///
/// ```no_run
/// use voto_access::ScopeFilter;
/// use voto_runtime::datastore::{Datastore, InMemoryDatastore};
/// use serde_json::json;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = InMemoryDatastore::new();
///
/// store.insert("alerts", json!({"id": "a1", "visible_to_voters": true})).await?;
///
/// let visible = store
///     .find("alerts", &ScopeFilter::flagged("visible_to_voters"))
///     .await?;
/// assert_eq!(visible.len(), 1);
/// # Ok(())
/// # }
/// ```
pub trait Datastore: Send + Sync {
    /// Returns all records in `collection` matched by `filter`.
    ///
    /// An unknown collection yields an empty list, not an error.
    fn find(
        &self,
        collection: &str,
        filter: &ScopeFilter,
    ) -> impl Future<Output = Result<Vec<Value>, DatastoreError>> + Send;

    /// Inserts a record and returns it as stored.
    ///
    /// Fails with [`DatastoreError::Conflict`] when a record with the same
    /// `"id"` already exists in the collection.
    fn insert(
        &self,
        collection: &str,
        record: Value,
    ) -> impl Future<Output = Result<Value, DatastoreError>> + Send;

    /// Applies `patch` to the record whose `"id"` equals `key`.
    ///
    /// Only the fields present in `patch` are replaced. Fails with
    /// [`DatastoreError::NotFound`] when no such record exists.
    fn update(
        &self,
        collection: &str,
        key: &str,
        patch: Value,
    ) -> impl Future<Output = Result<(), DatastoreError>> + Send;
}
