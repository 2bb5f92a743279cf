//! In-memory datastore backend.

use super::{store::Datastore, DatastoreError};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::error;

/// A filter-aware in-memory [`Datastore`].
///
/// Used as the demo-mode backend and as the reference implementation in
/// tests: `find` evaluates [`ScopeFilter`](voto_access::ScopeFilter)
/// predicates with [`matches`](voto_access::ScopeFilter::matches),
/// including dotted relation columns resolved as nested-object lookups.
///
/// Clones share the same backing storage, so a handle kept by a test can
/// observe writes performed through the handle given to the session store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatastore {
    collections: Arc<RwLock<HashMap<String, Vec<Value>>>>,
}

impl InMemoryDatastore {
    /// Creates an empty datastore.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of `collection` with `records`.
    ///
    /// Test and demo convenience; goes through no validation.
    pub fn seed(&self, collection: impl Into<String>, records: Vec<Value>) {
        self.write().insert(collection.into(), records);
    }

    /// Returns the number of records in `collection`.
    #[must_use]
    pub fn len(&self, collection: &str) -> usize {
        self.read().get(collection).map_or(0, Vec::len)
    }

    /// Returns `true` if `collection` has no records.
    #[must_use]
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Vec<Value>>> {
        self.collections.read().unwrap_or_else(|poisoned| {
            error!("in-memory datastore lock poisoned; continuing with last state");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Vec<Value>>> {
        self.collections.write().unwrap_or_else(|poisoned| {
            error!("in-memory datastore lock poisoned; continuing with last state");
            poisoned.into_inner()
        })
    }
}

impl Datastore for InMemoryDatastore {
    fn find(
        &self,
        collection: &str,
        filter: &voto_access::ScopeFilter,
    ) -> impl std::future::Future<Output = Result<Vec<Value>, DatastoreError>> + Send {
        let matched = self.read().get(collection).map_or_else(Vec::new, |records| {
            records
                .iter()
                .filter(|record| filter.matches(record))
                .cloned()
                .collect()
        });
        async move { Ok(matched) }
    }

    fn insert(
        &self,
        collection: &str,
        record: Value,
    ) -> impl std::future::Future<Output = Result<Value, DatastoreError>> + Send {
        let result = self.insert_sync(collection, record);
        async move { result }
    }

    fn update(
        &self,
        collection: &str,
        key: &str,
        patch: Value,
    ) -> impl std::future::Future<Output = Result<(), DatastoreError>> + Send {
        let result = self.update_sync(collection, key, patch);
        async move { result }
    }
}

impl InMemoryDatastore {
    fn insert_sync(&self, collection: &str, record: Value) -> Result<Value, DatastoreError> {
        if !record.is_object() {
            return Err(DatastoreError::invalid_record("record must be a JSON object"));
        }

        let mut collections = self.write();
        let records = collections.entry(collection.to_owned()).or_default();

        if let Some(id) = record.get("id").and_then(Value::as_str) {
            let duplicate = records
                .iter()
                .any(|existing| existing.get("id").and_then(Value::as_str) == Some(id));
            if duplicate {
                return Err(DatastoreError::conflict(collection, id));
            }
        }

        records.push(record.clone());
        Ok(record)
    }

    fn update_sync(&self, collection: &str, key: &str, patch: Value) -> Result<(), DatastoreError> {
        let Value::Object(patch) = patch else {
            return Err(DatastoreError::invalid_record("patch must be a JSON object"));
        };

        let mut collections = self.write();
        let record = collections
            .get_mut(collection)
            .and_then(|records| {
                records
                    .iter_mut()
                    .find(|record| record.get("id").and_then(Value::as_str) == Some(key))
            })
            .ok_or_else(|| DatastoreError::not_found(collection, key))?;

        let Some(fields) = record.as_object_mut() else {
            return Err(DatastoreError::invalid_record("stored record is not an object"));
        };
        for (field, value) in patch {
            fields.insert(field, value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use voto_access::ScopeFilter;
    use voto_types::ProfileId;

    #[tokio::test]
    async fn unknown_collection_finds_nothing() {
        let store = InMemoryDatastore::new();
        let records = store.find("ghosts", &ScopeFilter::Unrestricted).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn insert_then_find_unrestricted() {
        let store = InMemoryDatastore::new();
        let stored = store
            .insert("territories", json!({"id": "t1", "name": "Centro"}))
            .await
            .unwrap();
        assert_eq!(stored["name"], "Centro");

        let all = store.find("territories", &ScopeFilter::Unrestricted).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn none_filter_matches_nothing() {
        let store = InMemoryDatastore::new();
        store.seed("territories", vec![json!({"id": "t1"})]);

        let none = store.find("territories", &ScopeFilter::None).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn owned_filter_selects_by_actor() {
        let actor = ProfileId::new();
        let other = ProfileId::new();
        let store = InMemoryDatastore::new();
        store.seed(
            "territories",
            vec![
                json!({"id": "t1", "responsible_user_id": actor.uuid().to_string()}),
                json!({"id": "t2", "responsible_user_id": other.uuid().to_string()}),
            ],
        );

        let mine = store
            .find("territories", &ScopeFilter::owned("responsible_user_id", actor))
            .await
            .unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0]["id"], "t1");
    }

    #[tokio::test]
    async fn dotted_column_resolves_nested_objects() {
        let actor = ProfileId::new();
        let store = InMemoryDatastore::new();
        store.seed(
            "voters",
            vec![
                json!({
                    "id": "v1",
                    "territories": {"responsible_user_id": actor.uuid().to_string()},
                }),
                json!({"id": "v2", "territories": {"responsible_user_id": "someone-else"}}),
                json!({"id": "v3"}),
            ],
        );

        let mine = store
            .find(
                "voters",
                &ScopeFilter::owned("territories.responsible_user_id", actor),
            )
            .await
            .unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0]["id"], "v1");
    }

    #[tokio::test]
    async fn flagged_filter_requires_true() {
        let store = InMemoryDatastore::new();
        store.seed(
            "alerts",
            vec![
                json!({"id": "a1", "visible_to_voters": true}),
                json!({"id": "a2", "visible_to_voters": false}),
                json!({"id": "a3"}),
            ],
        );

        let visible = store
            .find("alerts", &ScopeFilter::flagged("visible_to_voters"))
            .await
            .unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0]["id"], "a1");
    }

    #[tokio::test]
    async fn duplicate_id_insert_conflicts() {
        let store = InMemoryDatastore::new();
        store.insert("profiles", json!({"id": "p1"})).await.unwrap();

        let err = store.insert("profiles", json!({"id": "p1"})).await.unwrap_err();
        assert!(matches!(err, DatastoreError::Conflict { .. }));
        assert_eq!(store.len("profiles"), 1);
    }

    #[tokio::test]
    async fn non_object_record_rejected() {
        let store = InMemoryDatastore::new();
        let err = store.insert("profiles", json!(42)).await.unwrap_err();
        assert!(matches!(err, DatastoreError::InvalidRecord(_)));
    }

    #[tokio::test]
    async fn update_patches_only_given_fields() {
        let store = InMemoryDatastore::new();
        store
            .insert("profiles", json!({"id": "p1", "name": "Ana", "role": "voter"}))
            .await
            .unwrap();

        store
            .update("profiles", "p1", json!({"role": "leader"}))
            .await
            .unwrap();

        let all = store.find("profiles", &ScopeFilter::Unrestricted).await.unwrap();
        assert_eq!(all[0]["role"], "leader");
        assert_eq!(all[0]["name"], "Ana");
    }

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let store = InMemoryDatastore::new();
        let err = store
            .update("profiles", "ghost", json!({"role": "leader"}))
            .await
            .unwrap_err();
        assert!(matches!(err, DatastoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let store = InMemoryDatastore::new();
        let handle = store.clone();

        store.insert("profiles", json!({"id": "p1"})).await.unwrap();
        assert_eq!(handle.len("profiles"), 1);
    }
}
