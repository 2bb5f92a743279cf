//! Profile resolution: identity in, usable profile out.
//!
//! Resolution never fails. Whatever the datastore does, the caller gets a
//! `Profile` back:
//!
//! ```text
//! lookup by identity id
//!   ├── record found, well-formed  → stored {name, role}
//!   ├── record found, malformed    → synthesized voter  (warn)
//!   ├── no record                  → synthesized voter + backfill insert
//!   └── lookup error               → synthesized voter + backfill insert  (warn)
//! ```
//!
//! The backfill insert is best-effort: a failure is logged and retried on
//! the next resolution, never surfaced to the caller.

use crate::datastore::{Datastore, ProfileRecord};
use tracing::{debug, warn};
use voto_access::ScopeFilter;
use voto_types::{Identity, Profile};

/// Resolves the stored profile for `identity`, synthesizing a voter
/// profile when no usable record exists.
pub(crate) async fn resolve_profile<D: Datastore>(datastore: &D, identity: &Identity) -> Profile {
    let lookup = ScopeFilter::owned("id", identity.id);

    match datastore.find(ProfileRecord::COLLECTION, &lookup).await {
        Ok(records) => match records.first() {
            Some(value) => match ProfileRecord::from_value(value) {
                Ok(record) => {
                    debug!(identity = %identity.id, role = %record.role, "profile record found");
                    return record.into_profile(identity);
                }
                Err(error) => {
                    warn!(
                        identity = %identity.id,
                        %error,
                        "stored profile record is malformed, synthesizing default"
                    );
                }
            },
            None => {
                debug!(identity = %identity.id, "no profile record, synthesizing default");
            }
        },
        Err(error) => {
            warn!(
                identity = %identity.id,
                %error,
                "profile lookup failed, synthesizing default"
            );
        }
    }

    synthesize(datastore, identity).await
}

/// Builds the default voter profile and backfills its record.
async fn synthesize<D: Datastore>(datastore: &D, identity: &Identity) -> Profile {
    let record = ProfileRecord::synthesized(identity);

    match record.to_value() {
        Ok(value) => {
            if let Err(error) = datastore.insert(ProfileRecord::COLLECTION, value).await {
                warn!(
                    identity = %identity.id,
                    %error,
                    "profile backfill insert failed, will retry on next resolution"
                );
            } else {
                debug!(identity = %identity.id, "profile record backfilled");
            }
        }
        Err(error) => {
            warn!(identity = %identity.id, %error, "profile record not serializable");
        }
    }

    Profile::synthesized(identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datastore::InMemoryDatastore;
    use crate::testing::UnreliableDatastore;
    use voto_types::{ProfileId, Role};

    fn identity() -> Identity {
        Identity::new(ProfileId::new(), "ana@example.com")
    }

    fn seeded(identity: &Identity, name: &str, role: &str) -> InMemoryDatastore {
        let datastore = InMemoryDatastore::new();
        datastore.seed(
            ProfileRecord::COLLECTION,
            vec![serde_json::json!({
                "id": identity.id.uuid().to_string(),
                "name": name,
                "role": role,
            })],
        );
        datastore
    }

    #[tokio::test]
    async fn stored_record_maps_name_and_role() {
        let identity = identity();
        let datastore = seeded(&identity, "Ana", "leader");

        let profile = resolve_profile(&datastore, &identity).await;

        assert_eq!(profile.display_name, "Ana");
        assert_eq!(profile.role, Role::Leader);
        // No backfill for a found record
        assert_eq!(datastore.len(ProfileRecord::COLLECTION), 1);
    }

    #[tokio::test]
    async fn empty_stored_name_falls_back_to_handle() {
        let identity = identity();
        let datastore = seeded(&identity, "", "leader");

        let profile = resolve_profile(&datastore, &identity).await;

        assert_eq!(profile.display_name, "ana");
        assert_eq!(profile.role, Role::Leader);
    }

    #[tokio::test]
    async fn missing_record_synthesizes_and_backfills() {
        let identity = identity();
        let datastore = InMemoryDatastore::new();

        let profile = resolve_profile(&datastore, &identity).await;

        assert_eq!(profile.role, Role::Voter);
        assert_eq!(profile.display_name, "ana");
        assert_eq!(datastore.len(ProfileRecord::COLLECTION), 1);
    }

    #[tokio::test]
    async fn second_resolution_finds_the_backfilled_record() {
        let identity = identity();
        let datastore = UnreliableDatastore::new(InMemoryDatastore::new());

        resolve_profile(&datastore, &identity).await;
        let profile = resolve_profile(&datastore, &identity).await;

        assert_eq!(profile.role, Role::Voter);
        assert_eq!(datastore.insert_calls(), 1);
    }

    #[tokio::test]
    async fn lookup_error_degrades_to_synthesized_voter() {
        let identity = identity();
        let datastore = UnreliableDatastore::new(InMemoryDatastore::new());
        datastore.fail_finds(true);

        let profile = resolve_profile(&datastore, &identity).await;

        assert_eq!(profile.role, Role::Voter);
        assert_eq!(profile.display_name, "ana");
    }

    #[tokio::test]
    async fn failed_backfill_is_retried_on_next_resolution() {
        let identity = identity();
        let datastore = UnreliableDatastore::new(InMemoryDatastore::new());
        datastore.fail_inserts(true);

        let first = resolve_profile(&datastore, &identity).await;
        assert_eq!(first.role, Role::Voter);
        assert_eq!(datastore.insert_calls(), 1);
        assert!(datastore.inner().is_empty(ProfileRecord::COLLECTION));

        datastore.fail_inserts(false);
        let second = resolve_profile(&datastore, &identity).await;
        assert_eq!(second.role, Role::Voter);
        assert_eq!(datastore.insert_calls(), 2);
        assert_eq!(datastore.inner().len(ProfileRecord::COLLECTION), 1);
    }

    #[tokio::test]
    async fn malformed_record_synthesizes_without_panicking() {
        let identity = identity();
        let datastore = InMemoryDatastore::new();
        datastore.seed(
            ProfileRecord::COLLECTION,
            vec![serde_json::json!({
                "id": identity.id.uuid().to_string(),
                "role": {"nested": "object"},
            })],
        );

        let profile = resolve_profile(&datastore, &identity).await;
        assert_eq!(profile.role, Role::Voter);
    }
}
