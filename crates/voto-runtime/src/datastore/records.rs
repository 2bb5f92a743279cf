//! Typed access to the `profiles` collection.
//!
//! The session core owns exactly one collection: `profiles`, keyed by the
//! provider identity id, holding the display name and role string. Every
//! other collection is read through [`ScopeFilter`](voto_access::ScopeFilter)
//! predicates by the embedding application.

use super::DatastoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use voto_types::{Identity, Profile, Role};

/// One row of the `profiles` collection.
///
/// `name` and `role` default to empty strings when absent so that partial
/// records written by other tools still deserialize; the mapping to
/// [`Profile`] fills the gaps (empty name falls back to the identity's
/// contact handle, unknown role strings fall back to the restrictive
/// visitor role).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Provider identity id, stored as its string form.
    pub id: String,

    /// Display name; may be empty.
    #[serde(default)]
    pub name: String,

    /// Role string as produced by [`Role::as_str`].
    #[serde(default)]
    pub role: String,

    /// When this record was first written.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl ProfileRecord {
    /// Collection name for profile records.
    pub const COLLECTION: &'static str = "profiles";

    /// Creates the record a first-seen identity gets: voter role, display
    /// name derived from the contact handle.
    #[must_use]
    pub fn synthesized(identity: &Identity) -> Self {
        Self {
            id: identity.id.uuid().to_string(),
            name: identity.display_candidate().to_owned(),
            role: Role::synthesized_default().as_str().to_owned(),
            created_at: Utc::now(),
        }
    }

    /// Deserializes a record from a datastore value.
    ///
    /// # Errors
    ///
    /// Returns [`DatastoreError::Serialization`] when the value does not
    /// have the expected shape.
    pub fn from_value(value: &Value) -> Result<Self, DatastoreError> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Serializes this record into a datastore value.
    ///
    /// # Errors
    ///
    /// Returns [`DatastoreError::Serialization`] on failure.
    pub fn to_value(&self) -> Result<Value, DatastoreError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Maps this record to the in-memory [`Profile`] for `identity`.
    ///
    /// An empty stored name falls back to the identity's display
    /// candidate; an unknown role string falls back to visitor.
    #[must_use]
    pub fn into_profile(self, identity: &Identity) -> Profile {
        let display_name = if self.name.trim().is_empty() {
            identity.display_candidate().to_owned()
        } else {
            self.name
        };
        Profile::new(identity.id, display_name, Role::from(self.role.as_str()))
    }
}
