//! Identifier types for Voto.
//!
//! Identifiers are UUID-based so they can be compared and transmitted
//! without coordination with the backing services.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a Profile (authenticated actor) in the Voto system.
///
/// The id matches the identity issued by the external auth provider, so
/// the same value keys the `profiles` collection in the datastore and
/// the credential held by the provider.
///
/// # Profile vs Identity
///
/// - [`ProfileId`]: the stable key shared by both systems
/// - `Identity` (auth side): id + contact handle, before resolution
/// - `Profile` (domain side): id + display name + role, after resolution
///
/// # Example
///
/// ```
/// use voto_types::ProfileId;
///
/// let ana = ProfileId::new();
/// let luis = ProfileId::new();
///
/// assert_ne!(ana, luis);  // Different actors
/// println!("Actor: {}", ana);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub Uuid);

#[allow(clippy::new_without_default)] // Default intentionally not implemented - see below
impl ProfileId {
    /// Creates a new [`ProfileId`] with a random UUID v4.
    ///
    /// # Example
    ///
    /// ```
    /// use voto_types::ProfileId;
    ///
    /// let id = ProfileId::new();
    /// println!("Profile: {}", id);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

// NOTE: ProfileId intentionally does NOT implement Default.
// A defaulted id would not correspond to any identity known to the auth
// provider or the datastore. Ids come from the provider (restoration,
// sign-in events) or from ProfileId::new() in tests.

impl From<Uuid> for ProfileId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "profile:{}", self.0)
    }
}

// Tests are in lib.rs as integration tests for public API
