//! Domain profile.

use crate::{Identity, ProfileId, Role};
use serde::{Deserialize, Serialize};

/// The domain-level identity record for an authenticated actor.
///
/// A profile is the output of resolution: either mapped from a stored
/// record in the `profiles` collection, or synthesized with the default
/// role when no record exists. Every authenticated session holds exactly
/// one.
///
/// # Example
///
/// ```
/// use voto_types::{Identity, Profile, ProfileId, Role};
///
/// let profile = Profile::new(ProfileId::new(), "Ana", Role::Leader);
/// assert_eq!(profile.display_name, "Ana");
/// assert!(!profile.role.is_privileged());
///
/// // Synthesized for a first-time identity:
/// let identity = Identity::new(ProfileId::new(), "luis@campaign.co");
/// let fresh = Profile::synthesized(&identity);
/// assert_eq!(fresh.role, Role::Voter);
/// assert_eq!(fresh.display_name, "luis");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Stable identifier, equal to the auth identity's id.
    pub id: ProfileId,
    /// Human-facing name. Never empty when the identity had a contact
    /// handle; falls back to the handle's derived form otherwise.
    pub display_name: String,
    /// Access role; drives the policy table.
    pub role: Role,
}

impl Profile {
    /// Creates a profile from already-resolved parts.
    #[must_use]
    pub fn new(id: ProfileId, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            role,
        }
    }

    /// Synthesizes the default profile for an identity with no stored
    /// record: display name derived from the contact handle, role
    /// [`Role::synthesized_default`].
    #[must_use]
    pub fn synthesized(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            display_name: identity.display_candidate().to_string(),
            role: Role::synthesized_default(),
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name, self.role)
    }
}
