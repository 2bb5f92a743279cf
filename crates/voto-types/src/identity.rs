//! Auth-provider identity.
//!
//! An [`Identity`] is what the external auth provider knows about an
//! actor: the stable id and a contact handle (typically an email
//! address). It carries no role; roles live in the resolved `Profile`.

use crate::ProfileId;
use serde::{Deserialize, Serialize};

/// Identity issued by the external auth provider.
///
/// # Example
///
/// ```
/// use voto_types::{Identity, ProfileId};
///
/// let identity = Identity::new(ProfileId::new(), "ana@example.org");
/// assert_eq!(identity.display_candidate(), "ana");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable identifier, shared with the `profiles` collection.
    pub id: ProfileId,
    /// Contact handle, e.g. the email the actor signed up with.
    pub contact_handle: String,
}

impl Identity {
    /// Creates a new identity.
    #[must_use]
    pub fn new(id: ProfileId, contact_handle: impl Into<String>) -> Self {
        Self {
            id,
            contact_handle: contact_handle.into(),
        }
    }

    /// Derives a display-name candidate from the contact handle.
    ///
    /// For email-shaped handles this is the local part; anything else is
    /// returned whole. Used when a stored profile has no name, and for
    /// synthesized profiles.
    ///
    /// # Example
    ///
    /// ```
    /// use voto_types::{Identity, ProfileId};
    ///
    /// let email = Identity::new(ProfileId::new(), "luis.vega@campaign.co");
    /// assert_eq!(email.display_candidate(), "luis.vega");
    ///
    /// let phone = Identity::new(ProfileId::new(), "+57 300 555 0101");
    /// assert_eq!(phone.display_candidate(), "+57 300 555 0101");
    /// ```
    #[must_use]
    pub fn display_candidate(&self) -> &str {
        match self.contact_handle.split_once('@') {
            Some((local, _)) => local,
            None => &self.contact_handle,
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}<{}>", self.id, self.contact_handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_candidate_takes_local_part() {
        let identity = Identity::new(ProfileId::new(), "ana@example.org");
        assert_eq!(identity.display_candidate(), "ana");
    }

    #[test]
    fn display_candidate_keeps_non_email_handles() {
        let identity = Identity::new(ProfileId::new(), "ana-directa");
        assert_eq!(identity.display_candidate(), "ana-directa");
    }

    #[test]
    fn display_candidate_empty_handle() {
        let identity = Identity::new(ProfileId::new(), "");
        assert_eq!(identity.display_candidate(), "");
    }

    #[test]
    fn display_includes_id_and_handle() {
        let id = ProfileId::new();
        let identity = Identity::new(id, "ana@example.org");
        let s = identity.to_string();
        assert!(s.contains(&id.uuid().to_string()));
        assert!(s.contains("ana@example.org"));
    }
}
