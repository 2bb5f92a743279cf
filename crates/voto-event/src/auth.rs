//! Provider-side auth events.
//!
//! An [`AuthEvent`] is what the identity provider reports about a
//! credential, independent of what the session store does with it.
//! The store consumes these events and turns them into session
//! transitions; observers never see raw provider events.
//!
//! # Event Flow
//!
//! ```text
//! ┌──────────────┐  AuthEvent   ┌──────────────┐  SessionChange
//! │ AuthProvider │ ───────────► │ SessionStore │ ───────────────► Subscribers
//! │  (identity)  │              │ (serialized) │
//! └──────────────┘              └──────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use voto_event::AuthEvent;
//! use voto_types::{Identity, ProfileId};
//!
//! let identity = Identity::new(ProfileId::new(), "ana@campaign.example");
//! let event = AuthEvent::signed_in(identity);
//!
//! assert!(event.is_signed_in());
//! assert!(event.identity().is_some());
//! ```

use serde::{Deserialize, Serialize};
use voto_types::Identity;

/// Something the identity provider reported about the current credential.
///
/// # Variants
///
/// | Event | Carries | Store reaction |
/// |-------|---------|----------------|
/// | `SignedIn` | [`Identity`] | Resolve profile, commit authenticated |
/// | `CredentialsRefreshed` | [`Identity`] | Re-resolve profile for the same actor |
/// | `SignedOut` | nothing | Commit anonymous |
///
/// # Permission Model
///
/// Auth events carry identity only, never permissions. What the
/// identity may do is decided later, from the resolved profile's role,
/// by the access policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuthEvent {
    /// The provider verified a credential and attached an identity.
    SignedIn {
        /// Who the provider says is signed in.
        identity: Identity,
    },

    /// The provider rotated or re-validated an existing credential.
    ///
    /// The actor did not change, but the stored profile may have; the
    /// store re-resolves so a role change lands without a fresh sign-in.
    CredentialsRefreshed {
        /// The identity the refreshed credential belongs to.
        identity: Identity,
    },

    /// The credential was revoked or discarded.
    SignedOut,
}

impl AuthEvent {
    /// Creates a sign-in event for a verified identity.
    #[must_use]
    pub fn signed_in(identity: Identity) -> Self {
        Self::SignedIn { identity }
    }

    /// Creates a refresh event for an already signed-in identity.
    #[must_use]
    pub fn refreshed(identity: Identity) -> Self {
        Self::CredentialsRefreshed { identity }
    }

    /// Creates a sign-out event.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::SignedOut
    }

    /// Returns `true` if this event attaches an identity.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }

    /// Returns `true` if this event discards the identity.
    #[must_use]
    pub fn is_signed_out(&self) -> bool {
        matches!(self, Self::SignedOut)
    }

    /// Returns the identity the event carries, if any.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::SignedIn { identity } | Self::CredentialsRefreshed { identity } => Some(identity),
            Self::SignedOut => None,
        }
    }

    /// Returns the event name for logging.
    #[must_use]
    pub fn kind_str(&self) -> &'static str {
        match self {
            Self::SignedIn { .. } => "signed_in",
            Self::CredentialsRefreshed { .. } => "credentials_refreshed",
            Self::SignedOut => "signed_out",
        }
    }
}

impl std::fmt::Display for AuthEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.identity() {
            Some(identity) => write!(f, "{}({})", self.kind_str(), identity.id),
            None => write!(f, "{}", self.kind_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voto_types::ProfileId;

    fn test_identity() -> Identity {
        Identity::new(ProfileId::new(), "ana@campaign.example")
    }

    #[test]
    fn signed_in_carries_identity() {
        let identity = test_identity();
        let event = AuthEvent::signed_in(identity.clone());

        assert!(event.is_signed_in());
        assert!(!event.is_signed_out());
        assert_eq!(event.identity().map(|i| i.id), Some(identity.id));
    }

    #[test]
    fn refreshed_carries_identity_but_is_not_sign_in() {
        let event = AuthEvent::refreshed(test_identity());

        assert!(!event.is_signed_in());
        assert!(!event.is_signed_out());
        assert!(event.identity().is_some());
    }

    #[test]
    fn signed_out_has_no_identity() {
        let event = AuthEvent::signed_out();

        assert!(event.is_signed_out());
        assert!(event.identity().is_none());
    }

    #[test]
    fn kind_str_names_every_variant() {
        assert_eq!(AuthEvent::signed_in(test_identity()).kind_str(), "signed_in");
        assert_eq!(
            AuthEvent::refreshed(test_identity()).kind_str(),
            "credentials_refreshed"
        );
        assert_eq!(AuthEvent::signed_out().kind_str(), "signed_out");
    }

    #[test]
    fn display_includes_identity_when_present() {
        let identity = test_identity();
        let shown = format!("{}", AuthEvent::signed_in(identity.clone()));
        assert!(shown.starts_with("signed_in("));
        assert!(shown.contains(&identity.id.to_string()));

        assert_eq!(format!("{}", AuthEvent::signed_out()), "signed_out");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(AuthEvent::signed_out()).unwrap();
        assert_eq!(json["kind"], "signed_out");

        let json = serde_json::to_value(AuthEvent::signed_in(test_identity())).unwrap();
        assert_eq!(json["kind"], "signed_in");
        assert!(json["identity"].is_object());
    }
}
