//! Session types (status + resolved profile).

use crate::{Profile, Role};
use serde::{Deserialize, Serialize};

/// Where a session currently stands in its lifecycle.
///
/// | Status          | Meaning                                              |
/// |-----------------|------------------------------------------------------|
/// | `Pending`       | Startup restoration has not finished yet             |
/// | `Authenticated` | A profile is resolved and attached                   |
/// | `Anonymous`     | No identity; the resting state for signed-out actors |
/// | `Error`         | A transition just failed; settles to `Anonymous`     |
///
/// `Error` is transient: the session store always follows it with an
/// `Anonymous` commit, so observers never see a session parked on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Restoration in progress; no verdict yet.
    Pending,
    /// Identity verified and profile attached.
    Authenticated,
    /// No identity attached.
    Anonymous,
    /// The last transition failed.
    Error,
}

impl SessionStatus {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Authenticated => "authenticated",
            Self::Anonymous => "anonymous",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A snapshot of who (if anyone) is signed in right now.
///
/// A Session combines three facts:
///
/// - **Status**: Where the lifecycle stands ([`SessionStatus`])
/// - **Profile**: The resolved [`Profile`], present exactly when authenticated
/// - **Last error**: A human-readable note from the most recent failure
///
/// # Immutability
///
/// Sessions are immutable value types. Transitions like
/// [`degrade`](Self::degrade) and [`clear_error`](Self::clear_error) return
/// new sessions rather than modifying the existing one. This enables:
///
/// - Safe sharing across threads
/// - Clear audit trails (old session vs new session)
/// - Simple `Clone`, `Serialize`, `Deserialize`
///
/// # Invariant
///
/// The profile is attached exactly when the status is `Authenticated`.
/// The constructors make any other combination unrepresentable, so
/// callers can branch on either field and get the same answer.
///
/// # Why No Default?
///
/// **DO NOT implement `Default` for Session.**
///
/// There is no one correct resting state. `Pending` is only right before
/// restoration has run, `Anonymous` only after. Always construct with one
/// of the named constructors.
///
/// # Example
///
/// ```
/// use voto_types::{Profile, ProfileId, Role, Session, SessionStatus};
///
/// // Startup: nothing is known yet
/// let session = Session::pending();
/// assert_eq!(session.status(), SessionStatus::Pending);
///
/// // A failed sign-in records the reason, then settles anonymous
/// let failed = Session::failed("Invalid login credentials");
/// let settled = failed.degrade();
/// assert_eq!(settled.status(), SessionStatus::Anonymous);
/// assert_eq!(settled.last_error(), Some("Invalid login credentials"));
///
/// // A successful sign-in attaches the profile and clears the slate
/// let profile = Profile::new(ProfileId::new(), "Ana", Role::Leader);
/// let signed_in = Session::authenticated(profile);
/// assert!(signed_in.is_authenticated());
/// assert!(signed_in.last_error().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Lifecycle position.
    status: SessionStatus,
    /// Resolved profile; `Some` exactly when authenticated.
    profile: Option<Profile>,
    /// Message from the most recent failure, if any.
    last_error: Option<String>,
}

impl Session {
    /// Creates the startup session: restoration has not finished.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            status: SessionStatus::Pending,
            profile: None,
            last_error: None,
        }
    }

    /// Creates a clean signed-out session with no recorded error.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            status: SessionStatus::Anonymous,
            profile: None,
            last_error: None,
        }
    }

    /// Creates an authenticated session carrying the resolved profile.
    ///
    /// Reaching this state clears any previous error; a fresh sign-in
    /// starts with a clean slate.
    #[must_use]
    pub fn authenticated(profile: Profile) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            profile: Some(profile),
            last_error: None,
        }
    }

    /// Creates an error session recording why the last transition failed.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: SessionStatus::Error,
            profile: None,
            last_error: Some(message.into()),
        }
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns the resolved profile, present exactly when authenticated.
    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Returns the message from the most recent failure, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns `true` if a profile is attached.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Returns `true` if restoration has not finished yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == SessionStatus::Pending
    }

    /// Returns `true` if no identity is attached.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.status == SessionStatus::Anonymous
    }

    /// Returns the role the session acts as.
    ///
    /// Sessions without a profile act as [`Role::Visitor`], the most
    /// restrictive role, so access decisions made for unauthenticated
    /// actors always land on the locked-down row.
    #[must_use]
    pub fn effective_role(&self) -> Role {
        self.profile.as_ref().map_or(Role::Visitor, |p| p.role)
    }

    /// Returns a new anonymous session, keeping any recorded error.
    ///
    /// This is the settling step after a failure: the `Error` status is
    /// replaced by `Anonymous`, but the message stays readable so callers
    /// can still show what went wrong.
    #[must_use]
    pub fn degrade(&self) -> Self {
        Self {
            status: SessionStatus::Anonymous,
            profile: None,
            last_error: self.last_error.clone(),
        }
    }

    /// Returns a new session with the recorded error removed.
    ///
    /// Status and profile are unchanged. Use this after the failure has
    /// been surfaced and acknowledged.
    #[must_use]
    pub fn clear_error(&self) -> Self {
        Self {
            status: self.status,
            profile: self.profile.clone(),
            last_error: None,
        }
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.profile {
            Some(profile) => write!(f, "{}@{}", profile.display_name, self.status),
            None => write!(f, "{}", self.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProfileId;

    fn test_profile() -> Profile {
        Profile::new(ProfileId::new(), "Ana", Role::Leader)
    }

    #[test]
    fn pending_has_no_profile_and_no_error() {
        let session = Session::pending();
        assert_eq!(session.status(), SessionStatus::Pending);
        assert!(session.profile().is_none());
        assert!(session.last_error().is_none());
        assert!(session.is_pending());
    }

    #[test]
    fn authenticated_attaches_profile() {
        let session = Session::authenticated(test_profile());
        assert!(session.is_authenticated());
        assert_eq!(session.profile().map(|p| p.display_name.as_str()), Some("Ana"));
        assert!(session.last_error().is_none());
    }

    #[test]
    fn failed_records_message() {
        let session = Session::failed("Too many requests");
        assert_eq!(session.status(), SessionStatus::Error);
        assert_eq!(session.last_error(), Some("Too many requests"));
        assert!(session.profile().is_none());
    }

    #[test]
    fn degrade_keeps_error_but_settles_anonymous() {
        let failed = Session::failed("Invalid login credentials");
        let settled = failed.degrade();

        // Original unchanged
        assert_eq!(failed.status(), SessionStatus::Error);
        // New session is anonymous with the message intact
        assert!(settled.is_anonymous());
        assert_eq!(settled.last_error(), Some("Invalid login credentials"));
    }

    #[test]
    fn clear_error_preserves_status_and_profile() {
        let settled = Session::failed("boom").degrade();
        let cleared = settled.clear_error();

        assert!(cleared.is_anonymous());
        assert!(cleared.last_error().is_none());

        // On an authenticated session it is a no-op apart from the error
        let signed_in = Session::authenticated(test_profile());
        let cleared = signed_in.clear_error();
        assert!(cleared.is_authenticated());
        assert!(cleared.profile().is_some());
    }

    #[test]
    fn effective_role_defaults_to_visitor() {
        assert_eq!(Session::pending().effective_role(), Role::Visitor);
        assert_eq!(Session::anonymous().effective_role(), Role::Visitor);
        assert_eq!(
            Session::authenticated(test_profile()).effective_role(),
            Role::Leader
        );
    }

    #[test]
    fn display_shows_status_and_name() {
        let session = Session::authenticated(test_profile());
        assert_eq!(format!("{session}"), "Ana@authenticated");

        let anonymous = Session::anonymous();
        assert_eq!(format!("{anonymous}"), "anonymous");
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&SessionStatus::Authenticated).unwrap();
        assert_eq!(json, "\"authenticated\"");
    }
}
