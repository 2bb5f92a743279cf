//! Session change notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use voto_types::{Session, SessionStatus};

/// A session transition, as delivered to subscribers.
///
/// Every commit the session store makes is broadcast as one
/// `SessionChange` carrying the status it moved from, the full new
/// [`Session`] snapshot, and when the commit happened.
///
/// # Ordering
///
/// Changes are delivered in commit order. Because the store serializes
/// transitions, a subscriber that applies each change as it arrives
/// always ends up holding the store's current session.
///
/// # Example
///
/// ```
/// use voto_event::SessionChange;
/// use voto_types::{Session, SessionStatus};
///
/// let change = SessionChange::new(SessionStatus::Pending, Session::anonymous());
///
/// assert!(change.is_settlement());
/// assert!(!change.is_sign_in());
/// assert_eq!(change.session().status(), SessionStatus::Anonymous);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionChange {
    /// Status the store moved away from.
    previous: SessionStatus,
    /// The session as committed.
    session: Session,
    /// When the commit happened.
    at: DateTime<Utc>,
}

impl SessionChange {
    /// Creates a change record stamped with the current time.
    #[must_use]
    pub fn new(previous: SessionStatus, session: Session) -> Self {
        Self {
            previous,
            session,
            at: Utc::now(),
        }
    }

    /// Returns the status the store moved away from.
    #[must_use]
    pub fn previous(&self) -> SessionStatus {
        self.previous
    }

    /// Returns the committed session snapshot.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns when the commit happened.
    #[must_use]
    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }

    /// Returns `true` if this change attached a profile.
    #[must_use]
    pub fn is_sign_in(&self) -> bool {
        self.previous != SessionStatus::Authenticated && self.session.is_authenticated()
    }

    /// Returns `true` if this change dropped a profile.
    #[must_use]
    pub fn is_sign_out(&self) -> bool {
        self.previous == SessionStatus::Authenticated && !self.session.is_authenticated()
    }

    /// Returns `true` if this change resolved the startup `Pending` state.
    #[must_use]
    pub fn is_settlement(&self) -> bool {
        self.previous == SessionStatus::Pending && !self.session.is_pending()
    }
}

impl std::fmt::Display for SessionChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.previous, self.session.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voto_types::{Profile, ProfileId, Role};

    fn authenticated_session() -> Session {
        Session::authenticated(Profile::new(ProfileId::new(), "Ana", Role::Leader))
    }

    #[test]
    fn sign_in_detected_from_anonymous() {
        let change = SessionChange::new(SessionStatus::Anonymous, authenticated_session());
        assert!(change.is_sign_in());
        assert!(!change.is_sign_out());
    }

    #[test]
    fn sign_in_detected_from_pending_restoration() {
        let change = SessionChange::new(SessionStatus::Pending, authenticated_session());
        assert!(change.is_sign_in());
        assert!(change.is_settlement());
    }

    #[test]
    fn sign_out_detected() {
        let change = SessionChange::new(SessionStatus::Authenticated, Session::anonymous());
        assert!(change.is_sign_out());
        assert!(!change.is_sign_in());
    }

    #[test]
    fn error_commit_is_neither_sign_in_nor_sign_out() {
        let change = SessionChange::new(SessionStatus::Anonymous, Session::failed("boom"));
        assert!(!change.is_sign_in());
        assert!(!change.is_sign_out());
        assert!(!change.is_settlement());
    }

    #[test]
    fn settlement_covers_failure_to_anonymous() {
        let settled = Session::failed("no stored credential").degrade();
        let change = SessionChange::new(SessionStatus::Pending, settled);
        assert!(change.is_settlement());
        assert!(!change.is_sign_in());
    }

    #[test]
    fn display_shows_transition() {
        let change = SessionChange::new(SessionStatus::Pending, Session::anonymous());
        assert_eq!(format!("{change}"), "pending -> anonymous");
    }

    #[test]
    fn timestamp_is_recent() {
        let before = Utc::now();
        let change = SessionChange::new(SessionStatus::Pending, Session::anonymous());
        let after = Utc::now();

        assert!(change.at() >= before);
        assert!(change.at() <= after);
    }
}
