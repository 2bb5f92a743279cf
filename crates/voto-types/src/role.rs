//! Actor roles.
//!
//! A role is one of a closed set of actor categories determining record
//! visibility and mutation rights. The grant attached to each role lives
//! in the access-policy table, not here; this type is pure vocabulary.

use serde::{Deserialize, Serialize};

/// Role of an authenticated (or anonymous) actor.
///
/// # Variants
///
/// | Role | Reach |
/// |------|-------|
/// | `Developer` | Unrestricted, every resource kind |
/// | `Master` | Unrestricted, every resource kind |
/// | `Candidate` | Owned-or-created records, may create subordinates |
/// | `Leader` | Directly-owned records, may create voters |
/// | `Voter` | Self-registered records, read-only |
/// | `Visitor` | Nothing |
///
/// # Two Defaults
///
/// Two distinct defaults exist and must not be conflated:
///
/// - [`Role::default()`] is `Visitor`: the role of an actor that has
///   not authenticated at all.
/// - [`Role::synthesized_default()`] is `Voter`: the role written into
///   a freshly created profile record when an authenticated identity has
///   no stored profile yet.
///
/// # Example
///
/// ```
/// use voto_types::Role;
///
/// assert_eq!(Role::parse("leader"), Some(Role::Leader));
/// assert_eq!(Role::parse("superuser"), None);
///
/// // Unknown stored strings degrade to the restrictive default.
/// assert_eq!(Role::from("superuser"), Role::Visitor);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including creating other developers and masters.
    Developer,
    /// Full data access; cannot mint developers or masters.
    Master,
    /// Campaign owner: sees owned-or-created records in their territory.
    Candidate,
    /// Territory responsible: sees directly-owned records only.
    Leader,
    /// Registered voter: self-scoped, read-only access.
    Voter,
    /// Unauthenticated or unrecognized actor. No grants.
    #[default]
    Visitor,
}

impl Role {
    /// Every role, in grant-breadth order. Useful for table construction
    /// and exhaustiveness checks in tests.
    pub const ALL: [Role; 6] = [
        Role::Developer,
        Role::Master,
        Role::Candidate,
        Role::Leader,
        Role::Voter,
        Role::Visitor,
    ];

    /// The role assigned to a synthesized profile when an authenticated
    /// identity has no stored profile record.
    ///
    /// `Voter` is the narrowest role with a non-empty grant set, so a
    /// half-registered user can at least see their own records while an
    /// operator corrects the missing row.
    #[must_use]
    pub fn synthesized_default() -> Self {
        Role::Voter
    }

    /// Returns the stored-string form of this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "developer",
            Role::Master => "master",
            Role::Candidate => "candidate",
            Role::Leader => "leader",
            Role::Voter => "voter",
            Role::Visitor => "visitor",
        }
    }

    /// Parses a role string (case-insensitive). Returns `None` for
    /// unrecognized input.
    ///
    /// # Example
    ///
    /// ```
    /// use voto_types::Role;
    ///
    /// assert_eq!(Role::parse("Master"), Some(Role::Master));
    /// assert_eq!(Role::parse("VOTER"), Some(Role::Voter));
    /// assert_eq!(Role::parse(""), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "developer" => Some(Role::Developer),
            "master" => Some(Role::Master),
            "candidate" => Some(Role::Candidate),
            "leader" => Some(Role::Leader),
            "voter" => Some(Role::Voter),
            "visitor" => Some(Role::Visitor),
            _ => None,
        }
    }

    /// Returns `true` for roles with unrestricted cross-tenant reach.
    #[must_use]
    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::Developer | Role::Master)
    }

    /// Returns `true` if this is the no-grant role.
    #[must_use]
    pub fn is_visitor(&self) -> bool {
        matches!(self, Role::Visitor)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Role {
    /// Converts a stored role string, degrading unknown values to
    /// [`Role::Visitor`] so a corrupted record never widens access.
    fn from(s: &str) -> Self {
        Role::parse(s).unwrap_or(Role::Visitor)
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::from(s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_every_role() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(Role::parse("Developer"), Some(Role::Developer));
        assert_eq!(Role::parse("LEADER"), Some(Role::Leader));
    }

    #[test]
    fn unknown_string_degrades_to_visitor() {
        assert_eq!(Role::from("admin"), Role::Visitor);
        assert_eq!(Role::from(""), Role::Visitor);
        assert_eq!(Role::from("votante "), Role::Visitor);
    }

    #[test]
    fn default_is_visitor() {
        assert_eq!(Role::default(), Role::Visitor);
    }

    #[test]
    fn synthesized_default_is_voter() {
        assert_eq!(Role::synthesized_default(), Role::Voter);
    }

    #[test]
    fn privileged_roles() {
        assert!(Role::Developer.is_privileged());
        assert!(Role::Master.is_privileged());
        assert!(!Role::Candidate.is_privileged());
        assert!(!Role::Leader.is_privileged());
        assert!(!Role::Voter.is_privileged());
        assert!(!Role::Visitor.is_privileged());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Role::Candidate.to_string(), "candidate");
        assert_eq!(format!("{}", Role::Visitor), "visitor");
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&Role::Leader).expect("serialize");
        assert_eq!(json, "\"leader\"");
        let back: Role = serde_json::from_str("\"voter\"").expect("deserialize");
        assert_eq!(back, Role::Voter);
    }
}
