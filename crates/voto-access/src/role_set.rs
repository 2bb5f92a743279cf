//! Role masks for grant lists.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use voto_types::Role;

bitflags! {
    /// A set of roles, for answers like "who may do this".
    ///
    /// Where [`Role`] names one actor's category, `RoleSet` carries a
    /// whole grant list in one value, e.g. which profile roles an actor
    /// may create, so form layers can offer exactly those options.
    ///
    /// # Example
    ///
    /// ```
    /// use voto_access::RoleSet;
    /// use voto_types::Role;
    ///
    /// let subordinates = RoleSet::LEADER | RoleSet::VOTER;
    /// assert!(subordinates.contains_role(Role::Voter));
    /// assert!(!subordinates.contains_role(Role::Master));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct RoleSet: u8 {
        /// Platform maintainers.
        const DEVELOPER = 0b00_0001;
        /// Campaign administrators.
        const MASTER    = 0b00_0010;
        /// Campaign owners running for office.
        const CANDIDATE = 0b00_0100;
        /// Territory leaders.
        const LEADER    = 0b00_1000;
        /// Registered voters.
        const VOTER     = 0b01_0000;
        /// Unauthenticated actors.
        const VISITOR   = 0b10_0000;
    }
}

impl RoleSet {
    /// The administrative roles: DEVELOPER | MASTER.
    pub const ADMINS: Self = Self::DEVELOPER.union(Self::MASTER);

    /// Returns `true` if the set includes the given role.
    #[must_use]
    pub fn contains_role(self, role: Role) -> bool {
        self.contains(Self::from(role))
    }

    /// Returns the roles in the set, in hierarchy order.
    #[must_use]
    pub fn roles(self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| self.contains_role(*role))
            .collect()
    }
}

impl From<Role> for RoleSet {
    fn from(role: Role) -> Self {
        match role {
            Role::Developer => Self::DEVELOPER,
            Role::Master => Self::MASTER,
            Role::Candidate => Self::CANDIDATE,
            Role::Leader => Self::LEADER,
            Role::Voter => Self::VOTER,
            Role::Visitor => Self::VISITOR,
        }
    }
}

impl std::fmt::Display for RoleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.roles().iter().map(Role::as_str).collect();
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}
