//! The role policy table.
//!
//! One table decides, for every `(role, resource kind)` pair, which
//! records are visible and which mutations are permitted. Every
//! data-fetching and mutation call site consumes this table; nothing
//! else in the system makes role decisions.
//!
//! # The Table
//!
//! | Role | Territory | Voter | Alert | Voting table |
//! |------|-----------|-------|-------|--------------|
//! | developer | all, full | all, full | all, full | all, full |
//! | master | all, full | all, full | all, full | all, full |
//! | candidate | owned or created, C+U | via own territories, C+U | all, C | owned or created, C+U |
//! | leader | owned, U | via own territory, C+U | all, C | owned, C+U |
//! | voter | nothing | self-registered, read | flagged subset, read | flagged subset, read |
//! | visitor | nothing | nothing | nothing | nothing |
//!
//! "Owned" means a foreign-key column holds the actor's id; "flagged"
//! means the record opted in with `visible_to_voters = true`.
//!
//! # Deny by Default
//!
//! [`AccessPolicy::evaluate`] is a total function: pairs without a row
//! (including every pair for `visitor`) evaluate to
//! [`ResourceScope::restricted`]. A newly added resource kind is
//! therefore inaccessible to every role until a row grants it.
//!
//! # Example
//!
//! ```
//! use voto_access::{AccessPolicy, Action, ResourceKind};
//! use voto_types::{ProfileId, Role};
//!
//! let leader = ProfileId::new();
//!
//! // Leaders manage their own territory but cannot create new ones
//! let scope = AccessPolicy::evaluate(Role::Leader, ResourceKind::Territory, leader);
//! assert!(!scope.allows(Action::Create));
//! assert!(scope.allows(Action::Update));
//!
//! // They do register voters
//! let scope = AccessPolicy::evaluate(Role::Leader, ResourceKind::Voter, leader);
//! assert!(scope.allows(Action::Create));
//! ```

use crate::{ActionSet, ResourceKind, ResourceScope, RoleSet, ScopeFilter};
use voto_types::{Profile, ProfileId, Role};

/// The single policy table for role-based data access.
///
/// Stateless: every method is a pure function of its arguments, safe
/// to call concurrently from anywhere without coordination.
pub struct AccessPolicy;

impl AccessPolicy {
    /// Evaluates the scope for a role over a resource kind.
    ///
    /// Total and infallible: unknown or unlisted combinations return
    /// [`ResourceScope::restricted`], never an error. The actor id is
    /// baked into the returned filter, so the scope is self-contained.
    #[must_use]
    pub fn evaluate(role: Role, kind: ResourceKind, actor: ProfileId) -> ResourceScope {
        Self::granted_row(role, kind, actor).unwrap_or_else(ResourceScope::restricted)
    }

    /// Evaluates the scope for a resolved profile.
    #[must_use]
    pub fn for_profile(profile: &Profile, kind: ResourceKind) -> ResourceScope {
        Self::evaluate(profile.role, kind, profile.id)
    }

    /// Returns the profile roles an actor may create.
    ///
    /// Creation narrows strictly down the hierarchy; no role can mint
    /// peers or superiors, and `visitor` is not a creatable role (it is
    /// the absence of a profile).
    #[must_use]
    pub fn creatable_roles(actor: Role) -> RoleSet {
        match actor {
            Role::Developer => RoleSet::ADMINS | RoleSet::CANDIDATE | RoleSet::LEADER | RoleSet::VOTER,
            Role::Master => RoleSet::CANDIDATE | RoleSet::LEADER | RoleSet::VOTER,
            Role::Candidate => RoleSet::LEADER | RoleSet::VOTER,
            Role::Leader => RoleSet::VOTER,
            Role::Voter | Role::Visitor => RoleSet::empty(),
        }
    }

    /// Returns `true` if `actor` may create profiles with role `target`.
    #[must_use]
    pub fn may_create(actor: Role, target: Role) -> bool {
        Self::creatable_roles(actor).contains_role(target)
    }

    /// The table rows. `None` means no grant, which callers turn into
    /// the restrictive scope.
    fn granted_row(role: Role, kind: ResourceKind, actor: ProfileId) -> Option<ResourceScope> {
        use ResourceKind as Kind;

        let row = |filter, actions| Some(ResourceScope::new(filter, actions));
        let manage = ActionSet::CREATE | ActionSet::UPDATE;

        match (role, kind) {
            // Administrative roles see and do everything
            (Role::Developer | Role::Master, _) => Some(ResourceScope::unrestricted()),

            (Role::Candidate, Kind::Territory) => row(
                ScopeFilter::any_of(vec![
                    ScopeFilter::owned("responsible_user_id", actor),
                    ScopeFilter::owned("created_by", actor),
                ]),
                manage,
            ),
            (Role::Candidate, Kind::Voter) => row(
                ScopeFilter::owned("territories.responsible_user_id", actor),
                manage,
            ),
            (Role::Candidate, Kind::Alert) => row(ScopeFilter::Unrestricted, ActionSet::CREATE),
            (Role::Candidate, Kind::VotingTable) => row(
                ScopeFilter::any_of(vec![
                    ScopeFilter::owned("responsible_leader_id", actor),
                    ScopeFilter::owned("created_by", actor),
                ]),
                manage,
            ),

            // Leaders reach only what they are directly responsible for
            (Role::Leader, Kind::Territory) => row(
                ScopeFilter::owned("responsible_user_id", actor),
                ActionSet::UPDATE,
            ),
            (Role::Leader, Kind::Voter) => row(
                ScopeFilter::owned("territories.responsible_user_id", actor),
                manage,
            ),
            (Role::Leader, Kind::Alert) => row(ScopeFilter::Unrestricted, ActionSet::CREATE),
            (Role::Leader, Kind::VotingTable) => {
                row(ScopeFilter::owned("responsible_leader_id", actor), manage)
            }

            // Voters read narrow slices and mutate nothing
            (Role::Voter, Kind::Voter) => row(
                ScopeFilter::owned("registered_by", actor),
                ActionSet::empty(),
            ),
            (Role::Voter, Kind::Alert) => row(
                ScopeFilter::flagged("visible_to_voters"),
                ActionSet::empty(),
            ),
            (Role::Voter, Kind::VotingTable) => row(
                ScopeFilter::flagged("visible_to_voters"),
                ActionSet::empty(),
            ),

            // No row: voter territories, and everything for visitor
            _ => None,
        }
    }
}
