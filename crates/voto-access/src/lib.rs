//! Role-driven access policy for Voto.
//!
//! This crate decides what each role may see and do, per resource
//! kind, through one data-driven policy table. It has no I/O and no
//! state: every decision is a pure function of `(role, kind, actor)`.
//!
//! # Crate Architecture
//!
//! This crate is part of the **Domain** layer:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                             │
//! │  (Value types, SemVer stable, no I/O)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  voto-types     : Profile, Role, Session, ErrorCode          │
//! │  voto-event     : AuthEvent, SessionChange                   │
//! │  voto-access    : AccessPolicy, ResourceScope  ◄── HERE      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Decision Flow
//!
//! ```text
//! Effective Access = PolicyRow(role, kind) applied to actor
//!
//! ┌──────────────┐   Profile    ┌──────────────┐   ResourceScope
//! │ SessionStore │ ───────────► │ AccessPolicy │ ─────────────────┐
//! └──────────────┘  (who asks)  └──────────────┘                  │
//!                                                                 ▼
//!                               ┌─────────────────────────────────────┐
//!                               │ Call site                           │
//!                               │  - list: apply filter.to_clause()   │
//!                               │  - mutate: scope.authorize(action)  │
//!                               └─────────────────────────────────────┘
//! ```
//!
//! Denial is data, not an exception: an ungranted pair evaluates to the
//! restrictive scope and an unauthorized mutation returns a
//! [`PolicyViolation`] value.
//!
//! # Example
//!
//! ```
//! use voto_access::{AccessPolicy, Action, ResourceKind};
//! use voto_types::{Profile, ProfileId, Role};
//!
//! let ana = Profile::new(ProfileId::new(), "Ana", Role::Leader);
//!
//! // Listing: push the scope down to the datastore
//! let scope = AccessPolicy::for_profile(&ana, ResourceKind::Territory);
//! let clause = scope.filter.to_clause();
//! assert_eq!(clause, Some(format!("responsible_user_id = {}", ana.id.uuid())));
//!
//! // Mutating: check before submitting
//! assert!(scope.authorize(Action::Update).is_ok());
//! assert!(scope.authorize(Action::Create).is_err());
//! ```

mod action;
mod filter;
mod kind;
mod policy;
mod role_set;
mod scope;

pub use action::{Action, ActionSet};
pub use filter::ScopeFilter;
pub use kind::ResourceKind;
pub use policy::AccessPolicy;
pub use role_set::RoleSet;
pub use scope::{PolicyViolation, ResourceScope};

// Re-export from voto_types for convenience
pub use voto_types::{ProfileId, Role};

#[cfg(test)]
mod tests {
    use super::*;
    use voto_types::ErrorCode;

    #[test]
    fn anonymous_actors_evaluate_through_visitor() {
        // A session without a profile acts as Visitor; the table has no
        // visitor rows, so everything lands on the restrictive default.
        let scope = AccessPolicy::evaluate(Role::default(), ResourceKind::Alert, ProfileId::new());
        assert_eq!(scope, ResourceScope::restricted());
    }

    #[test]
    fn denied_mutation_surfaces_as_value() {
        let scope = AccessPolicy::evaluate(Role::Voter, ResourceKind::Alert, ProfileId::new());
        let violation = scope.authorize(Action::Create).unwrap_err();

        assert_eq!(violation.code(), "ACCESS_DENIED");
        assert!(violation.to_string().contains("not permitted"));
    }

    #[test]
    fn scopes_serialize_for_audit_logs() {
        let scope = AccessPolicy::evaluate(
            Role::Leader,
            ResourceKind::VotingTable,
            ProfileId::new(),
        );
        let json = serde_json::to_value(&scope).expect("serialize");
        assert_eq!(json["filter"]["type"], "owned");
        assert_eq!(json["filter"]["column"], "responsible_leader_id");
    }
}
