//! Resource scopes: what one role may see and do with one kind.

use crate::{Action, ActionSet, ScopeFilter};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use voto_types::ErrorCode;

/// The evaluated policy for one `(role, resource kind, actor)` triple.
///
/// A scope pairs a read-visibility [`ScopeFilter`] with the
/// [`ActionSet`] of granted mutations. Data-fetching call sites apply
/// the filter when listing; mutation call sites check the actions
/// before submitting.
///
/// # Why No Default?
///
/// **DO NOT implement `Default` for ResourceScope.**
///
/// A defaulted scope would have to pick between the two honest resting
/// points, [`restricted`](Self::restricted) and
/// [`unrestricted`](Self::unrestricted), and a silent wrong pick is an
/// access-control bug. Name the one you mean.
///
/// # Example
///
/// ```
/// use voto_access::{Action, ActionSet, ResourceScope, ScopeFilter};
/// use voto_types::ProfileId;
///
/// let leader = ProfileId::new();
/// let scope = ResourceScope::new(
///     ScopeFilter::owned("responsible_user_id", leader),
///     ActionSet::UPDATE,
/// );
///
/// assert!(scope.allows(Action::Update));
/// assert!(!scope.allows(Action::Create));
/// assert!(!scope.can_view_all());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceScope {
    /// Which records of the kind the actor can see.
    pub filter: ScopeFilter,
    /// Which mutations the actor may perform on the kind.
    pub actions: ActionSet,
}

impl ResourceScope {
    /// Creates a scope from a filter and an action set.
    #[must_use]
    pub fn new(filter: ScopeFilter, actions: ActionSet) -> Self {
        Self { filter, actions }
    }

    /// The fully restrictive scope: sees nothing, may do nothing.
    ///
    /// This is what every `(role, kind)` pair without an explicit
    /// policy row evaluates to.
    #[must_use]
    pub fn restricted() -> Self {
        Self {
            filter: ScopeFilter::None,
            actions: ActionSet::empty(),
        }
    }

    /// The fully open scope: sees everything, may do everything.
    ///
    /// Reserved for the administrative roles.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self {
            filter: ScopeFilter::Unrestricted,
            actions: ActionSet::FULL,
        }
    }

    /// Returns `true` if the scope grants the requested mutation.
    #[must_use]
    pub fn allows(&self, action: Action) -> bool {
        self.actions.contains(action.as_flag())
    }

    /// Returns `true` if reads ignore the filter entirely.
    #[must_use]
    pub fn can_view_all(&self) -> bool {
        self.actions.contains(ActionSet::VIEW_ALL)
    }

    /// Returns `true` if the scope can reach the given record.
    ///
    /// A record is reachable when the actor views everything or the
    /// scope filter matches it.
    #[must_use]
    pub fn can_see(&self, record: &Value) -> bool {
        self.can_view_all() || self.filter.matches(record)
    }

    /// Checks a requested mutation against the granted actions.
    ///
    /// This is a convenience for call sites that want an error value to
    /// surface instead of branching on [`allows`](Self::allows). The
    /// policy itself never raises; denial is data.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyViolation`] naming the denied action and what
    /// the scope actually grants.
    pub fn authorize(&self, action: Action) -> Result<(), PolicyViolation> {
        if self.allows(action) {
            Ok(())
        } else {
            Err(PolicyViolation {
                action,
                granted: self.actions,
            })
        }
    }
}

/// A mutation was requested that the evaluated scope does not grant.
///
/// Carried as a value through caller code; the policy layer never
/// panics or throws on denial. Callers surface a generic "not
/// permitted" message and drop the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{action} not permitted (granted: {granted})")]
pub struct PolicyViolation {
    /// The mutation that was refused.
    pub action: Action,
    /// What the scope actually grants.
    pub granted: ActionSet,
}

impl ErrorCode for PolicyViolation {
    fn code(&self) -> &'static str {
        "ACCESS_DENIED"
    }

    fn is_recoverable(&self) -> bool {
        // A different role is needed, not a retry
        false
    }
}
