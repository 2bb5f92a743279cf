//! Scope filters: the read-visibility predicate of a policy row.
//!
//! A [`ScopeFilter`] answers two questions about one resource kind for
//! one actor:
//!
//! - **In memory**: does this record fall inside the scope?
//!   ([`matches`](ScopeFilter::matches), for records already fetched)
//! - **At the datastore**: what condition constrains the listing?
//!   ([`to_clause`](ScopeFilter::to_clause), for pushing the scope down)
//!
//! Both views agree: a record matches exactly when the rendered clause
//! would have selected it.
//!
//! # Example
//!
//! ```
//! use voto_access::ScopeFilter;
//! use voto_types::ProfileId;
//!
//! let ana = ProfileId::new();
//! let filter = ScopeFilter::owned("responsible_user_id", ana);
//!
//! let mine = serde_json::json!({ "responsible_user_id": ana.uuid().to_string() });
//! let theirs = serde_json::json!({ "responsible_user_id": "someone-else" });
//!
//! assert!(filter.matches(&mine));
//! assert!(!filter.matches(&theirs));
//! assert_eq!(
//!     filter.to_clause(),
//!     Some(format!("responsible_user_id = {}", ana.uuid())),
//! );
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use voto_types::ProfileId;

/// The visibility restriction a policy row applies to a resource kind.
///
/// # Variants
///
/// | Filter | Matches | Clause |
/// |--------|---------|--------|
/// | `Unrestricted` | every record | none |
/// | `None` | no record | `false` |
/// | `Owned` | records whose column holds the actor's id | `column = <actor>` |
/// | `Flagged` | records whose column is `true` | `column = true` |
/// | `AnyOf` | records any branch matches | branches joined with `or` |
///
/// The actor is baked in at evaluation time, so a filter is a
/// self-contained value: no extra context is needed to apply it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScopeFilter {
    /// Every record of the kind is visible.
    Unrestricted,

    /// No record of the kind is visible. The restrictive default.
    None,

    /// Records the actor owns through a foreign-key column.
    ///
    /// Dotted columns reach into embedded objects, e.g.
    /// `territories.responsible_user_id` for join-shaped rows.
    Owned {
        /// Column holding the owning actor's id.
        column: String,
        /// The actor whose id the column must hold.
        actor: ProfileId,
    },

    /// Records carrying a boolean opt-in flag.
    ///
    /// Used for kinds that publish a subset to low-reach roles, e.g.
    /// `visible_to_voters` on alerts and voting tables.
    Flagged {
        /// Column holding the flag.
        column: String,
    },

    /// Records matching any of the branch filters.
    AnyOf {
        /// Branch filters, combined with `or`.
        branches: Vec<ScopeFilter>,
    },
}

impl ScopeFilter {
    /// Creates an ownership filter over the given column.
    #[must_use]
    pub fn owned(column: impl Into<String>, actor: ProfileId) -> Self {
        Self::Owned {
            column: column.into(),
            actor,
        }
    }

    /// Creates a flag filter over the given boolean column.
    #[must_use]
    pub fn flagged(column: impl Into<String>) -> Self {
        Self::Flagged {
            column: column.into(),
        }
    }

    /// Combines filters so a record matching any branch is in scope.
    #[must_use]
    pub fn any_of(branches: Vec<ScopeFilter>) -> Self {
        Self::AnyOf { branches }
    }

    /// Returns `true` if every record passes.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Unrestricted)
    }

    /// Returns `true` if no record can pass.
    #[must_use]
    pub fn is_none(&self) -> bool {
        match self {
            Self::None => true,
            Self::AnyOf { branches } => branches.iter().all(Self::is_none),
            _ => false,
        }
    }

    /// Tests a fetched record against the filter.
    ///
    /// Records are JSON rows as the datastore returns them. A missing
    /// column, a wrong-typed value, or a non-object record all fail the
    /// match: scope narrows on bad data, never widens.
    #[must_use]
    pub fn matches(&self, record: &Value) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::None => false,
            Self::Owned { column, actor } => lookup(record, column)
                .and_then(Value::as_str)
                .map_or(false, |value| value == actor.uuid().to_string()),
            Self::Flagged { column } => lookup(record, column)
                .and_then(Value::as_bool)
                .unwrap_or(false),
            Self::AnyOf { branches } => branches.iter().any(|branch| branch.matches(record)),
        }
    }

    /// Renders the filter as a datastore listing condition.
    ///
    /// Returns `None` when no condition is needed (unrestricted).
    /// A filter that matches nothing renders as the always-false
    /// condition `false`, so a pushed-down query returns no rows.
    ///
    /// # Example
    ///
    /// ```
    /// use voto_access::ScopeFilter;
    ///
    /// assert_eq!(ScopeFilter::Unrestricted.to_clause(), None);
    /// assert_eq!(ScopeFilter::None.to_clause(), Some("false".to_string()));
    /// assert_eq!(
    ///     ScopeFilter::flagged("visible_to_voters").to_clause(),
    ///     Some("visible_to_voters = true".to_string()),
    /// );
    /// ```
    #[must_use]
    pub fn to_clause(&self) -> Option<String> {
        match self {
            Self::Unrestricted => None,
            Self::None => Some("false".to_string()),
            Self::Owned { column, actor } => Some(format!("{} = {}", column, actor.uuid())),
            Self::Flagged { column } => Some(format!("{column} = true")),
            Self::AnyOf { branches } => {
                // An unrestricted branch swallows the rest
                if branches.iter().any(Self::is_unrestricted) {
                    return None;
                }
                let clauses: Vec<String> = branches
                    .iter()
                    .filter(|branch| !branch.is_none())
                    .filter_map(Self::to_clause)
                    .collect();
                if clauses.is_empty() {
                    Some("false".to_string())
                } else {
                    Some(clauses.join(" or "))
                }
            }
        }
    }
}

/// Resolves a possibly dotted column path inside a JSON record.
fn lookup<'a>(record: &'a Value, column: &str) -> Option<&'a Value> {
    let mut current = record;
    for segment in column.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}
