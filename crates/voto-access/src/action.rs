//! Action sets gated by the policy table.
//!
//! Defines the mutations and visibility grants a [`ResourceScope`]
//! can carry for one `(role, resource kind)` pair.
//!
//! # Deny by Default
//!
//! ```text
//! Effective Permission = PolicyRow(role, kind) ∪ nothing
//! ```
//!
//! An action is allowed only if the policy table explicitly grants it.
//! Combinations with no row get [`ActionSet::empty()`]. Deny wins.
//!
//! # Example
//!
//! ```
//! use voto_access::ActionSet;
//!
//! // Full grant (developer, master)
//! let full = ActionSet::FULL;
//! assert!(full.contains(ActionSet::CREATE));
//! assert!(full.contains(ActionSet::VIEW_ALL));
//!
//! // Scoped manager (leader over voting tables)
//! let manage = ActionSet::CREATE | ActionSet::UPDATE;
//! assert!(manage.contains(ActionSet::CREATE));
//! assert!(!manage.contains(ActionSet::DELETE));
//! ```
//!
//! [`ResourceScope`]: crate::ResourceScope

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Grants a policy row can attach to a resource kind for a role.
    ///
    /// The first three flags gate mutations; [`VIEW_ALL`](Self::VIEW_ALL)
    /// widens reads past the scope filter.
    ///
    /// | Flag | Grants |
    /// |------|--------|
    /// | [`CREATE`](Self::CREATE) | Insert new records of the kind |
    /// | [`UPDATE`](Self::UPDATE) | Patch records the filter reaches |
    /// | [`DELETE`](Self::DELETE) | Remove records the filter reaches |
    /// | [`VIEW_ALL`](Self::VIEW_ALL) | Read every record, filter ignored |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ActionSet: u8 {
        /// Insert new records: `datastore.insert`
        const CREATE   = 0b0001;
        /// Patch in-scope records: `datastore.update`
        const UPDATE   = 0b0010;
        /// Remove in-scope records: `datastore.delete`
        const DELETE   = 0b0100;
        /// Read past the scope filter (cross-tenant visibility).
        const VIEW_ALL = 0b1000;
    }
}

impl ActionSet {
    /// All mutations: CREATE | UPDATE | DELETE.
    pub const MUTATE: Self = Self::CREATE.union(Self::UPDATE).union(Self::DELETE);

    /// Every grant, mutations and visibility both.
    pub const FULL: Self = Self::MUTATE.union(Self::VIEW_ALL);

    /// Returns a human-readable list of granted action names.
    ///
    /// # Example
    ///
    /// ```
    /// use voto_access::ActionSet;
    ///
    /// let actions = ActionSet::CREATE | ActionSet::UPDATE;
    /// let names = actions.names();
    /// assert!(names.contains(&"CREATE"));
    /// assert!(names.contains(&"UPDATE"));
    /// ```
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Self::CREATE) {
            names.push("CREATE");
        }
        if self.contains(Self::UPDATE) {
            names.push("UPDATE");
        }
        if self.contains(Self::DELETE) {
            names.push("DELETE");
        }
        if self.contains(Self::VIEW_ALL) {
            names.push("VIEW_ALL");
        }
        names
    }

    /// Parses an action name string (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use voto_access::ActionSet;
    ///
    /// assert_eq!(ActionSet::parse("create"), Some(ActionSet::CREATE));
    /// assert_eq!(ActionSet::parse("VIEW_ALL"), Some(ActionSet::VIEW_ALL));
    /// assert_eq!(ActionSet::parse("unknown"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "CREATE" => Some(Self::CREATE),
            "UPDATE" => Some(Self::UPDATE),
            "DELETE" => Some(Self::DELETE),
            "VIEW_ALL" | "VIEWALL" => Some(Self::VIEW_ALL),
            "MUTATE" => Some(Self::MUTATE),
            "FULL" => Some(Self::FULL),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}

/// A single requested mutation, for authorization checks.
///
/// [`ActionSet`] describes what a scope grants; `Action` names the one
/// thing a caller is about to do. Pass it to
/// [`ResourceScope::authorize`](crate::ResourceScope::authorize).
///
/// Reads are not an `Action`: read reach is the scope filter itself,
/// not a gated operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Insert a new record.
    Create,
    /// Patch an existing record.
    Update,
    /// Remove an existing record.
    Delete,
}

impl Action {
    /// Every requestable mutation, for table-driven tests.
    pub const ALL: [Action; 3] = [Action::Create, Action::Update, Action::Delete];

    /// Returns the flag this action corresponds to.
    #[must_use]
    pub fn as_flag(self) -> ActionSet {
        match self {
            Self::Create => ActionSet::CREATE,
            Self::Update => ActionSet::UPDATE,
            Self::Delete => ActionSet::DELETE,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
