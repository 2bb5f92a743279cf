//! Resource kinds governed by the policy table.

use serde::{Deserialize, Serialize};

/// A named category of stored record, one policy row per role.
///
/// | Kind | Collection | Records |
/// |------|------------|---------|
/// | `Territory` | `territories` | Geographic campaign zones |
/// | `Voter` | `voters` | Registered voter contacts |
/// | `Alert` | `alerts` | Campaign announcements |
/// | `VotingTable` | `voting_tables` | Polling station assignments |
///
/// # Example
///
/// ```
/// use voto_access::ResourceKind;
///
/// let kind = ResourceKind::Territory;
/// assert_eq!(kind.as_str(), "territory");
/// assert_eq!(kind.collection(), "territories");
/// assert_eq!(ResourceKind::parse("voting_table"), Some(ResourceKind::VotingTable));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Geographic campaign zone with a responsible user.
    Territory,
    /// Registered voter contact record.
    Voter,
    /// Campaign announcement, optionally flagged visible to voters.
    Alert,
    /// Polling station assignment with a responsible leader.
    VotingTable,
}

impl ResourceKind {
    /// Every governed kind, for table-driven tests.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Territory,
        ResourceKind::Voter,
        ResourceKind::Alert,
        ResourceKind::VotingTable,
    ];

    /// Returns the canonical snake_case name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Territory => "territory",
            Self::Voter => "voter",
            Self::Alert => "alert",
            Self::VotingTable => "voting_table",
        }
    }

    /// Returns the datastore collection that holds records of this kind.
    #[must_use]
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Territory => "territories",
            Self::Voter => "voters",
            Self::Alert => "alerts",
            Self::VotingTable => "voting_tables",
        }
    }

    /// Parses a kind name (case-insensitive).
    ///
    /// Returns `None` for unknown names. Policy lookups treat an
    /// unknown kind the same as an unlisted one: no grant.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "territory" => Some(Self::Territory),
            "voter" => Some(Self::Voter),
            "alert" => Some(Self::Alert),
            "voting_table" | "votingtable" => Some(Self::VotingTable),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
