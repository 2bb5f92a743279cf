//! Core types for Voto.
//!
//! This crate provides the foundational identity and session value types
//! for Voto, a campaign-operations backend (candidates, leaders, voters,
//! territories, and the sessions that act on them).
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                             │
//! │  (Value types, SemVer stable, no I/O)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  voto-types     : Profile, Role, Session, ErrorCode ◄── HERE │
//! │  voto-event     : AuthEvent, SessionChange                   │
//! │  voto-access    : AccessPolicy, ResourceScope                │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Runtime Layer                            │
//! │  (Async session store, providers, datastore)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  voto-runtime   : SessionStore, AuthProvider, config         │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Embedding Layer                           │
//! │  (What host applications link against)                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  voto-app       : VotoApp builder and facade                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Why a Separate Types Crate?
//!
//! This crate sits at the bottom of the dependency graph because:
//!
//! - **SemVer stable**: API changes follow semantic versioning
//! - **Minimal dependencies**: serde and uuid, nothing else
//! - **No I/O**: Every type here is a pure value, safe in any context
//! - **Implementation freedom**: The runtime can change without breaking
//!   code that only consumes sessions and profiles
//!
//! # Session Design
//!
//! A [`Session`] is an immutable snapshot of who is signed in:
//!
//! - **Status**: `pending` at startup, then `authenticated` or `anonymous`
//! - **Profile**: identity, display name, and [`Role`], attached exactly
//!   when authenticated
//! - **Last error**: the reason for the most recent failed transition
//!
//! # Identifier Design
//!
//! Profile identifiers are UUID-based for:
//!
//! - **Provider compatibility**: Identity providers hand out UUIDs
//! - **Global uniqueness**: No coordination needed across deployments
//! - **Serialization**: First-class serde support
//!
//! # Example
//!
//! ```
//! use voto_types::{Identity, Profile, ProfileId, Role, Session};
//!
//! // A verified identity, as an auth provider reports it
//! let identity = Identity::new(ProfileId::new(), "ana@campaign.example");
//!
//! // Unknown identities synthesize a voter profile
//! let profile = Profile::synthesized(&identity);
//! assert_eq!(profile.role, Role::Voter);
//! assert_eq!(profile.display_name, "ana");
//!
//! // Sessions are immutable snapshots
//! let session = Session::authenticated(profile);
//! assert!(session.is_authenticated());
//! assert_eq!(session.effective_role(), Role::Voter);
//! ```

mod construct;
mod error;
mod id;
mod identity;
mod profile;
mod role;
mod session;

pub use construct::TryNew;
pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use id::ProfileId;
pub use identity::Identity;
pub use profile::Profile;
pub use role::Role;
pub use session::{Session, SessionStatus};
