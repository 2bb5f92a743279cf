//! Event types for Voto.
//!
//! This crate provides the message types that flow into and out of the
//! session store: what the identity provider reports, and what session
//! observers are told.
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
//! │  voto-event     : AuthEvent, SessionChange  ◄── HERE         │
//! │  voto-access    : AccessPolicy, ResourceScope                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Event Architecture Overview
//!
//! The session store sits between the identity provider and everyone
//! else. Provider messages flow in, session snapshots flow out:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                          AuthProvider                                │
//! │          (credential verification, token refresh, revocation)        │
//! └──────────────────────────────────────────────────────────────────────┘
//!                                     │ AuthEvent
//!                                     ▼
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                          SessionStore                                │
//! │  ┌────────────────────────────────────────────────────────────────┐  │
//! │  │  - Serialized transitions (one commit at a time)               │  │
//! │  │  - Profile resolution (lookup, synthesize, self-heal)          │  │
//! │  │  - Stale async results discarded (last writer wins)            │  │
//! │  └────────────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────────────┘
//!           │ SessionChange (broadcast)
//!           ├──────────────┬──────────────┬──────────────┐
//!           ▼              ▼              ▼              ▼
//!     ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
//!     │   UI     │   │  Audit   │   │  Access  │   │  Tests   │
//!     │ binding  │   │   log    │   │  scopes  │   │          │
//!     └──────────┘   └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! # Message Types
//!
//! | Type | Direction | Carries | Use Case |
//! |------|-----------|---------|----------|
//! | [`AuthEvent`] | Provider → Store | [`Identity`] | Credential state changed |
//! | [`SessionChange`] | Store → Subscribers | [`Session`] | Session committed |
//!
//! # Permission Model
//!
//! Event types themselves do **not** contain permission logic. An
//! [`AuthEvent`] says who the provider verified; what that identity may
//! do is decided by `voto-access` from the resolved profile's role.
//!
//! This separation enables:
//!
//! - **Role changes without re-auth**: A refresh re-resolves the profile
//! - **Policy flexibility**: Change access rules without touching events
//! - **Audit clarity**: Clear separation of "who" from "what permission"
//!
//! # Usage
//!
//! ```
//! use voto_event::{AuthEvent, SessionChange};
//! use voto_types::{Identity, ProfileId, Session, SessionStatus};
//!
//! // What the provider reports
//! let identity = Identity::new(ProfileId::new(), "ana@campaign.example");
//! let event = AuthEvent::signed_in(identity);
//! assert!(event.is_signed_in());
//!
//! // What subscribers are told
//! let change = SessionChange::new(SessionStatus::Pending, Session::anonymous());
//! assert!(change.is_settlement());
//! ```
//!
//! # Related Crates
//!
//! - [`voto_types`] - Core value types ([`Identity`], [`Session`], etc.)
//! - `voto-runtime` - The session store that produces and consumes these
//!
//! [`Identity`]: voto_types::Identity
//! [`Session`]: voto_types::Session

mod auth;
mod change;

pub use auth::AuthEvent;
pub use change::SessionChange;

// Re-export from voto_types for convenience
pub use voto_types::{Session, SessionStatus};
