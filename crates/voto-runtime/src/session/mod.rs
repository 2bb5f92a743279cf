//! Session lifecycle management.
//!
//! This module owns the one mutable [`Session`](voto_types::Session) in
//! the system:
//!
//! - [`SessionStore`]: restoration, sign-in/sign-out, the provider event
//!   pump and change subscriptions.
//! - Profile resolution (internal): identity in, usable profile out,
//!   degrading to a synthesized voter profile instead of failing.
//!
//! # Architecture
//!
//! ```text
//!  AuthProvider ──events──► SessionStore ──SessionChange──► subscribers
//!       ▲                        │
//!       │ sign_in / sign_out     │ profile resolution
//!       │                        ▼
//!    callers                 Datastore ("profiles")
//! ```

mod resolve;
mod store;

pub use store::{SessionStore, DEFAULT_SIGN_IN_TIMEOUT};
