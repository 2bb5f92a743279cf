//! Record storage behind the [`Datastore`] trait.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Session Core                             │
//! │  profile resolution, health probe                            │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Storage Abstraction                         │
//! │  Datastore trait: find / insert / update                     │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!           ┌────────────────┴────────────────┐
//!           ▼                                 ▼
//!     ┌──────────┐                     ┌──────────┐
//!     │ InMemory │                     │  Remote  │
//!     │ (demo)   │                     │ backend  │
//!     └──────────┘                     └──────────┘
//! ```
//!
//! The session core writes exactly one collection, `profiles`
//! ([`ProfileRecord`]); everything else is the embedding application's
//! data, reached through the same three operations with
//! [`ScopeFilter`](voto_access::ScopeFilter) predicates.

mod error;
mod memory;
mod records;
mod store;

pub use error::DatastoreError;
pub use memory::InMemoryDatastore;
pub use records::ProfileRecord;
pub use store::Datastore;
