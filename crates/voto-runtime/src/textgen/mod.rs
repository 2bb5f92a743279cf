//! The text generation capability.
//!
//! - [`TextGenerator`]: opaque backend trait; [`NullGenerator`] for demo
//!   mode and tests.
//! - [`GenerationParams`]: per-call sampling parameters with cheap
//!   overrides.
//! - [`GenerationError`]: failure taxonomy with retry-worthiness
//!   classification.
//!
//! Errors are never swallowed into output text; callers that want
//! degraded output choose it explicitly with
//! [`generate_or`](TextGenerator::generate_or).

mod error;
mod generator;

pub use error::GenerationError;
pub use generator::{GenerationParams, NullGenerator, TextGenerator};
