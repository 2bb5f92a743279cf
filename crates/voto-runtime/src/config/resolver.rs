//! Configuration resolver trait for layered overrides.
//!
//! # Architecture
//!
//! ```text
//! ConfigLoader.load()  →  VotoConfig (base)
//!                              │
//!                              ▼
//!                     ConfigResolver.apply()
//!                              │
//!                              ▼
//!                     VotoConfig (final)
//! ```
//!
//! # Example
//!
//! ```
//! use voto_runtime::config::{ConfigResolver, VotoConfig};
//!
//! struct EmbedderOverrides {
//!     sign_in_secs: Option<u64>,
//! }
//!
//! impl ConfigResolver for EmbedderOverrides {
//!     fn apply(&self, config: &mut VotoConfig) {
//!         if let Some(secs) = self.sign_in_secs {
//!             config.timeouts.sign_in_secs = secs;
//!         }
//!     }
//! }
//!
//! let mut config = VotoConfig::default();
//! let overrides = EmbedderOverrides { sign_in_secs: Some(5) };
//! overrides.apply(&mut config);
//! assert_eq!(config.timeouts.sign_in_secs, 5);
//! ```

use super::VotoConfig;

/// Trait for applying configuration overrides.
///
/// Implementors can modify an existing config with their specific
/// overrides. This enables a clean separation between config loading
/// (file/env) and runtime overrides (embedder flags, programmatic
/// settings).
pub trait ConfigResolver {
    /// Applies overrides to the given configuration.
    ///
    /// Only explicitly set values should be applied, preserving existing
    /// values for unspecified options.
    fn apply(&self, config: &mut VotoConfig);
}

/// No-op resolver that makes no changes.
///
/// Useful as a default or for testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpResolver;

impl ConfigResolver for NoOpResolver {
    fn apply(&self, _config: &mut VotoConfig) {
        // No changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_resolver_does_nothing() {
        let mut config = VotoConfig::default();
        let original = config.clone();

        NoOpResolver.apply(&mut config);

        assert_eq!(config, original);
    }

    #[test]
    fn custom_resolver() {
        struct TestResolver {
            base_url: Option<String>,
        }

        impl ConfigResolver for TestResolver {
            fn apply(&self, config: &mut VotoConfig) {
                if let Some(ref url) = self.base_url {
                    config.connection.base_url = url.clone();
                }
            }
        }

        let mut config = VotoConfig::default();
        assert!(config.connection.base_url.is_empty());

        let resolver = TestResolver {
            base_url: Some("https://resolved.example.com".into()),
        };
        resolver.apply(&mut config);

        assert_eq!(config.connection.base_url, "https://resolved.example.com");
    }
}
