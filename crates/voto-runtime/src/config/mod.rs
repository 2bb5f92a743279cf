//! Configuration management with hierarchical layering.
//!
//! # Architecture
//!
//! Configuration is loaded from multiple sources with priority-based merging:
//!
//! ```text
//! Priority (highest to lowest):
//!
//! ┌─────────────────────────────────────────┐
//! │  1. Environment Variables (VOTO_*)      │  Runtime override
//! ├─────────────────────────────────────────┤
//! │  2. Project Config (.voto/config.toml)  │  Project-specific
//! ├─────────────────────────────────────────┤
//! │  3. Global Config (~/.voto/config.toml) │  User defaults
//! ├─────────────────────────────────────────┤
//! │  4. Default Values (compile-time)       │  Fallback
//! └─────────────────────────────────────────┘
//! ```
//!
//! Absence is never fatal: with no files, no env vars and no overrides the
//! loader returns the compiled defaults, whose empty `[connection]`
//! section selects [`ConnectionMode::Demo`].
//!
//! # Environment Variables
//!
//! | Variable | Config Field | Type |
//! |----------|--------------|------|
//! | `VOTO_BASE_URL` | `connection.base_url` | String |
//! | `VOTO_API_KEY` | `connection.api_key` | String |
//! | `VOTO_SIGN_IN_TIMEOUT_SECS` | `timeouts.sign_in_secs` | u64 |
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.voto/config.toml
//!
//! [connection]
//! base_url = "https://api.example.com"
//! api_key = "public-anon-key"
//!
//! [timeouts]
//! sign_in_secs = 15
//!
//! [textgen]
//! temperature = 0.7
//! top_k = 40
//! top_p = 0.8
//! max_output_tokens = 1024
//! ```

mod error;
mod loader;
mod resolver;
mod types;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use resolver::{ConfigResolver, NoOpResolver};
pub use types::{ConnectionConfig, ConnectionMode, TextGenConfig, TimeoutsConfig, VotoConfig};

/// Default global config directory.
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".voto")
}

/// Default global config file path.
pub fn default_config_path() -> std::path::PathBuf {
    default_config_dir().join("config.toml")
}

/// Project config directory name.
pub const PROJECT_CONFIG_DIR: &str = ".voto";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "config.toml";
