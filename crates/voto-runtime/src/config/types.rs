//! Configuration types.
//!
//! All types implement [`Default`] for compile-time fallback values.

use crate::textgen::GenerationParams;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Main configuration structure.
///
/// This is the unified configuration after merging all layers.
///
/// # Serialization
///
/// Serializes to TOML for file storage. Every section is optional in the
/// file; missing sections keep their defaults.
///
/// # Example
///
/// ```
/// use voto_runtime::config::{ConnectionMode, VotoConfig};
///
/// let config = VotoConfig::default();
/// assert_eq!(config.connection.mode(), ConnectionMode::Demo);
/// assert_eq!(config.timeouts.sign_in_secs, 15);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VotoConfig {
    /// Backend connection settings.
    pub connection: ConnectionConfig,

    /// Timeout settings.
    pub timeouts: TimeoutsConfig,

    /// Text generation settings.
    pub textgen: TextGenConfig,
}

impl VotoConfig {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes to TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserializes from TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Merges another config into this one.
    ///
    /// Values from `other` override values in `self` only if they
    /// differ from the default. This enables layered configuration.
    pub fn merge(&mut self, other: &Self) {
        self.connection.merge(&other.connection);
        self.timeouts.merge(&other.timeouts);
        self.textgen.merge(&other.textgen);
    }
}

/// Backend connection settings.
///
/// Both values are required for [`ConnectionMode::Production`]; leaving
/// either empty selects [`ConnectionMode::Demo`], in which the identity
/// provider is never contacted and the session stays anonymous.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Backend service base URL.
    pub base_url: String,

    /// Public API key for the backend service.
    pub api_key: String,
}

impl ConnectionConfig {
    /// Returns `true` when both the base URL and the API key are set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty() && !self.api_key.trim().is_empty()
    }

    /// Returns the connection mode these settings select.
    #[must_use]
    pub fn mode(&self) -> ConnectionMode {
        if self.is_configured() {
            ConnectionMode::Production
        } else {
            ConnectionMode::Demo
        }
    }

    fn merge(&mut self, other: &Self) {
        if !other.base_url.is_empty() {
            self.base_url = other.base_url.clone();
        }
        if !other.api_key.is_empty() {
            self.api_key = other.api_key.clone();
        }
    }
}

/// Timeout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimeoutsConfig {
    /// Sign-in deadline in seconds.
    pub sign_in_secs: u64,
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self { sign_in_secs: 15 }
    }
}

impl TimeoutsConfig {
    /// Returns the sign-in deadline as a [`Duration`].
    #[must_use]
    pub fn sign_in(&self) -> Duration {
        Duration::from_secs(self.sign_in_secs)
    }

    fn merge(&mut self, other: &Self) {
        let default = Self::default();

        if other.sign_in_secs != default.sign_in_secs {
            self.sign_in_secs = other.sign_in_secs;
        }
    }
}

/// Text generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextGenConfig {
    /// Sampling temperature (0.0-1.0).
    pub temperature: f32,

    /// Top-k sampling cutoff.
    pub top_k: u32,

    /// Nucleus sampling cutoff (0.0-1.0).
    pub top_p: f32,

    /// Maximum tokens to generate per call.
    pub max_output_tokens: u32,
}

impl Default for TextGenConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.8,
            max_output_tokens: 1024,
        }
    }
}

impl TextGenConfig {
    fn merge(&mut self, other: &Self) {
        let default = Self::default();

        if (other.temperature - default.temperature).abs() > f32::EPSILON {
            self.temperature = other.temperature;
        }
        if other.top_k != default.top_k {
            self.top_k = other.top_k;
        }
        if (other.top_p - default.top_p).abs() > f32::EPSILON {
            self.top_p = other.top_p;
        }
        if other.max_output_tokens != default.max_output_tokens {
            self.max_output_tokens = other.max_output_tokens;
        }
    }
}

impl From<&TextGenConfig> for GenerationParams {
    fn from(config: &TextGenConfig) -> Self {
        GenerationParams::default()
            .with_temperature(config.temperature)
            .with_top_k(config.top_k)
            .with_top_p(config.top_p)
            .with_max_output_tokens(config.max_output_tokens)
    }
}

/// How the application talks to its backend.
///
/// Derived from [`ConnectionConfig`], never set directly: a missing
/// URL/key pair degrades to demo rather than crashing at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionMode {
    /// No backend configured: in-memory data, permanently anonymous.
    Demo,

    /// Fully configured backend.
    Production,
}

impl ConnectionMode {
    /// Returns the lowercase string form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Production => "production",
        }
    }

    /// Returns `true` for demo mode.
    #[must_use]
    pub fn is_demo(&self) -> bool {
        matches!(self, Self::Demo)
    }

    /// Returns `true` for production mode.
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for ConnectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
