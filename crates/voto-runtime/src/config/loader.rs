//! Configuration loader with hierarchical merging.
//!
//! # Load Order
//!
//! 1. Default values (compile-time)
//! 2. Global config (`~/.voto/config.toml`)
//! 3. Project config (`.voto/config.toml`)
//! 4. Environment variables (`VOTO_*`)
//!
//! Each layer overrides the previous.

use super::{
    default_config_path, ConfigError, VotoConfig, PROJECT_CONFIG_DIR, PROJECT_CONFIG_FILE,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader with builder pattern.
///
/// # Example
///
/// ```ignore
/// use voto_runtime::config::ConfigLoader;
///
/// let config = ConfigLoader::new()
///     .with_project_root("/path/to/project")
///     .skip_env_vars()  // For testing
///     .load()?;
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Global config file path (defaults to ~/.voto/config.toml).
    global_config_path: Option<PathBuf>,

    /// Project root directory.
    project_root: Option<PathBuf>,

    /// Skip environment variable loading.
    skip_env: bool,

    /// Skip global config loading.
    skip_global: bool,

    /// Skip project config loading.
    skip_project: bool,
}

impl ConfigLoader {
    /// Creates a new loader with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            global_config_path: None,
            project_root: None,
            skip_env: false,
            skip_global: false,
            skip_project: false,
        }
    }

    /// Sets a custom global config path.
    #[must_use]
    pub fn with_global_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.global_config_path = Some(path.into());
        self
    }

    /// Sets the project root directory.
    ///
    /// Project config will be loaded from `<project_root>/.voto/config.toml`.
    #[must_use]
    pub fn with_project_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_root = Some(path.into());
        self
    }

    /// Skips environment variable loading.
    ///
    /// Useful for testing with deterministic config.
    #[must_use]
    pub fn skip_env_vars(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Skips global config loading.
    #[must_use]
    pub fn skip_global_config(mut self) -> Self {
        self.skip_global = true;
        self
    }

    /// Skips project config loading.
    #[must_use]
    pub fn skip_project_config(mut self) -> Self {
        self.skip_project = true;
        self
    }

    /// Loads and merges configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any config file exists but cannot be
    /// parsed, or an environment variable holds an unusable value.
    /// Missing config files are silently ignored.
    pub fn load(&self) -> Result<VotoConfig, ConfigError> {
        // Start with defaults
        let mut config = VotoConfig::default();

        // Layer 1: Global config
        if !self.skip_global {
            let global_path = self
                .global_config_path
                .clone()
                .unwrap_or_else(default_config_path);

            if let Some(global_config) = self.load_file(&global_path)? {
                debug!(path = %global_path.display(), "Loaded global config");
                config.merge(&global_config);
            }
        }

        // Layer 2: Project config
        if !self.skip_project {
            if let Some(ref project_root) = self.project_root {
                let project_config_path = project_root
                    .join(PROJECT_CONFIG_DIR)
                    .join(PROJECT_CONFIG_FILE);

                if let Some(project_config) = self.load_file(&project_config_path)? {
                    debug!(
                        path = %project_config_path.display(),
                        project = %project_root.display(),
                        "Loaded project config"
                    );
                    config.merge(&project_config);
                }
            }
        }

        // Layer 3: Environment variables
        if !self.skip_env {
            apply_env_vars(&mut config)?;
        }

        Ok(config)
    }

    /// Loads a config file, returning None if it doesn't exist.
    fn load_file(&self, path: &Path) -> Result<Option<VotoConfig>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

        let config =
            VotoConfig::from_toml(&content).map_err(|e| ConfigError::parse_toml(path, e))?;

        Ok(Some(config))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies environment variable overrides.
fn apply_env_vars(config: &mut VotoConfig) -> Result<(), ConfigError> {
    if let Ok(val) = std::env::var("VOTO_BASE_URL") {
        config.connection.base_url = val;
    }
    if let Ok(val) = std::env::var("VOTO_API_KEY") {
        config.connection.api_key = val;
    }
    if let Ok(val) = std::env::var("VOTO_SIGN_IN_TIMEOUT_SECS") {
        config.timeouts.sign_in_secs = val.parse().map_err(|_| {
            ConfigError::invalid_env_var("VOTO_SIGN_IN_TIMEOUT_SECS", "expected integer seconds")
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_config_file(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_defaults_only() {
        let config = ConfigLoader::new()
            .skip_global_config()
            .skip_project_config()
            .skip_env_vars()
            .load()
            .unwrap();

        assert_eq!(config, VotoConfig::default());
    }

    #[test]
    fn load_global_config() {
        let temp = TempDir::new().unwrap();
        let config_path = create_config_file(
            temp.path(),
            r#"
[connection]
base_url = "https://global.example.com"
api_key = "global-key"

[timeouts]
sign_in_secs = 30
"#,
        );

        let config = ConfigLoader::new()
            .with_global_config(&config_path)
            .skip_project_config()
            .skip_env_vars()
            .load()
            .unwrap();

        assert_eq!(config.connection.base_url, "https://global.example.com");
        assert_eq!(config.timeouts.sign_in_secs, 30);
    }

    #[test]
    fn load_project_overrides_global() {
        let global_temp = TempDir::new().unwrap();
        let project_temp = TempDir::new().unwrap();

        // Create .voto directory in project
        let voto_dir = project_temp.path().join(".voto");
        std::fs::create_dir_all(&voto_dir).unwrap();

        // Global config
        let global_path = create_config_file(
            global_temp.path(),
            r#"
[connection]
base_url = "https://global.example.com"
api_key = "global-key"
"#,
        );

        // Project config
        create_config_file(
            &voto_dir,
            r#"
[connection]
base_url = "https://project.example.com"
"#,
        );

        let config = ConfigLoader::new()
            .with_global_config(&global_path)
            .with_project_root(project_temp.path())
            .skip_env_vars()
            .load()
            .unwrap();

        // base_url from project (overrides global)
        assert_eq!(config.connection.base_url, "https://project.example.com");
        // api_key from global (not overridden in project)
        assert_eq!(config.connection.api_key, "global-key");
    }

    #[test]
    fn missing_config_files_ok() {
        let config = ConfigLoader::new()
            .with_global_config("/nonexistent/path/config.toml")
            .with_project_root("/nonexistent/project")
            .skip_env_vars()
            .load()
            .unwrap();

        // Should return defaults
        assert_eq!(config, VotoConfig::default());
    }

    #[test]
    fn malformed_config_file_fails() {
        let temp = TempDir::new().unwrap();
        let config_path = create_config_file(temp.path(), "this is not toml = [");

        let result = ConfigLoader::new()
            .with_global_config(&config_path)
            .skip_project_config()
            .skip_env_vars()
            .load();

        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn env_var_override() {
        // This test modifies env vars, run in isolation
        std::env::set_var("VOTO_BASE_URL", "https://env.example.com");
        std::env::set_var("VOTO_API_KEY", "env-key");
        std::env::set_var("VOTO_SIGN_IN_TIMEOUT_SECS", "5");

        let config = ConfigLoader::new()
            .skip_global_config()
            .skip_project_config()
            .load()
            .unwrap();

        assert_eq!(config.connection.base_url, "https://env.example.com");
        assert_eq!(config.connection.api_key, "env-key");
        assert_eq!(config.timeouts.sign_in_secs, 5);

        // An unparseable value is an error, not a silent default
        std::env::set_var("VOTO_SIGN_IN_TIMEOUT_SECS", "soon");
        let result = ConfigLoader::new()
            .skip_global_config()
            .skip_project_config()
            .load();
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));

        // Cleanup
        std::env::remove_var("VOTO_BASE_URL");
        std::env::remove_var("VOTO_API_KEY");
        std::env::remove_var("VOTO_SIGN_IN_TIMEOUT_SECS");
    }
}
