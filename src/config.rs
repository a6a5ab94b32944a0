//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_BASE_URL;
use crate::dashboard::{DashboardSettings, DEFAULT_TOAST_MS};
use crate::entity::{EntityKind, UnknownTab};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Dashboard presentation
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tab")]
    pub default_tab: String,

    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u64,
}

fn default_tab() -> String {
    EntityKind::Mood.tab_name().to_string()
}

fn default_toast_duration() -> u64 {
    DEFAULT_TOAST_MS
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_tab: default_tab(),
            toast_duration_ms: default_toast_duration(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        for path in Self::default_paths() {
            if path.exists() {
                match Self::load_with_env(&path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Searched in order; the first readable file wins
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("wellcheck").join("config.toml")),
            Some(PathBuf::from("/etc/wellcheck/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Dashboard settings from the `[ui]` section
    pub fn dashboard_settings(&self) -> Result<DashboardSettings, UnknownTab> {
        Ok(DashboardSettings {
            default_tab: EntityKind::from_tab_name(&self.ui.default_tab)?,
            toast_lifetime_ms: self.ui.toast_duration_ms,
        })
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("WELLCHECK_API_URL") {
            self.api.base_url = url;
        }
        if let Some(tab) = var("WELLCHECK_DEFAULT_TAB") {
            self.ui.default_tab = tab;
        }
        if let Some(level) = var("WELLCHECK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("WELLCHECK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# Wellcheck Configuration
#
# Environment variables override these settings:
# - WELLCHECK_API_URL
# - WELLCHECK_DEFAULT_TAB
# - WELLCHECK_LOG_LEVEL
# - WELLCHECK_LOG_FORMAT

[api]
# Origin of the wellness backend
base_url = "{base_url}"

[ui]
# Tab shown after startup: mood, journal, activities, goals
default_tab = "mood"

# How long toasts stay visible (ms)
toast_duration_ms = {toast_ms}

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        base_url = DEFAULT_BASE_URL,
        toast_ms = DEFAULT_TOAST_MS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config(), Path::new("generated")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.ui.default_tab, "mood");
        assert_eq!(config.ui.toast_duration_ms, 5000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\ndefault_tab = \"goals\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.ui.default_tab, "goals");
        assert_eq!(config.ui.toast_duration_ms, 5000);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);

        let settings = config.dashboard_settings().unwrap();
        assert_eq!(settings.default_tab, EntityKind::Goal);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = 3").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("WELLCHECK_API_URL", "http://wellness.local:9000"),
            ("WELLCHECK_DEFAULT_TAB", "journal"),
            ("WELLCHECK_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://wellness.local:9000");
        assert_eq!(config.ui.default_tab, "journal");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_unknown_default_tab() {
        let mut config = Config::default();
        config.ui.default_tab = "settings".into();
        assert_eq!(
            config.dashboard_settings().unwrap_err(),
            UnknownTab("settings".into())
        );
    }
}
