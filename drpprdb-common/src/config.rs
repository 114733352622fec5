//! Configuration loading and dataset resolution
//!
//! The dataset is chosen with the following priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file (`dataset_path`)
//! 4. Embedded dataset compiled into the library (fallback)
//!
//! A missing config file is not an error: defaults apply and startup
//! continues.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::query::DEFAULT_RELATED_COUNT;
use crate::{Error, Result};

/// Environment variable naming a dataset file
pub const DATASET_ENV_VAR: &str = "DRPPRDB_DATASET";

/// Where the flavor dataset comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Embedded,
    File(PathBuf),
}

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    /// Dataset file to load instead of the embedded one
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// Related flavors shown on the detail view
    #[serde(default = "default_related_count")]
    pub related_count: usize,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_related_count() -> usize {
    DEFAULT_RELATED_COUNT
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            related_count: default_related_count(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl TomlConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load the platform config file, falling back to defaults
    ///
    /// This runs before logging is initialised, so a config file that exists
    /// but cannot be read or parsed is handed back as the second element for
    /// the caller to report once a subscriber is installed.
    pub fn discover() -> (Self, Option<Error>) {
        match default_config_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(_) => (Self::default(), None),
        }
    }

    /// Load `path`, or defaults plus the load error
    pub fn load_or_default(path: &Path) -> (Self, Option<Error>) {
        match Self::load(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

/// Resolve the dataset source by priority
pub fn resolve_dataset(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    config: &TomlConfig,
) -> DatasetSource {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return DatasetSource::File(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return DatasetSource::File(PathBuf::from(path));
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = &config.dataset_path {
        return DatasetSource::File(path.clone());
    }

    // Priority 4: compiled-in dataset
    DatasetSource::Embedded
}

/// Get default configuration file path for the platform
pub fn default_config_path() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/drpprdb/config.toml first, then /etc/drpprdb/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("drpprdb").join("config.toml"));
        let system_config = PathBuf::from("/etc/drpprdb/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    }

    let config_path = dirs::config_dir()
        .map(|d| d.join("drpprdb").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if config_path.exists() {
        Ok(config_path)
    } else {
        Err(Error::Config(format!(
            "Config file not found: {}",
            config_path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TomlConfig::default();
        assert!(config.dataset_path.is_none());
        assert_eq!(config.related_count, 4);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = TomlConfig::from_toml_str("related_count = 6\n").unwrap();
        assert_eq!(config.related_count, 6);
        assert_eq!(config.logging.level, "warn");

        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.related_count, 4);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("related_count = \"many\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_cli_arg_wins() {
        let config = TomlConfig {
            dataset_path: Some(PathBuf::from("/from/toml.json")),
            ..TomlConfig::default()
        };
        let source = resolve_dataset(
            Some(Path::new("/from/cli.json")),
            "DRPPRDB_TEST_UNSET_VAR",
            &config,
        );
        assert_eq!(source, DatasetSource::File(PathBuf::from("/from/cli.json")));
    }

    #[test]
    fn test_toml_used_without_cli_or_env() {
        let config = TomlConfig {
            dataset_path: Some(PathBuf::from("/from/toml.json")),
            ..TomlConfig::default()
        };
        let source = resolve_dataset(None, "DRPPRDB_TEST_UNSET_VAR", &config);
        assert_eq!(source, DatasetSource::File(PathBuf::from("/from/toml.json")));
    }

    #[test]
    fn test_embedded_fallback() {
        let source = resolve_dataset(None, "DRPPRDB_TEST_UNSET_VAR", &TomlConfig::default());
        assert_eq!(source, DatasetSource::Embedded);
    }
}
