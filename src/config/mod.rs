//! Configuration module for iconr
//!
//! Manages where the icon metadata lives, default search options and the
//! scoring parameters. Configuration is stored in the user's config
//! directory (`~/.config/iconr/config.toml` on Linux) and can be overridden
//! with `ICONR_`-prefixed environment variables, using `__` for nested
//! keys (`ICONR_SCORING__NAME_WEIGHT=2.5`).

use crate::icons::DEFAULT_RECENT_COUNT;
use crate::search::{ScoringParams, SortMode};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Metadata file used when neither the command line nor the config names one
pub const DEFAULT_METADATA_FILE: &str = "metadata.json";

const fn default_recent_count() -> usize {
    DEFAULT_RECENT_COUNT
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IconrConfig {
    /// Path to the icon metadata document
    #[serde(default)]
    pub metadata_path: Option<PathBuf>,

    /// Sort mode used when none is given on the command line
    #[serde(default)]
    pub default_sort: SortMode,

    /// Result cap used when none is given on the command line
    #[serde(default)]
    pub default_limit: Option<usize>,

    /// How many icons `recent` shows by default
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Scoring weights, bonuses, penalties and thresholds
    #[serde(default)]
    pub scoring: ScoringParams,
}

impl Default for IconrConfig {
    fn default() -> Self {
        Self {
            metadata_path: None,
            default_sort: SortMode::default(),
            default_limit: None,
            recent_count: DEFAULT_RECENT_COUNT,
            quiet: false,
            scoring: ScoringParams::default(),
        }
    }
}

impl IconrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("iconr").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "writing default configuration");
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or a value has the
    /// wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix("ICONR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = %path.display(), sort = %config.default_sort, "configuration loaded");
        Ok(config)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Resolve the metadata document path
    ///
    /// The command-line override wins, then the configured path, then
    /// `metadata.json` in the current directory.
    #[must_use]
    pub fn resolve_metadata_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.metadata_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_METADATA_FILE))
    }
}
