//! Configuration management for the related pages engine.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{ConfigError, Result};
use crate::core::registry::{IndexConfig, IndexRegistry};
use crate::core::types::QueryOptions;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory name under the user's config dir
pub const APP_NAME: &str = "related-pages";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub related: RelatedConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

/// Related content configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelatedConfig {
    /// Keep documents newer than the source in document-based queries
    #[serde(default = "default_include_newer")]
    pub include_newer: bool,

    /// Named indices, in registration order
    #[serde(default = "default_indices")]
    pub indices: Vec<IndexConfig>,
}

/// Content loading configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Root directory holding content files
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Index documents marked `draft = true`
    #[serde(default)]
    pub build_drafts: bool,

    /// Index documents dated in the future
    #[serde(default)]
    pub build_future: bool,

    /// Index documents past their `expiry_date`
    #[serde(default)]
    pub build_expired: bool,
}

// Default value functions
fn default_include_newer() -> bool {
    true
}

fn default_indices() -> Vec<IndexConfig> {
    vec![IndexConfig::new("keywords", 100.0)]
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_include_patterns() -> Vec<String> {
    vec!["**/*.md".to_string()]
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        "**/_*/**".to_string(),
        "**/*~".to_string(),
        "**/*.swp".to_string(),
    ]
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            include_newer: default_include_newer(),
            indices: default_indices(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
            build_drafts: false,
            build_future: false,
            build_expired: false,
        }
    }
}

impl RelatedConfig {
    /// Options applied to document-based queries
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            include_newer: self.include_newer,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ConfigError::Invalid(format!("Failed to read config file {path:?}: {e}"))
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File lookup order:
    /// 1. `explicit` path (the `--config` flag)
    /// 2. RELATED_PAGES_CONFIG env var
    /// 3. User config file (~/.config/related-pages/config.toml)
    /// 4. ./related.toml
    /// 5. Defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit {
            Self::from_file(path)?
        } else if let Ok(path) = env::var("RELATED_PAGES_CONFIG") {
            Self::from_file(path)?
        } else if let Some(user_config) = Self::user_config_file().filter(|p| p.exists()) {
            Self::from_file(user_config)?
        } else if Path::new("related.toml").exists() {
            Self::from_file("related.toml")?
        } else {
            Self::default()
        };

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Path of the per-user config file, if the platform has a config dir
    pub fn user_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(dir) = env::var("RELATED_PAGES_CONTENT_DIR") {
            self.content.content_dir = PathBuf::from(dir);
        }
        if let Ok(value) = env::var("RELATED_PAGES_INCLUDE_NEWER") {
            if let Ok(flag) = value.parse() {
                self.related.include_newer = flag;
            }
        }
        if let Ok(value) = env::var("RELATED_PAGES_BUILD_DRAFTS") {
            if let Ok(flag) = value.parse() {
                self.content.build_drafts = flag;
            }
        }
    }

    /// Build the index registry described by `[[related.indices]]`
    pub fn registry(&self) -> std::result::Result<IndexRegistry, ConfigError> {
        IndexRegistry::from_configs(self.related.indices.iter().cloned())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Index definitions must register cleanly
        self.registry()?;

        if self.content.include_patterns.is_empty() {
            return Err(ConfigError::Invalid(
                "At least one content include pattern is required".to_string(),
            )
            .into());
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Content dir: {:?}", self.content.content_dir);
        tracing::info!(
            "  Include patterns: {} patterns",
            self.content.include_patterns.len()
        );
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.content.exclude_patterns.len()
        );
        tracing::info!(
            "  Drafts/future/expired: {}/{}/{}",
            self.content.build_drafts,
            self.content.build_future,
            self.content.build_expired
        );
        tracing::info!("  Include newer: {}", self.related.include_newer);
        for index in &self.related.indices {
            tracing::info!(
                "  Index '{}': weight {}, thresholds {}..{:?}",
                index.name,
                index.weight,
                index.cardinality_threshold_low,
                index.cardinality_threshold_high
            );
        }
    }
}
