//! Index definition registry.
//!
//! Maps each named index ("keywords", "tags", ...) to its weight and
//! cardinality thresholds. Registration happens once per site configuration,
//! before the first build. After that the registry is only read.

use crate::core::error::ConfigError;
use crate::core::keyword::Keyword;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for one named index
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IndexConfig {
    /// Front matter key holding this index's keywords
    pub name: String,

    /// Multiplier applied to every keyword match in this index
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Keywords held by fewer documents than this are ignored when scoring
    #[serde(default)]
    pub cardinality_threshold_low: usize,

    /// Keywords held by more documents than this are ignored when scoring
    #[serde(default)]
    pub cardinality_threshold_high: Option<usize>,

    /// Lowercase values on load and at query time (never applied by the engine)
    #[serde(default)]
    pub to_lower: bool,
}

fn default_weight() -> f64 {
    1.0
}

impl IndexConfig {
    /// Index with the given weight and no cardinality thresholds
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            cardinality_threshold_low: 0,
            cardinality_threshold_high: None,
            to_lower: false,
        }
    }

    pub fn with_thresholds(mut self, low: usize, high: Option<usize>) -> Self {
        self.cardinality_threshold_low = low;
        self.cardinality_threshold_high = high;
        self
    }

    pub fn with_to_lower(mut self, to_lower: bool) -> Self {
        self.to_lower = to_lower;
        self
    }

    /// Keyword for a raw front matter or query value
    ///
    /// Trims surrounding whitespace and lowercases when `to_lower` is set.
    /// Blank values yield `None`.
    pub fn normalize(&self, value: &str) -> Option<Keyword> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else if self.to_lower {
            Some(Keyword::from(trimmed.to_lowercase()))
        } else {
            Some(Keyword::from(trimmed))
        }
    }

    /// Whether a keyword with `document_frequency` holders takes part in scoring
    pub fn admits(&self, document_frequency: usize) -> bool {
        if document_frequency < self.cardinality_threshold_low {
            return false;
        }
        match self.cardinality_threshold_high {
            Some(high) => document_frequency <= high,
            None => true,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyIndexName);
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(ConfigError::InvalidWeight {
                name: self.name.clone(),
                weight: self.weight,
            });
        }
        if let Some(high) = self.cardinality_threshold_high {
            if high < self.cardinality_threshold_low {
                return Err(ConfigError::InvalidThresholds {
                    name: self.name.clone(),
                    low: self.cardinality_threshold_low,
                    high,
                });
            }
        }
        Ok(())
    }
}

/// Registered index definitions, iterated in registration order
#[derive(Debug, Clone, Default)]
pub struct IndexRegistry {
    configs: Vec<IndexConfig>,
    positions: HashMap<String, usize>,
}

impl IndexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every config in order, stopping at the first invalid one
    pub fn from_configs<I>(configs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = IndexConfig>,
    {
        let mut registry = Self::new();
        for config in configs {
            registry.register(config)?;
        }
        Ok(registry)
    }

    /// Add an index definition
    ///
    /// Fails on a blank or already registered name, a non-positive weight, or
    /// a high threshold below the low one.
    pub fn register(&mut self, config: IndexConfig) -> Result<(), ConfigError> {
        config.validate()?;
        if self.positions.contains_key(&config.name) {
            return Err(ConfigError::DuplicateIndex(config.name));
        }

        tracing::debug!(
            "Registered index '{}' (weight {}, thresholds {}..{:?})",
            config.name,
            config.weight,
            config.cardinality_threshold_low,
            config.cardinality_threshold_high
        );

        self.positions.insert(config.name.clone(), self.configs.len());
        self.configs.push(config);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Option<&IndexConfig> {
        self.position(name).map(|pos| &self.configs[pos])
    }

    /// Registration slot of `name`, shared with the snapshot's index vector
    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.configs.iter().map(|c| c.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexConfig> {
        self.configs.iter()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
