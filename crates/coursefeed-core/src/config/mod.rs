//! Configuration with layered resolution.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`COURSEFEED_*`)
//! 2. Config file (`coursefeed.toml` or an explicit path)
//! 3. Compiled defaults (see [`defaults`])

pub mod compare_config;
pub mod defaults;
pub mod feed_config;
pub mod scoring_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use compare_config::CompareConfig;
pub use feed_config::FeedConfig;
pub use scoring_config::ScoringConfig;

use crate::constants::{ENV_PREFIX, MAX_RATING, MAX_REASONS};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CoursefeedConfig {
    pub scoring: ScoringConfig,
    pub feed: FeedConfig,
    pub compare: CompareConfig,
}

impl CoursefeedConfig {
    /// Load a config file, apply environment overrides, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let mut config: CoursefeedConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing sections and keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: CoursefeedConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `COURSEFEED_*` overrides from the process environment, then validate.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup, then validate.
    /// Unparseable values are ignored and the previous value is kept. Values that
    /// parse but break an invariant are rejected and leave `self` untouched.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut next = self.clone();
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(v) = var("LIMIT").and_then(|v| v.parse::<usize>().ok()) {
            next.feed.default_limit = v;
        }
        if let Some(v) = var("MAX_REASONS").and_then(|v| v.parse::<usize>().ok()) {
            next.feed.max_reasons = v;
        }
        if let Some(v) = var("HISTORY_CAPACITY").and_then(|v| v.parse::<usize>().ok()) {
            next.feed.history_capacity = v;
        }
        if let Some(v) = var("JITTER_MAX").and_then(|v| v.parse::<f64>().ok()) {
            next.feed.jitter_max = v;
        }
        if let Some(v) = var("JITTER_SEED").and_then(|v| v.parse::<u64>().ok()) {
            next.feed.jitter_seed = Some(v);
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.scoring.point_values() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: format!("scoring.{name}"),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
        }
        let rating = self.scoring.quality_min_rating;
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.quality_min_rating".to_string(),
                message: format!("must be between 0.0 and {MAX_RATING}"),
            });
        }

        if self.feed.default_limit == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "feed.default_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(1..=MAX_REASONS).contains(&self.feed.max_reasons) {
            return Err(ConfigError::ValidationFailed {
                field: "feed.max_reasons".to_string(),
                message: format!("must be between 1 and {MAX_REASONS}"),
            });
        }
        if self.feed.history_capacity == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "feed.history_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !self.feed.jitter_max.is_finite() || self.feed.jitter_max < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "feed.jitter_max".to_string(),
                message: "must be a finite, non-negative number".to_string(),
            });
        }

        let compare = [
            ("rating", self.compare.rating),
            ("price", self.compare.price),
            ("students", self.compare.students),
            ("bestseller", self.compare.bestseller),
            ("level", self.compare.level),
        ];
        for (name, value) in compare {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: format!("compare.{name}"),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
        }
        Ok(())
    }
}
