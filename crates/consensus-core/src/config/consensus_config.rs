//! Top-level consensus configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EquivalenceConfig, ExtractionConfig, SelectionConfig};
use crate::constants::CONFIG_FILENAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CONSENSUS_*`)
/// 2. Project config (`consensus.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConsensusConfig {
    pub extraction: ExtractionConfig,
    pub equivalence: EquivalenceConfig,
    pub selection: SelectionConfig,
}

impl ConsensusConfig {
    /// Load configuration with layered resolution from `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing and embedding).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ConsensusConfig) -> Result<(), ConfigError> {
        if let Some(tolerance) = config.equivalence.numeric_tolerance {
            if !tolerance.is_finite() || tolerance <= 0.0 || tolerance >= 1.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "equivalence.numeric_tolerance".to_string(),
                    message: "must be a finite value in (0.0, 1.0)".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "<root>".to_string(),
            message: e.to_string(),
        })
    }

    fn merge_toml_file(config: &mut ConsensusConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let file_config: ConsensusConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut ConsensusConfig, other: &ConsensusConfig) {
        // Extraction
        if other.extraction.evaluator.is_some() {
            base.extraction.evaluator = other.extraction.evaluator;
        }
        if other.extraction.strip_units.is_some() {
            base.extraction.strip_units = other.extraction.strip_units;
        }

        // Equivalence
        if other.equivalence.numeric_tolerance.is_some() {
            base.equivalence.numeric_tolerance = other.equivalence.numeric_tolerance;
        }
        if other.equivalence.include_percentage.is_some() {
            base.equivalence.include_percentage = other.equivalence.include_percentage;
        }

        // Selection
        if other.selection.strict_disjointness.is_some() {
            base.selection.strict_disjointness = other.selection.strict_disjointness;
        }
        if other.selection.score_aggregation.is_some() {
            base.selection.score_aggregation = other.selection.score_aggregation;
        }
        if other.selection.seed.is_some() {
            base.selection.seed = other.selection.seed;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CONSENSUS_EVALUATOR`, `CONSENSUS_NUMERIC_TOLERANCE`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut ConsensusConfig) {
        if let Ok(val) = std::env::var("CONSENSUS_EVALUATOR") {
            if let Ok(v) = val.parse() {
                config.extraction.evaluator = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CONSENSUS_STRIP_UNITS") {
            if let Ok(v) = val.parse::<bool>() {
                config.extraction.strip_units = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CONSENSUS_NUMERIC_TOLERANCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.equivalence.numeric_tolerance = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CONSENSUS_INCLUDE_PERCENTAGE") {
            if let Ok(v) = val.parse::<bool>() {
                config.equivalence.include_percentage = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CONSENSUS_STRICT_DISJOINTNESS") {
            if let Ok(v) = val.parse::<bool>() {
                config.selection.strict_disjointness = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CONSENSUS_SCORE_AGGREGATION") {
            if let Ok(v) = val.parse() {
                config.selection.score_aggregation = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CONSENSUS_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.selection.seed = Some(v);
            }
        }
    }
}
