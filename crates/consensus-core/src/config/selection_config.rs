//! Grouping and selection configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// How per-completion scores roll up into a per-answer score in stochastic mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreAggregation {
    Sum,
    Mean,
}

impl std::str::FromStr for ScoreAggregation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(Self::Sum),
            "mean" => Ok(Self::Mean),
            other => Err(format!("unknown score aggregation '{other}'")),
        }
    }
}

/// Configuration for grouping and the selection policies.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SelectionConfig {
    /// Fail the batch when an answer matches two existing groups instead of
    /// keeping it in the first match. Default: false.
    pub strict_disjointness: Option<bool>,
    /// Stochastic per-answer roll-up. Default: mean.
    pub score_aggregation: Option<ScoreAggregation>,
    /// Seed for the stochastic draw. Default: seeded from entropy.
    pub seed: Option<u64>,
}

impl SelectionConfig {
    pub fn effective_strict_disjointness(&self) -> bool {
        self.strict_disjointness
            .unwrap_or(defaults::DEFAULT_STRICT_DISJOINTNESS)
    }

    pub fn effective_score_aggregation(&self) -> ScoreAggregation {
        self.score_aggregation
            .unwrap_or(defaults::DEFAULT_SCORE_AGGREGATION)
    }
}
