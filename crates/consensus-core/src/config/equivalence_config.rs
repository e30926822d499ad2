//! Equivalence predicate configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for the semantic predicates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EquivalenceConfig {
    /// Relative tolerance for numeric comparison. Default: 1e-4.
    pub numeric_tolerance: Option<f64>,
    /// Treat `x`, `x/100` and `x*100` as candidates for a match. Default: true.
    pub include_percentage: Option<bool>,
}

impl EquivalenceConfig {
    pub fn effective_numeric_tolerance(&self) -> f64 {
        self.numeric_tolerance
            .unwrap_or(defaults::DEFAULT_NUMERIC_TOLERANCE)
    }

    pub fn effective_include_percentage(&self) -> bool {
        self.include_percentage
            .unwrap_or(defaults::DEFAULT_INCLUDE_PERCENTAGE)
    }
}
