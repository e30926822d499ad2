//! Answer extraction configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Which evaluator pairing (extractor + oracle) to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    /// "answer is" marker extraction, LaTeX predicate only.
    Math,
    /// Boxed/marker/last-number strategy chain with canonicalization,
    /// numeric predicate then LaTeX predicate.
    QwenMath,
}

impl std::str::FromStr for EvaluatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "math" => Ok(Self::Math),
            "qwen_math" | "qwen-math" | "qwen" => Ok(Self::QwenMath),
            other => Err(format!("unknown evaluator '{other}'")),
        }
    }
}

/// Configuration for the extraction subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Evaluator pairing. Default: math.
    pub evaluator: Option<EvaluatorKind>,
    /// Strip unit words during canonicalization. Default: true.
    pub strip_units: Option<bool>,
}

impl ExtractionConfig {
    /// Returns the effective evaluator, defaulting to `math`.
    pub fn effective_evaluator(&self) -> EvaluatorKind {
        self.evaluator.unwrap_or(defaults::DEFAULT_EVALUATOR)
    }

    /// Returns whether unit words are stripped, defaulting to true.
    pub fn effective_strip_units(&self) -> bool {
        self.strip_units.unwrap_or(defaults::DEFAULT_STRIP_UNITS)
    }
}
