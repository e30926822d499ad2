// Single source of truth for all default values.

use super::{EvaluatorKind, ScoreAggregation};

// --- Extraction ---
pub const DEFAULT_EVALUATOR: EvaluatorKind = EvaluatorKind::Math;
pub const DEFAULT_STRIP_UNITS: bool = true;

// --- Equivalence ---
pub const DEFAULT_NUMERIC_TOLERANCE: f64 = 1e-4; // relative
pub const DEFAULT_INCLUDE_PERCENTAGE: bool = true;

// --- Selection ---
pub const DEFAULT_STRICT_DISJOINTNESS: bool = false;
pub const DEFAULT_SCORE_AGGREGATION: ScoreAggregation = ScoreAggregation::Mean;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "consensus=info";
