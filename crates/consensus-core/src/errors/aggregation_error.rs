//! Grouping and selection errors.

use super::error_code::{self, ConsensusErrorCode};

/// Errors that can occur while grouping completions or selecting an answer.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("there are no valid completions ({skipped} of {total} failed extraction)")]
    NoValidCompletions { total: usize, skipped: usize },

    #[error("answer '{answer}' is equivalent to both '{first}' and '{second}'")]
    OverlappingGroups {
        answer: String,
        first: String,
        second: String,
    },

    #[error("expected {expected} prior weights, got {actual}")]
    WeightLengthMismatch { expected: usize, actual: usize },

    #[error("prior weight at index {index} is invalid: {value}")]
    InvalidWeight { index: usize, value: f64 },

    #[error("best score {score} is not positive")]
    NonPositiveConfidence { score: f64 },
}

impl ConsensusErrorCode for AggregationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoValidCompletions { .. } => error_code::NO_VALID_COMPLETIONS,
            Self::OverlappingGroups { .. } => error_code::OVERLAPPING_GROUPS,
            Self::WeightLengthMismatch { .. } => error_code::WEIGHT_LENGTH_MISMATCH,
            Self::InvalidWeight { .. } => error_code::INVALID_WEIGHT,
            Self::NonPositiveConfidence { .. } => error_code::NON_POSITIVE_CONFIDENCE,
        }
    }
}
