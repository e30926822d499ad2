//! Semantic predicate errors.

use super::error_code::{self, ConsensusErrorCode};

/// Errors a semantic-equality predicate may raise.
/// The oracle never propagates these: a failing predicate counts as "not equivalent".
#[derive(Debug, thiserror::Error)]
pub enum EquivalenceError {
    #[error("division by zero while evaluating '{expression}'")]
    DivisionByZero { expression: String },

    #[error("malformed expression '{expression}': {reason}")]
    MalformedExpression { expression: String, reason: String },

    #[error("predicate {predicate} failed: {reason}")]
    PredicateFailed { predicate: String, reason: String },
}

impl ConsensusErrorCode for EquivalenceError {
    fn error_code(&self) -> &'static str {
        error_code::PREDICATE_FAILED
    }
}
