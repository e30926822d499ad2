//! Extraction errors.

use super::error_code::{self, ConsensusErrorCode};

/// Errors raised while isolating an answer from a completion.
/// The grouper treats every variant as "skip this completion".
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("no answer could be extracted from completion {index}")]
    EmptyAnswer { index: usize },

    #[error("extractor {extractor} failed: {reason}")]
    Failed { extractor: String, reason: String },
}

impl ConsensusErrorCode for ExtractionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyAnswer { .. } => error_code::EMPTY_ANSWER,
            Self::Failed { .. } => error_code::EXTRACTION_FAILED,
        }
    }
}
