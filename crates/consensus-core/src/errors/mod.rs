//! Error handling for the consensus engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod aggregation_error;
pub mod config_error;
pub mod equivalence_error;
pub mod error_code;
pub mod extraction_error;

pub use aggregation_error::AggregationError;
pub use config_error::ConfigError;
pub use equivalence_error::EquivalenceError;
pub use error_code::ConsensusErrorCode;
pub use extraction_error::ExtractionError;

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ConsensusError {
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Equivalence error: {0}")]
    Equivalence(#[from] EquivalenceError),

    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ConsensusErrorCode for ConsensusError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Extraction(e) => e.error_code(),
            Self::Equivalence(e) => e.error_code(),
            Self::Aggregation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type ConsensusResult<T> = Result<T, ConsensusError>;
