//! Configuration system for the consensus engine.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod consensus_config;
pub mod defaults;
pub mod equivalence_config;
pub mod extraction_config;
pub mod selection_config;

pub use consensus_config::ConsensusConfig;
pub use equivalence_config::EquivalenceConfig;
pub use extraction_config::{EvaluatorKind, ExtractionConfig};
pub use selection_config::{ScoreAggregation, SelectionConfig};
