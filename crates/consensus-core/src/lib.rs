//! # consensus-core
//!
//! Foundation crate for the answer consensus engine.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::ConsensusConfig;
pub use errors::{ConsensusError, ConsensusResult};
pub use models::{AnswerGroup, PriorWeights, SelectionResult};
pub use traits::{AnswerExtractor, AnswerPredicate, EquivalenceOracle, GoldExtractor};
