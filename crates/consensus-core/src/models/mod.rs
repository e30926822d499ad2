//! Data model shared by the extraction, grouping and selection crates.

pub mod answer_group;
pub mod prior_weights;
pub mod selection_result;

pub use answer_group::{AnswerGroup, Grouping};
pub use prior_weights::PriorWeights;
pub use selection_result::SelectionResult;
