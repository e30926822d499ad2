//! Selection policies over a [`Grouping`](consensus_core::models::Grouping).

pub mod deterministic;
pub mod stochastic;

pub use deterministic::select_deterministic;
pub use stochastic::{completion_scores, select_answer, select_response, ScoredCompletion};
