//! # consensus-aggregation
//!
//! Groups completions into equivalence classes and picks the most
//! confident answer.
//!
//! ## Pipeline
//! 1. [`grouping::group`]: extract, then merge into disjoint classes
//! 2. [`selection::deterministic`]: majority vote or prior-weighted score
//! 3. [`selection::stochastic`]: score roll-up, top-k, weighted draw
//!
//! [`AggregationEngine`] wires an extractor and an oracle (see
//! [`evaluator`]) to the policies.

pub mod engine;
pub mod evaluator;
pub mod grouping;
pub mod sampling;
pub mod selection;

pub use engine::AggregationEngine;
pub use evaluator::Evaluator;
