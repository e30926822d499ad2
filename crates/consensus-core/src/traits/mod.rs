//! Seams between the engine and its collaborators.

pub mod extractor;
pub mod oracle;
pub mod predicate;

pub use extractor::{AnswerExtractor, GoldExtractor};
pub use oracle::EquivalenceOracle;
pub use predicate::AnswerPredicate;
