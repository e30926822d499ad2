//! # consensus-extraction
//!
//! Isolates the final answer of a completion and normalizes it.
//!
//! ## Extractors
//! - [`MarkerExtractor`]: text after the last "answer is" marker
//! - [`BoxedExtractor`]: ordered strategy chain (boxed, Minerva, markers,
//!   CJK marker, last number) followed by canonicalization
//! - [`BoxedGoldExtractor`]: last `\boxed{...}` of a reference solution

pub mod boxed;
pub mod braces;
pub mod canonical;
pub mod gold;
pub mod marker;
pub mod number;
pub mod strategies;

pub use boxed::BoxedExtractor;
pub use canonical::canonicalize;
pub use gold::BoxedGoldExtractor;
pub use marker::MarkerExtractor;
pub use number::is_number;
