//! # consensus-equivalence
//!
//! Decides whether two extracted answers denote the same value.
//!
//! [`PredicateOracle`] applies the fast path (trimmed, case-insensitive
//! equality) and then asks each configured [`AnswerPredicate`] in turn.
//! A predicate that fails counts as "not equivalent" and is logged.
//!
//! [`AnswerPredicate`]: consensus_core::traits::AnswerPredicate

pub mod expr;
pub mod latex;
pub mod numeric;
pub mod oracle;

pub use latex::LatexPredicate;
pub use numeric::NumericPredicate;
pub use oracle::PredicateOracle;

/// Relative closeness in the style of `isclose(a, b, rel_tol)`.
pub fn is_close(a: f64, b: f64, rel_tol: f64) -> bool {
    a == b || (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}
