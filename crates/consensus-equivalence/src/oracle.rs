//! Predicate-chain equivalence oracle.

use consensus_core::config::EquivalenceConfig;
use consensus_core::traits::{AnswerPredicate, EquivalenceOracle};
use tracing::{trace, warn};

use crate::{LatexPredicate, NumericPredicate};

/// Fast path, then any predicate that says "equal".
pub struct PredicateOracle {
    predicates: Vec<Box<dyn AnswerPredicate>>,
}

impl PredicateOracle {
    pub fn new(predicates: Vec<Box<dyn AnswerPredicate>>) -> Self {
        Self { predicates }
    }

    /// Case-insensitive string equality only.
    pub fn exact() -> Self {
        Self::new(Vec::new())
    }

    /// LaTeX predicate only.
    pub fn math(config: &EquivalenceConfig) -> Self {
        Self::new(vec![Box::new(LatexPredicate::from_config(config))])
    }

    /// Numeric predicate, then LaTeX predicate.
    pub fn qwen_math(config: &EquivalenceConfig) -> Self {
        Self::new(vec![
            Box::new(NumericPredicate::from_config(config)),
            Box::new(LatexPredicate::from_config(config)),
        ])
    }

    pub fn with_predicate(mut self, predicate: impl AnswerPredicate + 'static) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    pub fn predicate_names(&self) -> Vec<&str> {
        self.predicates.iter().map(|p| p.name()).collect()
    }
}

impl std::fmt::Debug for PredicateOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateOracle")
            .field("predicates", &self.predicate_names())
            .finish()
    }
}

impl EquivalenceOracle for PredicateOracle {
    fn equivalent(&self, a: Option<&str>, b: Option<&str>) -> bool {
        let (Some(a), Some(b)) = (a, b) else {
            return false;
        };
        let (a, b) = (a.trim(), b.trim());
        if a.is_empty() || b.is_empty() {
            return false;
        }
        if a.to_lowercase() == b.to_lowercase() {
            return true;
        }

        self.predicates.iter().any(|predicate| match predicate.equal(a, b) {
            Ok(equal) => {
                trace!(predicate = predicate.name(), a, b, equal, "predicate result");
                equal
            }
            Err(e) => {
                warn!(predicate = predicate.name(), a, b, error = %e, "predicate failed, treating as not equivalent");
                false
            }
        })
    }
}
