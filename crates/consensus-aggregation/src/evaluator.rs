//! Extractor and oracle pairings selected by [`EvaluatorKind`].

use consensus_core::config::{ConsensusConfig, EvaluatorKind};
use consensus_core::traits::{AnswerExtractor, EquivalenceOracle, GoldExtractor};
use consensus_equivalence::PredicateOracle;
use consensus_extraction::{BoxedExtractor, BoxedGoldExtractor, MarkerExtractor};

/// One evaluator variant: how answers are pulled out of text and how two
/// answers are compared.
pub struct Evaluator {
    kind: EvaluatorKind,
    extractor: Box<dyn AnswerExtractor>,
    oracle: Box<dyn EquivalenceOracle>,
    gold: Box<dyn GoldExtractor>,
}

impl Evaluator {
    pub fn from_config(config: &ConsensusConfig) -> Self {
        match config.extraction.effective_evaluator() {
            EvaluatorKind::Math => Self::math(config),
            EvaluatorKind::QwenMath => Self::qwen_math(config),
        }
    }

    /// "answer is" marker extraction with the LaTeX predicate.
    pub fn math(config: &ConsensusConfig) -> Self {
        Self {
            kind: EvaluatorKind::Math,
            extractor: Box::new(MarkerExtractor::new()),
            oracle: Box::new(PredicateOracle::math(&config.equivalence)),
            gold: Box::new(BoxedGoldExtractor),
        }
    }

    /// Strategy-chain extraction with numeric then LaTeX predicates.
    pub fn qwen_math(config: &ConsensusConfig) -> Self {
        Self {
            kind: EvaluatorKind::QwenMath,
            extractor: Box::new(BoxedExtractor::new(config.extraction.effective_strip_units())),
            oracle: Box::new(PredicateOracle::qwen_math(&config.equivalence)),
            gold: Box::new(BoxedGoldExtractor),
        }
    }

    pub fn kind(&self) -> EvaluatorKind {
        self.kind
    }

    pub fn extractor(&self) -> &dyn AnswerExtractor {
        self.extractor.as_ref()
    }

    pub fn oracle(&self) -> &dyn EquivalenceOracle {
        self.oracle.as_ref()
    }

    pub fn gold(&self) -> &dyn GoldExtractor {
        self.gold.as_ref()
    }

    pub fn into_parts(
        self,
    ) -> (
        Box<dyn AnswerExtractor>,
        Box<dyn EquivalenceOracle>,
        Box<dyn GoldExtractor>,
    ) {
        (self.extractor, self.oracle, self.gold)
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("kind", &self.kind)
            .field("extractor", &self.extractor.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_math() {
        let evaluator = Evaluator::from_config(&ConsensusConfig::default());
        assert_eq!(evaluator.kind(), EvaluatorKind::Math);
        assert_eq!(evaluator.extractor().name(), "marker");
    }

    #[test]
    fn qwen_math_pairs_boxed_extractor_with_numeric_oracle() {
        let config = ConsensusConfig::from_toml("[extraction]\nevaluator = \"qwen_math\"\n").unwrap();
        let evaluator = Evaluator::from_config(&config);
        assert_eq!(evaluator.kind(), EvaluatorKind::QwenMath);
        assert_eq!(evaluator.extractor().name(), "boxed");
        assert!(evaluator.oracle().equivalent(Some("50%"), Some("0.5")));
    }

    #[test]
    fn both_variants_read_gold_from_boxed() {
        let solution = r"So the total is $\boxed{12}$.";
        for evaluator in [
            Evaluator::math(&ConsensusConfig::default()),
            Evaluator::qwen_math(&ConsensusConfig::default()),
        ] {
            assert_eq!(evaluator.gold().extract_gold(solution).as_deref(), Some("12"));
        }
    }
}
