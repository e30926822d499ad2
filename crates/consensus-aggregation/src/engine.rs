//! AggregationEngine: grouping plus the three selection entry points.

use std::path::Path;

use consensus_core::constants::VERSION;
use consensus_core::errors::ConsensusResult;
use consensus_core::models::{Grouping, PriorWeights, SelectionResult};
use consensus_core::traits::{AnswerExtractor, EquivalenceOracle, GoldExtractor};
use consensus_core::ConsensusConfig;
use consensus_extraction::BoxedGoldExtractor;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::evaluator::Evaluator;
use crate::grouping;
use crate::selection::{select_answer, select_deterministic, select_response};

/// Picks the most confident answer among sampled completions.
///
/// Every entry point takes the completions and optional prior weights aligned
/// with them by index. An empty completion list yields `Ok(None)`; a list in
/// which nothing could be extracted yields `NoValidCompletions`.
pub struct AggregationEngine {
    extractor: Box<dyn AnswerExtractor>,
    oracle: Box<dyn EquivalenceOracle>,
    gold: Box<dyn GoldExtractor>,
    config: ConsensusConfig,
    /// Source for the stochastic draws.
    rng: StdRng,
}

impl AggregationEngine {
    /// Build the evaluator named by `config`.
    pub fn new(config: ConsensusConfig) -> Self {
        let (extractor, oracle, gold) = Evaluator::from_config(&config).into_parts();
        Self::assemble(extractor, oracle, gold, config)
    }

    /// Resolve configuration under `root` and build the engine.
    pub fn load(root: &Path) -> ConsensusResult<Self> {
        let config = ConsensusConfig::load(root)?;
        Ok(Self::new(config))
    }

    /// Use a caller-provided extractor and oracle.
    pub fn with_parts(
        extractor: Box<dyn AnswerExtractor>,
        oracle: Box<dyn EquivalenceOracle>,
        config: ConsensusConfig,
    ) -> Self {
        Self::assemble(extractor, oracle, Box::new(BoxedGoldExtractor), config)
    }

    fn assemble(
        extractor: Box<dyn AnswerExtractor>,
        oracle: Box<dyn EquivalenceOracle>,
        gold: Box<dyn GoldExtractor>,
        config: ConsensusConfig,
    ) -> Self {
        let rng = match config.selection.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        info!(
            version = VERSION,
            extractor = extractor.name(),
            evaluator = ?config.extraction.effective_evaluator(),
            seeded = config.selection.seed.is_some(),
            "aggregation engine ready"
        );
        Self {
            extractor,
            oracle,
            gold,
            config,
            rng,
        }
    }

    pub fn config(&self) -> &ConsensusConfig {
        &self.config
    }

    /// Restart the stochastic draws from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Whether the completion carries an explicit answer marker.
    pub fn validate_completion(&self, completion: &str) -> bool {
        self.extractor.validate_completion(completion)
    }

    pub fn extract_answer(&self, completion: &str) -> ConsensusResult<String> {
        Ok(self.extractor.extract(completion)?)
    }

    pub fn extract_gold(&self, solution: &str) -> Option<String> {
        self.gold.extract_gold(solution)
    }

    pub fn check_answers_equiv(&self, a: Option<&str>, b: Option<&str>) -> bool {
        self.oracle.equivalent(a, b)
    }

    /// Group completions into disjoint equivalence classes.
    pub fn group<S: AsRef<str>>(&self, completions: &[S]) -> ConsensusResult<Grouping> {
        Ok(grouping::group(
            completions,
            self.extractor.as_ref(),
            self.oracle.as_ref(),
            self.config.selection.effective_strict_disjointness(),
        )?)
    }

    /// Majority vote, or the prior-weighted group fraction when weights are given.
    pub fn find_most_confident_answer<S: AsRef<str>>(
        &self,
        completions: &[S],
        prior_weights: Option<&[f64]>,
    ) -> ConsensusResult<Option<SelectionResult>> {
        let Some((grouping, weights)) = self.prepare(completions, prior_weights)? else {
            return Ok(None);
        };
        let result = select_deterministic(&grouping, weights.as_ref())?;
        log_selection("deterministic", &grouping, &result);
        Ok(Some(result))
    }

    /// Draw among the top-scored completions; confidence is the completion's
    /// own `weight * group_len` score.
    pub fn stochastic_find_most_confident_answer<S: AsRef<str>>(
        &mut self,
        completions: &[S],
        prior_weights: Option<&[f64]>,
    ) -> ConsensusResult<Option<SelectionResult>> {
        let Some((grouping, weights)) = self.prepare(completions, prior_weights)? else {
            return Ok(None);
        };
        let result = select_response(&grouping, weights.as_ref(), &mut self.rng)?;
        log_selection("stochastic_response", &grouping, &result);
        Ok(Some(result))
    }

    /// Draw among the top-scored answers, rolled up per the configured
    /// score aggregation.
    pub fn stochastic_select_answer<S: AsRef<str>>(
        &mut self,
        completions: &[S],
        prior_weights: Option<&[f64]>,
    ) -> ConsensusResult<Option<SelectionResult>> {
        let Some((grouping, weights)) = self.prepare(completions, prior_weights)? else {
            return Ok(None);
        };
        let aggregation = self.config.selection.effective_score_aggregation();
        let result = select_answer(&grouping, weights.as_ref(), aggregation, &mut self.rng)?;
        log_selection("stochastic_answer", &grouping, &result);
        Ok(Some(result))
    }

    /// Length-check the weights, then group. `None` for an empty input.
    fn prepare<S: AsRef<str>>(
        &self,
        completions: &[S],
        prior_weights: Option<&[f64]>,
    ) -> ConsensusResult<Option<(Grouping, Option<PriorWeights>)>> {
        if completions.is_empty() {
            return Ok(None);
        }
        let weights = prior_weights.map(PriorWeights::from);
        if let Some(weights) = &weights {
            weights.check_len(completions.len())?;
        }
        let grouping = self.group(completions)?;
        Ok(Some((grouping, weights)))
    }
}

fn log_selection(policy: &str, grouping: &Grouping, result: &SelectionResult) {
    info!(
        policy,
        answer = %result.answer,
        index = result.index,
        confidence = result.confidence,
        groups = grouping.groups.len(),
        skipped = grouping.skipped.len(),
        "selected answer"
    );
}

impl std::fmt::Debug for AggregationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregationEngine")
            .field("extractor", &self.extractor.name())
            .field("config", &self.config)
            .finish()
    }
}
