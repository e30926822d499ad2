//! Stochastic selection: score roll-up, top-k cut, weighted draw.
//!
//! A completion scores `weight * group_len`, with weight 1 when no priors are
//! given. Invalid weights are not rejected here; they poison the scores and
//! push the draw onto its uniform branch.

use std::cmp::Ordering;

use consensus_core::config::ScoreAggregation;
use consensus_core::constants::STOCHASTIC_CANDIDATES;
use consensus_core::errors::AggregationError;
use consensus_core::models::{Grouping, PriorWeights, SelectionResult};
use rand::Rng;
use tracing::{debug, warn};

use crate::sampling::{weighted_choice, DrawBranch};

/// Score of one grouped completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCompletion {
    /// Position of the completion's group in creation order.
    pub group: usize,
    /// Original input index of the completion.
    pub index: usize,
    pub score: f64,
}

/// Score every grouped completion, in group then input order.
pub fn completion_scores(
    grouping: &Grouping,
    weights: Option<&PriorWeights>,
) -> Result<Vec<ScoredCompletion>, AggregationError> {
    if let Some(weights) = weights {
        weights.check_len(grouping.total)?;
    }
    let scores = grouping
        .groups
        .iter()
        .enumerate()
        .flat_map(move |(group, answer_group)| {
            let size = answer_group.len() as f64;
            answer_group.indices.iter().map(move |&index| {
                let weight = weights.map_or(1.0, |w| w.weight(index));
                ScoredCompletion {
                    group,
                    index,
                    score: weight * size,
                }
            })
        })
        .collect();
    Ok(scores)
}

/// Draw a single completion among the top-scored ones.
///
/// Returns the completion's answer, the completion, its original index and
/// its own score.
pub fn select_response<R: Rng>(
    grouping: &Grouping,
    weights: Option<&PriorWeights>,
    rng: &mut R,
) -> Result<SelectionResult, AggregationError> {
    let mut scored = completion_scores(grouping, weights)?;
    scored.sort_by(|a, b| by_score_desc(a.score, b.score));
    scored.truncate(STOCHASTIC_CANDIDATES);

    let candidate_scores: Vec<f64> = scored.iter().map(|c| c.score).collect();
    let position = draw(&candidate_scores, rng, grouping)?;
    let chosen = scored[position];

    let group = &grouping.groups[chosen.group];
    let completion = group
        .members()
        .find(|(index, _)| *index == chosen.index)
        .map(|(_, completion)| completion)
        .unwrap_or_default();
    warn_if_degenerate(chosen.score);
    Ok(SelectionResult::new(&group.answer, completion, chosen.index, chosen.score))
}

/// Draw an answer among the top-scored ones, scoring each answer by the sum or
/// mean of its completions' scores.
///
/// Returns the answer, its first completion, that completion's original index
/// and the answer's aggregate score.
pub fn select_answer<R: Rng>(
    grouping: &Grouping,
    weights: Option<&PriorWeights>,
    aggregation: ScoreAggregation,
    rng: &mut R,
) -> Result<SelectionResult, AggregationError> {
    let scored = completion_scores(grouping, weights)?;

    let mut sums = vec![0.0; grouping.groups.len()];
    for completion in &scored {
        sums[completion.group] += completion.score;
    }
    let mut answers: Vec<(usize, f64)> = sums
        .into_iter()
        .enumerate()
        .map(|(group, sum)| {
            let score = match aggregation {
                ScoreAggregation::Sum => sum,
                ScoreAggregation::Mean => sum / grouping.groups[group].len() as f64,
            };
            (group, score)
        })
        .collect();
    answers.sort_by(|a, b| by_score_desc(a.1, b.1));
    answers.truncate(STOCHASTIC_CANDIDATES);

    let candidate_scores: Vec<f64> = answers.iter().map(|(_, score)| *score).collect();
    let position = draw(&candidate_scores, rng, grouping)?;
    let (group_position, score) = answers[position];

    let group = &grouping.groups[group_position];
    let (completion, index) = group.representative().unwrap_or_default();
    warn_if_degenerate(score);
    Ok(SelectionResult::new(&group.answer, completion, index, score))
}

/// Descending by score, NaN last; stable sorts keep encounter order on ties.
fn by_score_desc(a: f64, b: f64) -> Ordering {
    let key = |s: f64| if s.is_nan() { f64::NEG_INFINITY } else { s };
    key(b).total_cmp(&key(a))
}

fn draw<R: Rng>(scores: &[f64], rng: &mut R, grouping: &Grouping) -> Result<usize, AggregationError> {
    let draw = weighted_choice(scores, rng).ok_or(AggregationError::NoValidCompletions {
        total: grouping.total,
        skipped: grouping.skipped.len(),
    })?;
    debug!(
        candidates = scores.len(),
        position = draw.position,
        uniform = draw.branch == DrawBranch::Uniform,
        "stochastic draw"
    );
    Ok(draw.position)
}

fn warn_if_degenerate(score: f64) {
    if score.is_nan() || score <= 0.0 {
        warn!(score, "stochastic selection returned a non-positive confidence");
    }
}

#[cfg(test)]
mod tests {
    use consensus_core::models::AnswerGroup;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    /// Groups {0, 1} -> "4" and {2} -> "5".
    fn four_four_five() -> Grouping {
        let mut four = AnswerGroup::new("4", "c0", 0);
        four.push("c1", 1);
        Grouping {
            groups: vec![four, AnswerGroup::new("5", "c2", 2)],
            skipped: Vec::new(),
            total: 3,
        }
    }

    #[test]
    fn completion_score_is_weight_times_group_size() {
        let weights = PriorWeights::new(vec![0.5, 1.0, 3.0]);
        let scores = completion_scores(&four_four_five(), Some(&weights)).unwrap();
        let flat: Vec<_> = scores.iter().map(|s| (s.group, s.index, s.score)).collect();
        assert_eq!(flat, vec![(0, 0, 1.0), (0, 1, 2.0), (1, 2, 3.0)]);
    }

    #[test]
    fn missing_weights_count_as_one() {
        let scores = completion_scores(&four_four_five(), None).unwrap();
        assert!(scores.iter().take(2).all(|s| s.score == 2.0));
        assert_eq!(scores[2].score, 1.0);
    }

    #[test]
    fn weight_length_mismatch_is_rejected() {
        let weights = PriorWeights::new(vec![1.0]);
        assert!(matches!(
            completion_scores(&four_four_five(), Some(&weights)),
            Err(AggregationError::WeightLengthMismatch { expected: 3, actual: 1 })
        ));
    }

    #[test]
    fn sum_and_mean_roll_ups() {
        let mut rng = StdRng::seed_from_u64(3);
        let grouping = four_four_five();

        let sum = select_answer(&grouping, None, ScoreAggregation::Sum, &mut rng).unwrap();
        assert_eq!(sum.answer, "4");
        assert_eq!(sum.index, 0);
        assert_eq!(sum.confidence, 4.0);

        let mean = select_answer(&grouping, None, ScoreAggregation::Mean, &mut rng).unwrap();
        assert_eq!(mean.answer, "4");
        assert_eq!(mean.confidence, 2.0);
    }

    #[test]
    fn heavy_prior_wins_the_answer_draw() {
        let mut rng = StdRng::seed_from_u64(3);
        let weights = PriorWeights::new(vec![0.1, 0.1, 0.9]);
        let result =
            select_answer(&four_four_five(), Some(&weights), ScoreAggregation::Mean, &mut rng).unwrap();
        // "4": mean(0.2, 0.2) = 0.2; "5": 0.9.
        assert_eq!(result.answer, "5");
        assert_eq!(result.completion, "c2");
        assert_eq!(result.index, 2);
        assert!((result.confidence - 0.9).abs() < 1e-12);
    }

    #[test]
    fn response_draw_returns_the_completion_score() {
        let mut rng = StdRng::seed_from_u64(3);
        let weights = PriorWeights::new(vec![0.5, 1.0, 0.1]);
        let result = select_response(&four_four_five(), Some(&weights), &mut rng).unwrap();
        assert_eq!(result.answer, "4");
        assert_eq!(result.completion, "c1");
        assert_eq!(result.index, 1);
        assert_eq!(result.confidence, 2.0);
    }

    #[test]
    fn ties_keep_creation_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let grouping = Grouping {
            groups: vec![AnswerGroup::new("a", "c0", 0), AnswerGroup::new("b", "c1", 1)],
            skipped: Vec::new(),
            total: 2,
        };
        let result = select_answer(&grouping, None, ScoreAggregation::Sum, &mut rng).unwrap();
        assert_eq!(result.answer, "a");
    }

    #[test]
    fn zero_weights_still_select_with_zero_confidence() {
        let mut rng = StdRng::seed_from_u64(3);
        let weights = PriorWeights::new(vec![0.0, 0.0, 0.0]);
        let result =
            select_answer(&four_four_five(), Some(&weights), ScoreAggregation::Mean, &mut rng).unwrap();
        assert_eq!(result.answer, "4");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn nan_weights_rank_last() {
        let mut rng = StdRng::seed_from_u64(3);
        let weights = PriorWeights::new(vec![f64::NAN, f64::NAN, 0.5]);
        let result =
            select_answer(&four_four_five(), Some(&weights), ScoreAggregation::Sum, &mut rng).unwrap();
        assert_eq!(result.answer, "5");
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let grouping = four_four_five();
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            select_response(&grouping, None, &mut rng).unwrap()
        };
        assert_eq!(run(11), run(11));
    }
}
