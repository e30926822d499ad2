//! Deterministic selection: majority vote, or prior-weighted group fraction.

use consensus_core::errors::AggregationError;
use consensus_core::models::{AnswerGroup, Grouping, PriorWeights, SelectionResult};

/// Pick the most confident answer of `grouping`.
///
/// Without weights the largest group wins (ties go to the group created
/// first) and confidence is `members / total`. With weights every completion
/// scores `weight[index] * group_len / total`; the highest score wins, ties
/// going to the earliest group and then the earliest member.
pub fn select_deterministic(
    grouping: &Grouping,
    weights: Option<&PriorWeights>,
) -> Result<SelectionResult, AggregationError> {
    if grouping.is_empty() || grouping.total == 0 {
        return Err(AggregationError::NoValidCompletions {
            total: grouping.total,
            skipped: grouping.skipped.len(),
        });
    }
    match weights {
        None => Ok(majority(grouping)),
        Some(weights) => weighted(grouping, weights),
    }
}

fn majority(grouping: &Grouping) -> SelectionResult {
    let mut best: &AnswerGroup = &grouping.groups[0];
    for group in &grouping.groups[1..] {
        if group.len() > best.len() {
            best = group;
        }
    }
    let confidence = best.len() as f64 / grouping.total as f64;
    let (completion, index) = best.representative().unwrap_or_default();
    SelectionResult::new(&best.answer, completion, index, confidence)
}

fn weighted(grouping: &Grouping, weights: &PriorWeights) -> Result<SelectionResult, AggregationError> {
    weights.check_len(grouping.total)?;
    weights.check_values()?;

    let total = grouping.total as f64;
    let mut best: Option<(&AnswerGroup, usize, &str, f64)> = None;
    for group in &grouping.groups {
        let fraction = group.len() as f64 / total;
        for (index, completion) in group.members() {
            let score = weights.weight(index) * fraction;
            if best.map_or(true, |(_, _, _, top)| score > top) {
                best = Some((group, index, completion, score));
            }
        }
    }

    match best {
        Some((group, index, completion, score)) if score > 0.0 => {
            Ok(SelectionResult::new(&group.answer, completion, index, score))
        }
        Some((_, _, _, score)) => Err(AggregationError::NonPositiveConfidence { score }),
        None => Err(AggregationError::NoValidCompletions {
            total: grouping.total,
            skipped: grouping.skipped.len(),
        }),
    }
}
