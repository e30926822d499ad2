//! Equivalence-class grouping of completions.
//!
//! Completions are visited in input order. Each extracted answer is compared
//! against every existing group key in creation order; the first equivalent key
//! receives the completion, otherwise the answer opens a new group. Groups must
//! stay disjoint: an answer matching two keys means the oracle is not
//! transitive on this batch.

use consensus_core::errors::{AggregationError, ExtractionError};
use consensus_core::models::{AnswerGroup, Grouping};
use consensus_core::traits::{AnswerExtractor, EquivalenceOracle};
use tracing::{debug, warn};

/// Group `completions` by extracted answer.
///
/// Completions whose extraction fails or yields an empty answer are skipped and
/// recorded in [`Grouping::skipped`]. Fails with `NoValidCompletions` when no
/// group was formed.
pub fn group<S: AsRef<str>>(
    completions: &[S],
    extractor: &dyn AnswerExtractor,
    oracle: &dyn EquivalenceOracle,
    strict_disjointness: bool,
) -> Result<Grouping, AggregationError> {
    let mut grouping = Grouping {
        groups: Vec::new(),
        skipped: Vec::new(),
        total: completions.len(),
    };

    for (index, completion) in completions.iter().enumerate() {
        let completion = completion.as_ref();
        let extracted = extractor.extract(completion).and_then(|answer| {
            if answer.trim().is_empty() {
                Err(ExtractionError::EmptyAnswer { index })
            } else {
                Ok(answer)
            }
        });
        let answer = match extracted {
            Ok(answer) => answer,
            Err(e) => {
                debug!(index, extractor = extractor.name(), error = %e, "skipping completion");
                grouping.skipped.push(index);
                continue;
            }
        };

        match find_group(&grouping.groups, &answer, oracle, strict_disjointness)? {
            Some(position) => grouping.groups[position].push(completion, index),
            None => {
                debug!(index, answer = %answer, "new answer group");
                grouping.groups.push(AnswerGroup::new(answer, completion, index));
            }
        }
    }

    if grouping.is_empty() {
        return Err(AggregationError::NoValidCompletions {
            total: grouping.total,
            skipped: grouping.skipped.len(),
        });
    }
    Ok(grouping)
}

/// Position of the first group whose key is equivalent to `answer`.
/// Every key is checked so that a second match is detected.
fn find_group(
    groups: &[AnswerGroup],
    answer: &str,
    oracle: &dyn EquivalenceOracle,
    strict_disjointness: bool,
) -> Result<Option<usize>, AggregationError> {
    let mut first: Option<usize> = None;
    for (position, existing) in groups.iter().enumerate() {
        if !oracle.equivalent(Some(answer), Some(&existing.answer)) {
            continue;
        }
        let Some(first_position) = first else {
            first = Some(position);
            continue;
        };
        if strict_disjointness {
            return Err(AggregationError::OverlappingGroups {
                answer: answer.to_string(),
                first: groups[first_position].answer.clone(),
                second: existing.answer.clone(),
            });
        }
        warn!(
            answer,
            first = %groups[first_position].answer,
            second = %existing.answer,
            "answer matches more than one group, keeping the first"
        );
    }
    Ok(first)
}
