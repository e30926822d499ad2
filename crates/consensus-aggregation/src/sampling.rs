//! Weighted random draw over candidate scores.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tracing::debug;

/// Which branch produced a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawBranch {
    /// Probability proportional to the score.
    Weighted,
    /// Every candidate equally likely.
    Uniform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    pub position: usize,
    pub branch: DrawBranch,
}

/// Draw one position from `scores`, treated as unnormalized weights.
///
/// The uniform branch is taken when any score is negative or non-finite or
/// the scores sum to zero. Returns `None` only for an empty slice.
pub fn weighted_choice<R: Rng>(scores: &[f64], rng: &mut R) -> Option<Draw> {
    if scores.is_empty() {
        return None;
    }

    let usable = scores.iter().all(|s| s.is_finite() && *s >= 0.0)
        && scores.iter().sum::<f64>() > 0.0;
    if usable {
        if let Ok(dist) = WeightedIndex::new(scores) {
            return Some(Draw {
                position: dist.sample(rng),
                branch: DrawBranch::Weighted,
            });
        }
    }

    debug!(candidates = scores.len(), "degenerate scores, drawing uniformly");
    Some(Draw {
        position: rng.gen_range(0..scores.len()),
        branch: DrawBranch::Uniform,
    })
}
