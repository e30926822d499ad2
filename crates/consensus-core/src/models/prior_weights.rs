//! Per-completion prior weights, keyed by original input index.

use serde::{Deserialize, Serialize};

use crate::errors::AggregationError;

/// Weights aligned with the input completions by original index.
/// A missing vector means every completion weighs 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorWeights(Vec<f64>);

impl PriorWeights {
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    /// All-ones weights for `len` completions.
    pub fn uniform(len: usize) -> Self {
        Self(vec![1.0; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Weight of the completion at `index`; out-of-range reads as 0.
    pub fn weight(&self, index: usize) -> f64 {
        self.0.get(index).copied().unwrap_or(0.0)
    }

    /// Reject a vector that does not cover exactly `expected` completions.
    pub fn check_len(&self, expected: usize) -> Result<(), AggregationError> {
        if self.0.len() != expected {
            return Err(AggregationError::WeightLengthMismatch {
                expected,
                actual: self.0.len(),
            });
        }
        Ok(())
    }

    /// Reject negative, NaN and infinite weights.
    pub fn check_values(&self) -> Result<(), AggregationError> {
        match self
            .0
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            Some((index, &value)) => Err(AggregationError::InvalidWeight { index, value }),
            None => Ok(()),
        }
    }
}

impl From<Vec<f64>> for PriorWeights {
    fn from(weights: Vec<f64>) -> Self {
        Self(weights)
    }
}

impl From<&[f64]> for PriorWeights {
    fn from(weights: &[f64]) -> Self {
        Self(weights.to_vec())
    }
}
