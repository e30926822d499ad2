use serde::{Deserialize, Serialize};

/// The selected answer, its representative completion, that completion's
/// original index, and the confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub answer: String,
    pub completion: String,
    pub index: usize,
    /// Group fraction in (0, 1] for plain majority voting; an unbounded
    /// weighted score otherwise.
    pub confidence: f64,
}

impl SelectionResult {
    pub fn new(
        answer: impl Into<String>,
        completion: impl Into<String>,
        index: usize,
        confidence: f64,
    ) -> Self {
        Self {
            answer: answer.into(),
            completion: completion.into(),
            index,
            confidence,
        }
    }

    /// Tuple view `(answer, completion, index, confidence)`.
    pub fn into_tuple(self) -> (String, String, usize, f64) {
        (self.answer, self.completion, self.index, self.confidence)
    }
}
