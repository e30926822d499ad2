use crate::constants::ANSWER_MARKER;
use crate::errors::ExtractionError;

/// Isolates and normalizes the final answer of one completion.
pub trait AnswerExtractor: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Extract the normalized answer. Built-in extractors never fail on
    /// malformed text; they degrade to the whole text or an empty string.
    fn extract(&self, completion: &str) -> Result<String, ExtractionError>;

    /// Absent input yields no answer.
    fn extract_optional(&self, completion: Option<&str>) -> Result<Option<String>, ExtractionError> {
        completion.map(|c| self.extract(c)).transpose()
    }

    /// Whether the completion carries an explicit answer marker.
    fn validate_completion(&self, completion: &str) -> bool {
        completion.to_lowercase().contains(ANSWER_MARKER)
    }
}

/// Extracts the reference answer from a gold solution text.
pub trait GoldExtractor: Send + Sync {
    fn extract_gold(&self, solution: &str) -> Option<String>;
}
