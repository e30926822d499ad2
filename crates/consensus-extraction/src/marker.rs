//! "answer is" marker extraction.

use consensus_core::constants::ANSWER_MARKER;
use consensus_core::errors::ExtractionError;
use consensus_core::traits::AnswerExtractor;

/// Takes the lower-cased text after the last "answer is" marker.
///
/// The region loses one leading colon, is cut at the first ".\n" boundary,
/// and loses one trailing period. Text without a marker comes back whole
/// (lower-cased).
#[derive(Debug, Clone)]
pub struct MarkerExtractor {
    marker: String,
}

impl MarkerExtractor {
    pub fn new() -> Self {
        Self::with_marker(ANSWER_MARKER)
    }

    /// Use a different marker phrase. Matching is case-insensitive.
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into().to_lowercase(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Isolate the answer region.
    pub fn isolate(&self, text: &str) -> String {
        let text = text.to_lowercase();
        if self.marker.is_empty() || !text.contains(&self.marker) {
            return text;
        }
        let region = text.rsplit(self.marker.as_str()).next().unwrap_or_default().trim();
        let region = region.strip_prefix(':').unwrap_or(region).trim();
        let region = region.split(".\n").next().unwrap_or_default().trim();
        let region = region.strip_suffix('.').unwrap_or(region);
        region.trim().to_string()
    }
}

impl Default for MarkerExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerExtractor for MarkerExtractor {
    fn name(&self) -> &str {
        "marker"
    }

    fn extract(&self, completion: &str) -> Result<String, ExtractionError> {
        Ok(self.isolate(completion))
    }

    fn validate_completion(&self, completion: &str) -> bool {
        completion.to_lowercase().contains(&self.marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_region_after_last_marker() {
        let extractor = MarkerExtractor::new();
        let text = "First the answer is 3, but on reflection The Answer Is: 42.";
        assert_eq!(extractor.isolate(text), "42");
    }

    #[test]
    fn cuts_at_period_newline_boundary() {
        let extractor = MarkerExtractor::new();
        let text = "So the answer is 7.\nThis follows from step 2.";
        assert_eq!(extractor.isolate(text), "7");
    }

    #[test]
    fn keeps_decimal_points() {
        let extractor = MarkerExtractor::new();
        assert_eq!(extractor.isolate("the answer is 4.0"), "4.0");
        assert_eq!(extractor.isolate("the answer is 2.5."), "2.5");
    }

    #[test]
    fn missing_marker_returns_lowercased_text() {
        let extractor = MarkerExtractor::new();
        assert_eq!(extractor.isolate("No Marker Here"), "no marker here");
    }

    #[test]
    fn empty_region_is_empty() {
        let extractor = MarkerExtractor::new();
        assert_eq!(extractor.isolate("the answer is"), "");
        assert_eq!(extractor.isolate(""), "");
    }

    #[test]
    fn absent_completion_yields_none() {
        let extractor = MarkerExtractor::new();
        assert_eq!(extractor.extract_optional(None).unwrap(), None);
        assert_eq!(
            extractor.extract_optional(Some("the answer is 9")).unwrap(),
            Some("9".to_string())
        );
    }

    #[test]
    fn validation_is_case_insensitive() {
        let extractor = MarkerExtractor::new();
        assert!(extractor.validate_completion("THE ANSWER IS 5"));
        assert!(!extractor.validate_completion("result: 5"));
    }
}
