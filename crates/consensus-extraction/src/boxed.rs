//! Strategy-chain extraction with canonicalization.

use consensus_core::errors::ExtractionError;
use consensus_core::traits::AnswerExtractor;
use tracing::trace;

use crate::canonical::canonicalize;
use crate::strategies::{self, STEP_TAG};

/// Runs the [`strategies::CHAIN`] and normalizes the winning region.
#[derive(Debug, Clone)]
pub struct BoxedExtractor {
    strip_units: bool,
}

impl BoxedExtractor {
    pub fn new(strip_units: bool) -> Self {
        Self { strip_units }
    }

    pub fn strip_units(&self) -> bool {
        self.strip_units
    }

    /// Isolate, trim delimiters, and canonicalize.
    pub fn isolate(&self, text: &str) -> String {
        let cleaned = text.replace(STEP_TAG, "");
        let (strategy, region) = strategies::isolate(&cleaned);
        trace!(strategy, region = %region, "answer region isolated");
        normalize_region(&region, self.strip_units)
    }
}

impl Default for BoxedExtractor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AnswerExtractor for BoxedExtractor {
    fn name(&self) -> &str {
        "boxed"
    }

    fn extract(&self, completion: &str) -> Result<String, ExtractionError> {
        Ok(self.isolate(completion))
    }
}

/// Collapse line breaks with their indentation, drop one leading `:`, one
/// trailing `.` and one trailing `/`, then canonicalize.
pub fn normalize_region(region: &str, strip_units: bool) -> String {
    let mut collapsed = String::with_capacity(region.len());
    let mut chars = region.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\n' {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
        } else {
            collapsed.push(c);
        }
    }
    let s = collapsed.strip_prefix(':').unwrap_or(&collapsed);
    let s = s.strip_suffix('.').unwrap_or(s);
    let s = s.strip_suffix('/').unwrap_or(s);
    canonicalize(s, strip_units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxed_fraction_is_canonical() {
        let extractor = BoxedExtractor::default();
        let text = r"Thus the probability is $\boxed{\dfrac{1}{2}}$.";
        assert_eq!(extractor.isolate(text), r"\frac{1}{2}");
    }

    #[test]
    fn step_tags_are_ignored() {
        let extractor = BoxedExtractor::default();
        let text = "Step 1: 2 + 2 = 4 ки\nThe answer is 4 ки";
        assert_eq!(extractor.isolate(text), "4");
    }

    #[test]
    fn last_number_fallback_drops_trailing_zeros() {
        let extractor = BoxedExtractor::default();
        assert_eq!(extractor.isolate("the total comes to 1,250.00 dollars"), "1250");
    }

    #[test]
    fn no_answer_at_all_is_empty() {
        let extractor = BoxedExtractor::default();
        assert_eq!(extractor.isolate("I cannot solve this."), "");
    }

    #[test]
    fn region_normalization_strips_delimiters() {
        assert_eq!(normalize_region(": 12\n   5.", true), "125");
        assert_eq!(normalize_region("3/", true), "3");
    }

    #[test]
    fn units_follow_configuration() {
        let text = r"The final answer is 30 miles";
        assert_eq!(BoxedExtractor::new(true).isolate(text), "30");
        assert_eq!(BoxedExtractor::new(false).isolate(text), "30miles");
    }
}
