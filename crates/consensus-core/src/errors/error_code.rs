//! ConsensusErrorCode trait for structured error reporting.

/// Stable machine-readable codes for every error enum.
/// Lets callers tell "no valid completions" apart from a low-confidence
/// result or a contract violation without matching on messages.
pub trait ConsensusErrorCode {
    /// Returns the error code string (e.g., "NO_VALID_COMPLETIONS").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const EXTRACTION_FAILED: &str = "EXTRACTION_FAILED";
pub const EMPTY_ANSWER: &str = "EMPTY_ANSWER";
pub const PREDICATE_FAILED: &str = "PREDICATE_FAILED";
pub const NO_VALID_COMPLETIONS: &str = "NO_VALID_COMPLETIONS";
pub const OVERLAPPING_GROUPS: &str = "OVERLAPPING_GROUPS";
pub const WEIGHT_LENGTH_MISMATCH: &str = "WEIGHT_LENGTH_MISMATCH";
pub const INVALID_WEIGHT: &str = "INVALID_WEIGHT";
pub const NON_POSITIVE_CONFIDENCE: &str = "NON_POSITIVE_CONFIDENCE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
