//! Numeric equality with percentage relaxation.

use std::sync::LazyLock;

use consensus_core::config::EquivalenceConfig;
use consensus_core::errors::EquivalenceError;
use consensus_core::traits::AnswerPredicate;
use regex::Regex;

use crate::expr::evaluate;
use crate::is_close;

static THOUSANDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d{1,3}(,\d{3})+(\.\d+)?$").unwrap());

/// Compares answers that evaluate to plain numbers.
///
/// Understands thousands separators, percent suffixes, `a/b` and the LaTeX
/// arithmetic accepted by [`evaluate`]. With `include_percentage`, `b` also
/// matches `a` when `a` equals `b/100` or `b*100`. Non-numeric answers are
/// simply unequal.
#[derive(Debug, Clone)]
pub struct NumericPredicate {
    tolerance: f64,
    include_percentage: bool,
}

impl NumericPredicate {
    pub fn new(tolerance: f64, include_percentage: bool) -> Self {
        Self {
            tolerance,
            include_percentage,
        }
    }

    pub fn from_config(config: &EquivalenceConfig) -> Self {
        Self::new(
            config.effective_numeric_tolerance(),
            config.effective_include_percentage(),
        )
    }

    /// Numeric value of an answer, if it has one.
    pub fn value(&self, answer: &str) -> Result<Option<f64>, EquivalenceError> {
        let mut s = answer.trim().trim_matches('$').trim().to_string();
        if THOUSANDS_RE.is_match(&s) {
            s = s.replace(',', "");
        }
        let percent = s
            .strip_suffix(r"\%")
            .or_else(|| s.strip_suffix('%'))
            .map(str::to_string);
        match percent {
            Some(body) => Ok(evaluate(&body)?.map(|v| v / 100.0)),
            None => evaluate(&s),
        }
    }
}

impl Default for NumericPredicate {
    fn default() -> Self {
        Self::from_config(&EquivalenceConfig::default())
    }
}

impl AnswerPredicate for NumericPredicate {
    fn name(&self) -> &str {
        "numeric"
    }

    fn equal(&self, a: &str, b: &str) -> Result<bool, EquivalenceError> {
        let (Some(prediction), Some(reference)) = (self.value(a)?, self.value(b)?) else {
            return Ok(false);
        };
        let equal = if self.include_percentage {
            [reference / 100.0, reference, reference * 100.0]
                .iter()
                .any(|candidate| is_close(prediction, *candidate, self.tolerance))
        } else {
            is_close(prediction, reference, self.tolerance)
        };
        Ok(equal)
    }
}
