//! Symbolic-ish equality over normalized LaTeX.

use consensus_core::config::EquivalenceConfig;
use consensus_core::errors::EquivalenceError;
use consensus_core::traits::AnswerPredicate;
use consensus_extraction::braces::is_balanced;
use consensus_extraction::canonicalize;

use crate::expr::evaluate;
use crate::is_close;

const SPACING: &[&str] = &[r"\displaystyle", r"\,", r"\;", r"\:", r"\ "];

/// Tuples nested deeper than this compare unequal.
const MAX_SEQUENCE_DEPTH: usize = 32;

/// Compares two answers after LaTeX normalization.
///
/// Equal canonical strings match. Otherwise both sides are evaluated as
/// arithmetic and compared with a relative tolerance, and tuples or
/// intervals with the same brackets are compared element by element.
#[derive(Debug, Clone)]
pub struct LatexPredicate {
    tolerance: f64,
}

impl LatexPredicate {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn from_config(config: &EquivalenceConfig) -> Self {
        Self::new(config.effective_numeric_tolerance())
    }

    fn normalize(answer: &str) -> String {
        let mut s = answer.to_string();
        for token in SPACING {
            s = s.replace(token, "");
        }
        canonicalize(&s, false)
    }

    fn compare(&self, a: &str, b: &str, depth: usize) -> Result<bool, EquivalenceError> {
        if depth > MAX_SEQUENCE_DEPTH {
            return Ok(false);
        }
        let a = Self::normalize(a);
        let b = Self::normalize(b);
        if a == b {
            return Ok(true);
        }
        if let (Some(x), Some(y)) = (evaluate(&a)?, evaluate(&b)?) {
            return Ok(is_close(x, y, self.tolerance));
        }
        match (split_sequence(&a), split_sequence(&b)) {
            (Some((open_a, close_a, items_a)), Some((open_b, close_b, items_b)))
                if open_a == open_b && close_a == close_b && items_a.len() == items_b.len() =>
            {
                for (x, y) in items_a.iter().zip(&items_b) {
                    if !self.compare(x, y, depth + 1)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

impl Default for LatexPredicate {
    fn default() -> Self {
        Self::from_config(&EquivalenceConfig::default())
    }
}

impl AnswerPredicate for LatexPredicate {
    fn name(&self) -> &str {
        "latex"
    }

    fn equal(&self, a: &str, b: &str) -> Result<bool, EquivalenceError> {
        for side in [a, b] {
            if !is_balanced(side) {
                return Err(EquivalenceError::MalformedExpression {
                    expression: side.to_string(),
                    reason: "unbalanced braces".to_string(),
                });
            }
        }
        self.compare(a, b, 0)
    }
}

/// `(a, b)` / `[a, b)` -> brackets plus top-level items. Needs at least one comma.
fn split_sequence(s: &str) -> Option<(char, char, Vec<&str>)> {
    let open = s.chars().next().filter(|c| matches!(c, '(' | '['))?;
    let close = s.chars().last().filter(|c| matches!(c, ')' | ']'))?;
    let inner = &s[1..s.len() - 1];

    let mut items = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth -= 1,
            ',' if depth == 0 => {
                items.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&inner[start..]);
    if items.len() < 2 {
        return None;
    }
    Some((open, close, items))
}
