use crate::errors::EquivalenceError;

/// A semantic-equality check over the answer grammar (numeric, LaTeX, ...).
/// May fail on input it cannot interpret.
pub trait AnswerPredicate: Send + Sync {
    fn name(&self) -> &str;

    fn equal(&self, a: &str, b: &str) -> Result<bool, EquivalenceError>;
}

/// Plain closures work as predicates, for callers that bring their own checker.
impl<F> AnswerPredicate for F
where
    F: Fn(&str, &str) -> Result<bool, EquivalenceError> + Send + Sync,
{
    fn name(&self) -> &str {
        "custom"
    }

    fn equal(&self, a: &str, b: &str) -> Result<bool, EquivalenceError> {
        self(a, b)
    }
}
