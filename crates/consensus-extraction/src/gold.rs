//! Reference-answer extraction from gold solutions.

use consensus_core::traits::GoldExtractor;

use crate::braces::closing_brace;

const BOXED_OPEN: &str = r"\boxed{";

/// Takes the last `\boxed{...}` (or `\fbox{...}`) span of a solution and
/// returns its contents. Only a span of the exact form `\boxed{...}` yields
/// an answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoxedGoldExtractor;

impl GoldExtractor for BoxedGoldExtractor {
    fn extract_gold(&self, solution: &str) -> Option<String> {
        last_boxed_span(solution).and_then(remove_boxed)
    }
}

/// The last `\boxed`/`\fbox` span including its balanced braces.
pub fn last_boxed_span(text: &str) -> Option<&str> {
    let start = text.rfind(r"\boxed").or_else(|| text.rfind(r"\fbox"))?;
    let end = closing_brace(text, start)?;
    Some(&text[start..=end])
}

fn remove_boxed(span: &str) -> Option<String> {
    span.strip_prefix(BOXED_OPEN)
        .and_then(|rest| rest.strip_suffix('}'))
        .map(str::to_string)
}
