//! Ordered answer-region strategies for the boxed extractor.
//!
//! Each strategy looks for one textual pattern and returns `Some(region)` when
//! the pattern applies. The chain is evaluated in priority order and the first
//! hit wins; [`last_number`] always applies, so the chain never comes back empty.

use std::sync::LazyLock;

use regex::Regex;

use crate::braces::take_group;

/// Step tags emitted by process-supervised reward models ("ки").
pub const STEP_TAG: &str = "\u{043a}\u{0438}";

const BOXED: &str = "boxed";
const ANSWER_IS: &str = "answer is";
const MINERVA_TAIL: &str = "$. I hope";
const FINAL_ANSWER_IS: &str = "final answer is";
const HE_ANSWER_IS: &str = "he answer is";
const CJK_ANSWER_IS: &str = "答案是";

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d*\.?\d+").unwrap());

/// A named region strategy.
#[derive(Clone, Copy)]
pub struct Strategy {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<String>,
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy").field("name", &self.name).finish()
    }
}

/// Priority order of the boxed-mode chain.
pub const CHAIN: &[Strategy] = &[
    Strategy { name: "boxed", apply: boxed },
    Strategy { name: "minerva", apply: minerva },
    Strategy { name: "final_answer_marker", apply: final_answer_marker },
    Strategy { name: "he_answer_marker", apply: he_answer_marker },
    Strategy { name: "cjk_marker", apply: cjk_marker },
    Strategy { name: "last_number", apply: last_number },
];

/// Run the chain and report which strategy matched.
pub fn isolate(text: &str) -> (&'static str, String) {
    for strategy in CHAIN {
        if let Some(region) = (strategy.apply)(text) {
            return (strategy.name, region);
        }
    }
    ("none", String::new())
}

/// Contents of the last `boxed{...}`, scanned with brace balancing.
/// `boxed X$` without braces takes everything up to the next `$`.
pub fn boxed(text: &str) -> Option<String> {
    if !text.contains(BOXED) {
        return None;
    }
    let tail = text.rsplit(BOXED).next().unwrap_or_default();
    if tail.is_empty() {
        return Some(String::new());
    }
    match tail.strip_prefix('{') {
        Some(after_open) => Some(take_group(after_open)),
        None => Some(tail.split('$').next().unwrap_or_default().trim().to_string()),
    }
}

/// Minerva style: "The answer is $X$. I hope it is correct."
pub fn minerva(text: &str) -> Option<String> {
    if !text.contains(MINERVA_TAIL) {
        return None;
    }
    let (_, after) = text.split_once(ANSWER_IS)?;
    let region = after.split(MINERVA_TAIL).next().unwrap_or_default();
    Some(region.trim().to_string())
}

pub fn final_answer_marker(text: &str) -> Option<String> {
    after_last(text, FINAL_ANSWER_IS)
}

pub fn he_answer_marker(text: &str) -> Option<String> {
    after_last(text, HE_ANSWER_IS)
}

/// Text after the first CJK marker, cut at the first blank line.
pub fn cjk_marker(text: &str) -> Option<String> {
    let (_, after) = text.split_once(CJK_ANSWER_IS)?;
    let paragraph = after.trim().split("\n\n").next().unwrap_or_default();
    Some(paragraph.trim().to_string())
}

/// Last signed decimal token with thousands separators removed, or "".
pub fn last_number(text: &str) -> Option<String> {
    let cleaned = text.replace(',', "");
    let last = NUMBER_RE
        .find_iter(&cleaned)
        .last()
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    Some(last)
}

fn after_last(text: &str, marker: &str) -> Option<String> {
    if !text.contains(marker) {
        return None;
    }
    let tail = text.rsplit(marker).next().unwrap_or_default();
    Some(tail.trim().to_string())
}
