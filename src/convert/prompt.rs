//! Prompt and reasoning-response composition.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Instructional suffix placed between the question and the option list.
const OPTION_INSTRUCTION: &str =
    " Please only select the correct option index (e.g. A) from following options:\n";

/// Structural contract for the composed reasoning response: a think span,
/// then optional whitespace, then an answer span ending the string, matched
/// across embedded newlines.
static REASONING_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^<think>.*?</think>\s*<answer>.*?</answer>$")
        .expect("reasoning shape pattern is a valid regex")
});

/// Resolves the system directive for one record.
///
/// A per-record directive always wins, even when a global override is also
/// supplied; the global override only ever fills a gap. Neither present
/// means no directive is attached.
#[must_use]
pub fn resolve_system(global: Option<&str>, per_record: Option<&str>) -> Option<String> {
    per_record.or(global).map(str::to_string)
}

/// Composes the user-facing prompt from the question and its options.
///
/// Options render as `label: text` lines in insertion order, each after
/// the first prefixed by a single leading space.
#[must_use]
pub fn compose_prompt(question: &str, options: &IndexMap<String, String>) -> String {
    let options_str = options
        .iter()
        .map(|(label, text)| format!("{label}: {text}"))
        .collect::<Vec<_>>()
        .join("\n ");
    format!("{question}\n{OPTION_INSTRUCTION}{options_str}")
}

/// Composes the reasoning response and checks its structural contract.
///
/// Returns `None` when the composed string does not satisfy the contract;
/// the caller treats that as fatal for the whole run, since a trace that
/// breaks its own wrapping signals an upstream data-generation defect.
#[must_use]
pub fn compose_reasoning(think: &str, answer: &str) -> Option<String> {
    let composed = format!("<think>{think}</think> <answer>{answer}</answer>");
    validate_reasoning(&composed).then_some(composed)
}

/// Returns whether a reasoning response satisfies the structural contract.
#[must_use]
pub fn validate_reasoning(response: &str) -> bool {
    REASONING_SHAPE.is_match(response)
}
