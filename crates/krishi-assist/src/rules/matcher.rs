use super::normalize::NormalizedInput;
use super::store::{Rule, RuleStore};
use crate::language::Language;

/// Outcome of a text-mode evaluation. Always carries a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a, P> {
    pub rule: Option<&'a Rule<P>>,
    pub payload: &'a P,
    pub language: Language,
}

impl<P> MatchResult<'_, P> {
    pub fn matched(&self) -> bool {
        self.rule.is_some()
    }

    pub fn rule_id(&self) -> Option<&str> {
        self.rule.map(|rule| rule.id.as_str())
    }
}

/// Select the first rule (in evaluation order) with a keyword contained in the input,
/// or the fallback payload when none applies.
pub fn match_input<'a, P>(
    input: &NormalizedInput,
    store: &'a RuleStore<P>,
    language: Language,
) -> MatchResult<'a, P> {
    let matched = store.by_priority().find_map(|rule| {
        if !rule.matches(&input.text) {
            return None;
        }
        rule.payload.get(language).map(|payload| (rule, payload))
    });

    match matched {
        Some((rule, payload)) => MatchResult {
            rule: Some(rule),
            payload,
            language,
        },
        None => MatchResult {
            rule: None,
            payload: store.fallback(language),
            language,
        },
    }
}
