use crate::language::Language;

/// Canonical form of a user message used for rule evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    pub language: Language,
    /// Lower-cased, trimmed text with whitespace runs collapsed to a single space.
    pub text: String,
    pub tokens: Vec<String>,
}

impl NormalizedInput {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

pub fn normalize(raw: &str, language: Language) -> NormalizedInput {
    let text = normalize_text(raw);
    let tokens = text
        .split(is_boundary)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    NormalizedInput {
        language,
        text,
        tokens,
    }
}

pub(crate) fn normalize_text(raw: &str) -> String {
    let cleaned = raw.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

// Devanagari words stay whole: only whitespace, ASCII punctuation and the danda split.
fn is_boundary(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation() || matches!(c, '।' | '॥')
}
