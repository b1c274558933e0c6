use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Languages the assistant answers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

impl Language {
    pub const DEFAULT: Self = Self::English;

    pub const fn supported() -> [Self; 2] {
        [Self::English, Self::Hindi]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }

    /// Resolve a request tag such as `hi`, `hi-IN` or `EN`. Unknown tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "hi" | "hin" | "hindi" => Self::Hindi,
            _ => Self::English,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Payload variants keyed by language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized<P>(BTreeMap<Language, P>);

impl<P> Localized<P> {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, language: Language, payload: P) -> Self {
        self.0.insert(language, payload);
        self
    }

    pub fn remove(&mut self, language: Language) -> Option<P> {
        self.0.remove(&language)
    }

    pub fn has(&self, language: Language) -> bool {
        self.0.contains_key(&language)
    }

    /// Payload for `language`, else the default-language payload.
    pub fn get(&self, language: Language) -> Option<&P> {
        self.0
            .get(&language)
            .or_else(|| self.0.get(&Language::DEFAULT))
    }

    pub fn variants(&self) -> impl Iterator<Item = (Language, &P)> {
        self.0.iter().map(|(language, payload)| (*language, payload))
    }
}

impl<P> Default for Localized<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> FromIterator<(Language, P)> for Localized<P> {
    fn from_iter<T: IntoIterator<Item = (Language, P)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tag_accepts_regional_variants() {
        assert_eq!(Language::from_tag("hi"), Language::Hindi);
        assert_eq!(Language::from_tag(" HI-in "), Language::Hindi);
        assert_eq!(Language::from_tag("en_GB"), Language::English);
        assert_eq!(Language::from_tag("fr"), Language::English);
        assert_eq!(Language::from_tag(""), Language::English);
    }

    #[test]
    fn localized_lookup_falls_back_to_english() {
        let text = Localized::new().with(Language::English, "hello");
        assert_eq!(text.get(Language::Hindi), Some(&"hello"));

        let text = text.with(Language::Hindi, "नमस्ते");
        assert_eq!(text.get(Language::Hindi), Some(&"नमस्ते"));
    }

    #[test]
    fn localized_deserializes_from_language_codes() {
        let text: Localized<String> =
            serde_json::from_str(r#"{"en":"rain","hi":"बारिश"}"#).expect("valid json");
        assert!(text.has(Language::English));
        assert_eq!(text.get(Language::Hindi).map(String::as_str), Some("बारिश"));
    }
}
