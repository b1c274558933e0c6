use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ConfigurationError;
use super::normalize::normalize_text;
use crate::language::{Language, Localized};

/// Trigger term tagged with the language it was written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub language: Language,
    pub term: String,
}

/// Validated keyword rule. Keyword terms are stored normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule<P> {
    pub id: String,
    pub keywords: Vec<Keyword>,
    pub payload: Localized<P>,
    pub priority: i32,
}

impl<P> Rule<P> {
    /// Permissive "contains" semantics: any keyword appearing anywhere in the text matches.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| text.contains(keyword.term.as_str()))
    }
}

/// Rule as written in configuration, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSource<P> {
    pub id: String,
    pub keywords: BTreeMap<Language, Vec<String>>,
    pub payload: Localized<P>,
    #[serde(default)]
    pub priority: i32,
}

/// Ordered rules plus the payload returned when nothing matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleStoreSource<P> {
    pub rules: Vec<RuleSource<P>>,
    pub fallback: Localized<P>,
}

/// Immutable, ordered rule collection. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct RuleStore<P> {
    rules: Vec<Rule<P>>,
    evaluation_order: Vec<usize>,
    fallback_default: P,
    fallback_variants: Localized<P>,
}

impl<P> RuleStore<P> {
    pub fn load(source: RuleStoreSource<P>) -> Result<Self, ConfigurationError> {
        let mut fallback_variants = source.fallback;
        let fallback_default = fallback_variants.remove(Language::DEFAULT).ok_or(
            ConfigurationError::MissingFallback {
                language: Language::DEFAULT,
            },
        )?;

        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(source.rules.len());

        for (position, rule) in source.rules.into_iter().enumerate() {
            let id = rule.id.trim().to_string();
            if id.is_empty() {
                return Err(ConfigurationError::EmptyRuleId { position });
            }
            if !seen.insert(id.clone()) {
                return Err(ConfigurationError::DuplicateRuleId { id });
            }

            let keywords = rule
                .keywords
                .into_iter()
                .flat_map(|(language, terms)| {
                    terms.into_iter().map(move |term| Keyword {
                        language,
                        term: normalize_text(&term),
                    })
                })
                .filter(|keyword| !keyword.term.is_empty())
                .collect::<Vec<_>>();
            if keywords.is_empty() {
                return Err(ConfigurationError::EmptyKeywords { id });
            }

            if !rule.payload.has(Language::DEFAULT) {
                return Err(ConfigurationError::MissingLocalization {
                    id,
                    language: Language::DEFAULT,
                });
            }
            for language in Language::supported() {
                if !rule.payload.has(language) {
                    debug!(
                        rule = %id,
                        language = language.code(),
                        "rule falls back to default language"
                    );
                }
            }

            rules.push(Rule {
                id,
                keywords,
                payload: rule.payload,
                priority: rule.priority,
            });
        }

        let mut evaluation_order = (0..rules.len()).collect::<Vec<_>>();
        evaluation_order.sort_by_key(|&index| Reverse(rules[index].priority));

        Ok(Self {
            rules,
            evaluation_order,
            fallback_default,
            fallback_variants,
        })
    }

    /// Rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule<P>> {
        self.rules.iter()
    }

    /// Rules in evaluation order: higher priority first, declaration order on ties.
    pub fn by_priority(&self) -> impl Iterator<Item = &Rule<P>> {
        self.evaluation_order.iter().map(|&index| &self.rules[index])
    }

    pub fn get(&self, id: &str) -> Option<&Rule<P>> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// Fallback payload for `language`, else the default-language fallback.
    pub fn fallback(&self, language: Language) -> &P {
        self.fallback_variants
            .get(language)
            .unwrap_or(&self.fallback_default)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<P: DeserializeOwned> RuleStore<P> {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigurationError> {
        let source: RuleStoreSource<P> = serde_json::from_str(raw)?;
        Self::load(source)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}
