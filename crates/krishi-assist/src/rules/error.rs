use crate::language::Language;
use std::path::PathBuf;

/// Raised while loading a rule store or scheme catalog. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("rule #{position} has an empty id")]
    EmptyRuleId { position: usize },
    #[error("rule id '{id}' is declared more than once")]
    DuplicateRuleId { id: String },
    #[error("rule '{id}' has no keywords")]
    EmptyKeywords { id: String },
    #[error("rule '{id}' is missing a '{}' localization", language.code())]
    MissingLocalization { id: String, language: Language },
    #[error("fallback payload is missing a '{}' localization", language.code())]
    MissingFallback { language: Language },
    #[error("rule configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unable to read rule configuration from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
