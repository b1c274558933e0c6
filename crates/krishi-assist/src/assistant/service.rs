use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::language::Language;
use crate::rules::{match_input, normalize, ConfigurationError, RuleStore};

const BUILTIN_REPLIES: &str = include_str!("../../catalog/chat_rules.json");
const BUILTIN_SUGGESTIONS: &str = include_str!("../../catalog/suggestions.json");

/// Answers free-text farming questions from two read-only rule stores.
#[derive(Debug, Clone)]
pub struct ChatAssistant {
    replies: RuleStore<String>,
    suggestions: RuleStore<Vec<String>>,
}

/// Reply selected for a single message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub reply: String,
    /// Id of the matched topic rule; `None` when the general help text was used.
    pub topic: Option<String>,
    pub suggestions: Vec<String>,
    pub language: Language,
}

impl ChatAssistant {
    pub fn new(replies: RuleStore<String>, suggestions: RuleStore<Vec<String>>) -> Self {
        Self {
            replies,
            suggestions,
        }
    }

    /// Assistant backed by the catalogs embedded in the crate.
    pub fn builtin() -> Result<Self, ConfigurationError> {
        Ok(Self::new(
            RuleStore::from_json_str(BUILTIN_REPLIES)?,
            RuleStore::from_json_str(BUILTIN_SUGGESTIONS)?,
        ))
    }

    /// Load replies from a JSON file while keeping the embedded suggestions.
    pub fn with_replies_from(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        Ok(Self::new(
            RuleStore::from_path(path)?,
            RuleStore::from_json_str(BUILTIN_SUGGESTIONS)?,
        ))
    }

    pub fn replies(&self) -> &RuleStore<String> {
        &self.replies
    }

    pub fn respond(&self, message: &str, language: Language) -> ChatReply {
        let input = normalize(message, language);
        let reply = match_input(&input, &self.replies, language);
        let suggestions = match_input(&input, &self.suggestions, language);

        debug!(
            topic = reply.rule_id().unwrap_or("fallback"),
            language = language.code(),
            tokens = input.tokens.len(),
            "chat reply selected"
        );

        ChatReply {
            reply: reply.payload.clone(),
            topic: reply.rule_id().map(str::to_string),
            suggestions: suggestions.payload.clone(),
            language,
        }
    }
}
