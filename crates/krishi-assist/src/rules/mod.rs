//! Keyword rule store and the text-mode matcher built on it.

mod error;
mod matcher;
mod normalize;
mod store;

pub use error::ConfigurationError;
pub use matcher::{match_input, MatchResult};
pub(crate) use normalize::normalize_text;
pub use normalize::{normalize, NormalizedInput};
pub use store::{Keyword, Rule, RuleSource, RuleStore, RuleStoreSource};
