use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::Scheme;
use super::scorer::ScoringConfig;
use crate::language::Language;
use crate::rules::ConfigurationError;

pub(crate) const BUILTIN_SCHEMES: &str = include_str!("../../catalog/schemes.json");

/// Scheme catalog as written in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeCatalogSource {
    #[serde(default)]
    pub scoring: ScoringConfig,
    pub schemes: Vec<Scheme>,
}

/// Validated, ordered scheme rules and their scoring weights.
#[derive(Debug, Clone)]
pub struct SchemeCatalog {
    schemes: Vec<Scheme>,
    scoring: ScoringConfig,
}

impl SchemeCatalog {
    pub fn load(source: SchemeCatalogSource) -> Result<Self, ConfigurationError> {
        let mut seen = HashSet::new();
        let mut schemes = Vec::with_capacity(source.schemes.len());

        for (position, mut scheme) in source.schemes.into_iter().enumerate() {
            scheme.id = scheme.id.trim().to_string();
            if scheme.id.is_empty() {
                return Err(ConfigurationError::EmptyRuleId { position });
            }
            if !seen.insert(scheme.id.clone()) {
                return Err(ConfigurationError::DuplicateRuleId { id: scheme.id });
            }
            if !scheme.title.has(Language::DEFAULT) || !scheme.description.has(Language::DEFAULT)
            {
                return Err(ConfigurationError::MissingLocalization {
                    id: scheme.id,
                    language: Language::DEFAULT,
                });
            }
            schemes.push(scheme);
        }

        Ok(Self {
            schemes,
            scoring: source.scoring,
        })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigurationError> {
        let source: SchemeCatalogSource = serde_json::from_str(raw)?;
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

    pub fn builtin() -> Result<Self, ConfigurationError> {
        Self::from_json_str(BUILTIN_SCHEMES)
    }

    /// Schemes in declaration order.
    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn get(&self, id: &str) -> Option<&Scheme> {
        self.schemes.iter().find(|scheme| scheme.id == id)
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }
}
