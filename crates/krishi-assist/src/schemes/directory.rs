use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::SchemeCatalog;
use super::domain::{
    ApplicationComplexity, FarmerProfile, Scheme, SchemeCategory, SchemePriority, SchemeStatus,
    TargetFarmer,
};
use super::scorer::{EligibilityScorer, ScoreComponent, ScoredScheme};
use crate::language::{Language, Localized};
use crate::rules::{normalize_text, ConfigurationError};

/// Listing filters accepted by the scheme directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemeQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl SchemeQuery {
    pub fn language(&self) -> Language {
        self.language
            .as_deref()
            .map(Language::from_tag)
            .unwrap_or_default()
    }

    /// `None` when every category passes. `Some(None)` names a category no scheme has.
    fn category_filter(&self) -> Option<Option<SchemeCategory>> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|category| !category.is_empty() && !category.eq_ignore_ascii_case("all"))
            .map(SchemeCategory::from_query)
    }
}

/// Flat value estimate per compared scheme, in rupees.
pub const ESTIMATED_BENEFIT_PER_SCHEME: u64 = 5_000;

/// Side-by-side view of the selected schemes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeComparison {
    pub schemes: Vec<SchemeView>,
    pub recommendations: Vec<String>,
    pub total_benefits: u64,
    pub application_complexity: BTreeMap<String, ApplicationComplexity>,
}

/// Scheme rendered in a single language.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeView {
    pub id: String,
    pub category: SchemeCategory,
    pub title: String,
    pub description: String,
    pub benefits: String,
    pub eligibility: Vec<String>,
    pub application_deadline: String,
    pub status: SchemeStatus,
    pub application_link: String,
    pub ministry: String,
    pub amount: Option<String>,
    pub documents: Vec<String>,
    pub priority: SchemePriority,
    pub target_farmers: Vec<TargetFarmer>,
}

impl SchemeView {
    pub fn localize(scheme: &Scheme, language: Language) -> Self {
        let text = |value: &Localized<String>| {
            value.get(language).cloned().unwrap_or_default()
        };

        Self {
            id: scheme.id.clone(),
            category: scheme.category,
            title: text(&scheme.title),
            description: text(&scheme.description),
            benefits: text(&scheme.benefits),
            eligibility: scheme
                .eligibility
                .get(language)
                .cloned()
                .unwrap_or_default(),
            application_deadline: scheme.application_deadline.clone(),
            status: scheme.status,
            application_link: scheme.application_link.clone(),
            ministry: scheme.ministry.clone(),
            amount: scheme.amount.clone(),
            documents: scheme.documents.clone(),
            priority: scheme.priority,
            target_farmers: scheme.target_farmers.clone(),
        }
    }
}

/// Qualifying scheme with its match score, rendered in a single language.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibleSchemeView {
    #[serde(flatten)]
    pub scheme: SchemeView,
    pub match_score: u8,
    pub score_components: Vec<ScoreComponent>,
}

impl EligibleSchemeView {
    fn from_scored(scored: ScoredScheme<'_>, language: Language) -> Self {
        Self {
            scheme: SchemeView::localize(scored.scheme, language),
            match_score: scored.score,
            score_components: scored.components,
        }
    }
}

/// Read-only scheme catalog paired with the scorer configured for it.
#[derive(Debug, Clone)]
pub struct SchemeDirectory {
    catalog: SchemeCatalog,
    scorer: EligibilityScorer,
}

impl SchemeDirectory {
    pub fn new(catalog: SchemeCatalog) -> Self {
        let scorer = EligibilityScorer::new(catalog.scoring().clone());
        Self { catalog, scorer }
    }

    pub fn builtin() -> Result<Self, ConfigurationError> {
        SchemeCatalog::builtin().map(Self::new)
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigurationError> {
        SchemeCatalog::from_path(path).map(Self::new)
    }

    pub fn catalog(&self) -> &SchemeCatalog {
        &self.catalog
    }

    pub fn scorer(&self) -> &EligibilityScorer {
        &self.scorer
    }

    pub fn list(&self, query: &SchemeQuery) -> Vec<SchemeView> {
        let language = query.language();
        let category = query.category_filter();
        let state_filter = query
            .state
            .as_deref()
            .map(str::trim)
            .filter(|state| !state.is_empty() && !state.eq_ignore_ascii_case("all"));
        let search = query
            .search
            .as_deref()
            .map(normalize_text)
            .filter(|term| !term.is_empty());

        self.catalog
            .schemes()
            .iter()
            .filter(|scheme| category.map_or(true, |wanted| wanted == Some(scheme.category)))
            // Availability is not tracked per state; a state filter keeps only active schemes.
            .filter(|scheme| state_filter.is_none() || scheme.status == SchemeStatus::Active)
            .filter(|scheme| {
                search
                    .as_deref()
                    .map_or(true, |term| matches_search(scheme, term))
            })
            .map(|scheme| SchemeView::localize(scheme, language))
            .collect()
    }

    pub fn check_eligibility(
        &self,
        profile: &FarmerProfile,
        language: Language,
    ) -> Vec<EligibleSchemeView> {
        let scored = self.scorer.score_all(profile, self.catalog.schemes());
        debug!(
            candidates = self.catalog.schemes().len(),
            eligible = scored.len(),
            "eligibility check scored"
        );

        scored
            .into_iter()
            .map(|scored| EligibleSchemeView::from_scored(scored, language))
            .collect()
    }

    /// Catalog schemes whose id is in `ids`, in catalog order. Unknown ids are ignored.
    pub fn compare<S: AsRef<str>>(&self, ids: &[S], language: Language) -> SchemeComparison {
        let selected = self
            .catalog
            .schemes()
            .iter()
            .filter(|scheme| ids.iter().any(|id| id.as_ref().trim() == scheme.id))
            .collect::<Vec<_>>();

        let recommendations = selected
            .iter()
            .filter_map(|scheme| scheme.recommendation.get(language))
            .filter(|text| !text.is_empty())
            .cloned()
            .collect();
        let application_complexity = selected
            .iter()
            .filter_map(|scheme| {
                scheme
                    .application_complexity
                    .map(|complexity| (scheme.id.clone(), complexity))
            })
            .collect();

        debug!(
            requested = ids.len(),
            compared = selected.len(),
            "scheme comparison built"
        );

        SchemeComparison {
            total_benefits: selected.len() as u64 * ESTIMATED_BENEFIT_PER_SCHEME,
            schemes: selected
                .into_iter()
                .map(|scheme| SchemeView::localize(scheme, language))
                .collect(),
            recommendations,
            application_complexity,
        }
    }
}

fn matches_search(scheme: &Scheme, term: &str) -> bool {
    let localized = scheme
        .title
        .variants()
        .chain(scheme.description.variants())
        .map(|(_, text)| text.as_str());

    localized
        .chain(std::iter::once(scheme.ministry.as_str()))
        .any(|field| normalize_text(field).contains(term))
}
