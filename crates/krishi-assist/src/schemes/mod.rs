//! Government scheme catalog, listing filters and profile-based eligibility scoring.

mod catalog;
pub mod domain;
mod directory;
pub mod router;
mod scorer;

#[cfg(test)]
mod tests;

pub use catalog::{SchemeCatalog, SchemeCatalogSource};
pub use directory::{
    EligibleSchemeView, SchemeComparison, SchemeDirectory, SchemeQuery, SchemeView,
    ESTIMATED_BENEFIT_PER_SCHEME,
};
pub use domain::{
    ApplicationComplexity, Crop, FarmerProfile, FarmingType, IrrigationSource, LandHolding,
    Qualification, Scheme, SchemeCategory, SchemePriority, SchemeStatus, TargetFarmer,
};
pub use router::scheme_router;
pub use scorer::{
    AffinityBonus, EligibilityScorer, ScoreComponent, ScoreFactor, ScoredScheme, ScoringConfig,
    MAX_SCORE, MIN_SCORE,
};
