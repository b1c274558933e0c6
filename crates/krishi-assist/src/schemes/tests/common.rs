use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::language::{Language, Localized};
use crate::schemes::{
    scheme_router, FarmerProfile, LandHolding, Qualification, Scheme, SchemeCategory,
    SchemeDirectory, SchemePriority, SchemeStatus, ScoringConfig, TargetFarmer,
};

pub(super) fn scheme(id: &str, priority: SchemePriority, targets: &[TargetFarmer]) -> Scheme {
    Scheme {
        id: id.to_string(),
        category: SchemeCategory::Financial,
        title: Localized::new().with(Language::English, format!("{id} title")),
        description: Localized::new().with(Language::English, format!("{id} description")),
        benefits: Localized::new().with(Language::English, "benefit".to_string()),
        eligibility: Localized::new(),
        application_deadline: "Open throughout the year".to_string(),
        status: SchemeStatus::Active,
        application_link: format!("https://example.gov.in/{id}"),
        ministry: "Ministry of Agriculture & Farmers Welfare".to_string(),
        amount: None,
        documents: vec!["Land Records".to_string()],
        application_complexity: None,
        recommendation: Localized::new(),
        priority,
        target_farmers: targets.to_vec(),
        qualification: Qualification::Universal,
    }
}

/// Scheme aimed at small and marginal farmers, without the high-priority bonus.
pub(super) fn small_farmer_scheme() -> Scheme {
    let mut scheme = scheme(
        "income-support",
        SchemePriority::Medium,
        &[TargetFarmer::Small, TargetFarmer::Marginal],
    );
    scheme.qualification = Qualification::RequiresLand;
    scheme
}

pub(super) fn profile(land_holding: LandHolding) -> FarmerProfile {
    FarmerProfile::with_land_holding(land_holding)
}

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

pub(super) fn directory() -> SchemeDirectory {
    SchemeDirectory::builtin().expect("embedded scheme catalog is valid")
}

pub(super) fn router() -> axum::Router {
    scheme_router(Arc::new(directory()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json body")
}
