use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::directory::{
    EligibleSchemeView, SchemeComparison, SchemeDirectory, SchemeQuery, SchemeView,
};
use super::domain::FarmerProfile;
use crate::language::Language;

pub const SCHEME_SOURCE: &str = "Ministry of Agriculture & Farmers Welfare, MyScheme.gov.in";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeListResponse {
    pub success: bool,
    pub data: Vec<SchemeView>,
    pub total: usize,
    pub last_updated: DateTime<Utc>,
    pub source: &'static str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EligibilityRequest {
    #[serde(default)]
    pub profile: FarmerProfile,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponse {
    pub success: bool,
    pub eligible_schemes: Vec<EligibleSchemeView>,
    pub checked_at: DateTime<Utc>,
    pub profile_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonRequest {
    #[serde(default)]
    pub schemes: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResponse {
    pub success: bool,
    pub comparison: SchemeComparison,
    pub generated_at: DateTime<Utc>,
}

static PROFILE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_profile_id() -> String {
    let id = PROFILE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("profile-{id:06}")
}

/// Router exposing the scheme listing and eligibility endpoints.
pub fn scheme_router(directory: Arc<SchemeDirectory>) -> Router {
    Router::new()
        .route("/api/schemes", get(list_handler))
        .route("/api/schemes/eligibility", post(eligibility_handler))
        .route("/api/schemes/compare", post(compare_handler))
        .with_state(directory)
}

pub(crate) async fn list_handler(
    State(directory): State<Arc<SchemeDirectory>>,
    Query(query): Query<SchemeQuery>,
) -> Response {
    let data = directory.list(&query);
    let response = SchemeListResponse {
        success: true,
        total: data.len(),
        data,
        last_updated: Utc::now(),
        source: SCHEME_SOURCE,
    };
    (StatusCode::OK, Json(response)).into_response()
}

pub(crate) async fn eligibility_handler(
    State(directory): State<Arc<SchemeDirectory>>,
    Json(request): Json<EligibilityRequest>,
) -> Response {
    let language = request
        .language
        .as_deref()
        .map(Language::from_tag)
        .unwrap_or_default();

    let response = EligibilityResponse {
        success: true,
        eligible_schemes: directory.check_eligibility(&request.profile, language),
        checked_at: Utc::now(),
        profile_id: next_profile_id(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

pub(crate) async fn compare_handler(
    State(directory): State<Arc<SchemeDirectory>>,
    Json(request): Json<ComparisonRequest>,
) -> Response {
    let language = request
        .language
        .as_deref()
        .map(Language::from_tag)
        .unwrap_or_default();

    let response = ComparisonResponse {
        success: true,
        comparison: directory.compare(&request.schemes, language),
        generated_at: Utc::now(),
    };
    (StatusCode::OK, Json(response)).into_response()
}
