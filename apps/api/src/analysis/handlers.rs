//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::models::roadmap::{RoadmapRequest, RoadmapResult};
use crate::models::skill_gap::{RoleSummary, SkillGapRequest, SkillGapResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CareerPlanRequest {
    pub role: Option<String>,
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct CareerPlanResponse {
    pub analysis: SkillGapResult,
    pub roadmap: RoadmapResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze-skill-gap
///
/// Compares the user's skills with the resolved role's required skills.
pub async fn handle_analyze_skill_gap(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SkillGapRequest>,
) -> Result<Json<SkillGapResult>, AppError> {
    let result = state.resolver.analyze(&request)?;
    Ok(Json(result))
}

/// POST /api/v1/generate-roadmap
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RoadmapRequest>,
) -> Result<Json<RoadmapResult>, AppError> {
    let result = state.resolver.roadmap(&request)?;
    Ok(Json(result))
}

/// POST /api/v1/career-plan
///
/// Gap analysis and roadmap in one round trip. The two share no state, so
/// they run side by side; either validation failure fails the request.
pub async fn handle_career_plan(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CareerPlanRequest>,
) -> Result<Json<CareerPlanResponse>, AppError> {
    let gap_request = SkillGapRequest {
        role: request.role.clone(),
        skills: request.skills,
    };
    let roadmap_request = RoadmapRequest { role: request.role };

    let (analysis, roadmap) = tokio::join!(
        async { state.resolver.analyze(&gap_request) },
        async { state.resolver.roadmap(&roadmap_request) }
    );

    Ok(Json(CareerPlanResponse {
        analysis: analysis?,
        roadmap: roadmap?,
    }))
}

/// GET /api/v1/roles
///
/// Known roles in catalog order, for role suggestions.
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<Vec<RoleSummary>> {
    Json(state.resolver.roles())
}
