//! Axum route handlers for the Team DNA API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assessment::narrative::generate_member_analysis;
use crate::dna::engine::{compute_team_analysis, AnalysisResult};
use crate::dna::validation::validate_roster;
use crate::errors::AppError;
use crate::models::member::{Evaluation, Strategy, TeamMember};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAnalysisRequest {
    pub team_members: Vec<TeamMember>,
    pub strategy: Strategy,
}

#[derive(Debug, Deserialize)]
pub struct MemberNarrativeRequest {
    pub name: String,
    #[serde(default)]
    pub evaluation: Evaluation,
}

#[derive(Debug, Serialize)]
pub struct MemberNarrativeResponse {
    pub narrative: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/team/analysis
///
/// Validates the roster and returns the full team DNA analysis.
pub async fn handle_team_analysis(
    State(state): State<AppState>,
    Json(request): Json<TeamAnalysisRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    validate_roster(&request.team_members, state.config.max_roster_size)?;

    Ok(Json(compute_team_analysis(
        &request.team_members,
        request.strategy,
    )))
}

/// POST /api/v1/team/members/narrative
///
/// Returns the per-member strengths narrative for one self-assessment.
pub async fn handle_member_narrative(
    Json(request): Json<MemberNarrativeRequest>,
) -> Result<Json<MemberNarrativeResponse>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let narrative = generate_member_analysis(request.name.trim(), &request.evaluation);
    Ok(Json(MemberNarrativeResponse { narrative }))
}
