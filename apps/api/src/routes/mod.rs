pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::dna::handlers as dna;
use crate::guides::handlers as guides;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Team DNA
        .route("/api/v1/team/analysis", post(dna::handle_team_analysis))
        .route(
            "/api/v1/team/members/narrative",
            post(dna::handle_member_narrative),
        )
        // Assessment
        .route(
            "/api/v1/assessment/questions",
            get(assessment::handle_list_questions),
        )
        .route(
            "/api/v1/assessment/score",
            post(assessment::handle_score_assessment),
        )
        // Hiring guides
        .route("/api/v1/guides", get(guides::handle_list_guides))
        .route("/api/v1/guides/:stage", get(guides::handle_get_guide))
        .with_state(state)
}
