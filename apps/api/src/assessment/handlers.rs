//! Axum route handlers for the competency assessment.

use std::collections::HashMap;

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::assessment::questions::{questions_by_category, AssessmentQuestion, QUESTIONS};
use crate::assessment::scoring::{score_answers, AssessmentScore};
use crate::errors::AppError;
use crate::models::member::EvaluationAxis;

#[derive(Debug, Deserialize)]
pub struct QuestionsQuery {
    pub category: Option<EvaluationAxis>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub total: usize,
    pub questions: Vec<&'static AssessmentQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answers: HashMap<String, u8>,
}

/// GET /api/v1/assessment/questions
///
/// Returns the questionnaire, optionally filtered by `?category=`.
pub async fn handle_list_questions(Query(query): Query<QuestionsQuery>) -> Json<QuestionsResponse> {
    let questions: Vec<&'static AssessmentQuestion> = match query.category {
        Some(category) => questions_by_category(category),
        None => QUESTIONS.iter().collect(),
    };

    Json(QuestionsResponse {
        total: questions.len(),
        questions,
    })
}

/// POST /api/v1/assessment/score
///
/// Converts raw 1–5 answers into an `evaluation` record for a team member.
pub async fn handle_score_assessment(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<AssessmentScore>, AppError> {
    Ok(Json(score_answers(&request.answers)?))
}
