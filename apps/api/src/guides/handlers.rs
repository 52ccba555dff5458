use axum::{extract::Path, Json};

use crate::errors::AppError;
use crate::guides::catalog::{find_guide, HiringGuide, GUIDES};

/// GET /api/v1/guides
pub async fn handle_list_guides() -> Json<&'static [HiringGuide]> {
    Json(GUIDES)
}

/// GET /api/v1/guides/:stage
pub async fn handle_get_guide(
    Path(stage): Path<String>,
) -> Result<Json<&'static HiringGuide>, AppError> {
    find_guide(&stage)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No hiring guide for stage '{stage}'")))
}
