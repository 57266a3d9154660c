//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::recommendation::RecommendationRow;
use crate::recommendation::generator::generate_recommendation;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub message: String,
    pub recommendation: RecommendationRow,
}

/// POST /api/v1/recommendations
///
/// Full pipeline: validate stored inputs → one LLM call → strict parse →
/// sanitize → replace the stored document. Returns the stored row.
pub async fn handle_generate_recommendation(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let recommendation = generate_recommendation(&state, request.user_id).await?;

    Ok(Json(RecommendationResponse {
        message: "Career recommendation generated successfully.".to_string(),
        recommendation,
    }))
}

/// GET /api/v1/recommendations?user_id=
///
/// Returns the stored recommendation document.
pub async fn handle_get_recommendation(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let recommendation = sqlx::query_as::<_, RecommendationRow>(
        "SELECT * FROM recommendations WHERE user_id = $1",
    )
    .bind(params.user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| {
        AppError::NotFound(format!(
            "No recommendation found for user {}",
            params.user_id
        ))
    })?;

    Ok(Json(RecommendationResponse {
        message: "Career recommendation fetched successfully.".to_string(),
        recommendation,
    }))
}
