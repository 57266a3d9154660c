//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::ProfileRow;
use crate::resume::extractor::extract_profile;
use crate::resume::parser::extract_pdf_text;
use crate::resume::store::{get_profile, upsert_profile};
use crate::state::AppState;
use crate::users::store::get_user;

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub profile: ProfileRow,
}

#[derive(Debug, Serialize)]
pub struct ResumeDetailResponse {
    pub message: String,
    pub data: ProfileRow,
}

/// POST /api/v1/resumes/upload
///
/// Multipart upload with a `user_id` text part and a `resume` PDF part.
/// Pipeline: parse PDF → extract structured profile → attach raw text →
/// replace the stored document wholesale.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut user_id: Option<Uuid> = None;
    let mut file_bytes: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "user_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable user_id field: {e}")))?;
                let parsed = text
                    .trim()
                    .parse::<Uuid>()
                    .map_err(|_| AppError::Validation("user_id must be a valid UUID".to_string()))?;
                user_id = Some(parsed);
            }
            "resume" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable resume field: {e}")))?;
                file_bytes = Some(bytes);
            }
            _ => {}
        }
    }

    let user_id =
        user_id.ok_or_else(|| AppError::Validation("Missing user_id field".to_string()))?;
    let bytes = file_bytes.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    get_user(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

    // Step 1: PDF → flattened text
    info!("Parsing resume upload for user {user_id}");
    let resume_text = extract_pdf_text(bytes.to_vec()).await?;

    // Step 2: text → typed document (one LLM call, strict parse)
    let doc = extract_profile(&state.llm, &resume_text).await?;

    // Step 3: attach source text and replace the stored document
    let stored = doc.into_stored(resume_text);
    let profile = upsert_profile(&state.db, user_id, &stored).await?;

    Ok(Json(UploadResponse {
        message: "Resume uploaded and processed successfully.".to_string(),
        profile,
    }))
}

/// GET /api/v1/resumes?user_id=
///
/// Returns the stored profile document.
pub async fn handle_get_resume_detail(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeDetailResponse>, AppError> {
    let profile = get_profile(&state.db, params.user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No profile found for user {}", params.user_id))
        })?;

    Ok(Json(ResumeDetailResponse {
        message: "Resume detail fetched successfully".to_string(),
        data: profile,
    }))
}
