//! Axum route handlers for the Account API.
//!
//! Registration creates the account row only. Credentials, verification, and
//! session issuance belong to the external auth service.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;
use crate::users::store::{get_user, get_user_by_email};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// Setup fields are all optional; only supplied fields overwrite stored ones.
#[derive(Debug, Deserialize)]
pub struct SetupProfileRequest {
    pub user_id: Uuid,
    pub age: Option<i32>,
    pub education_level: Option<String>,
    pub interests: Option<Vec<String>>,
    pub preferred_industries: Option<Vec<String>>,
    pub linkedin_profile: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub message: String,
    pub user: UserRow,
}

/// POST /api/v1/users
///
/// Creates the account row.
pub async fn handle_register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let name = request.name.trim();
    let email = request.email.trim();

    if name.is_empty() {
        return Err(AppError::Validation("Please add a name".to_string()));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("Please add a valid email".to_string()));
    }

    if get_user_by_email(&state.db, email).await?.is_some() {
        return Err(AppError::Validation("User already exists".to_string()));
    }

    let user = sqlx::query_as::<_, UserRow>(
        "INSERT INTO users (id, name, email) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(email)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(UserResponse {
        message: "User registered successfully".to_string(),
        user,
    }))
}

/// GET /api/v1/users/profile?user_id=
pub async fn handle_get_user_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<UserRow>, AppError> {
    let user = get_user(&state.db, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", params.user_id)))?;

    Ok(Json(user))
}

/// PUT /api/v1/users/profile
///
/// Field-level merge of the setup fields: COALESCE keeps the stored value
/// wherever the request omits a field. Deliberately a merge, not a replace;
/// only the extracted profile and recommendation documents are
/// replace-on-write.
pub async fn handle_setup_profile(
    State(state): State<AppState>,
    Json(request): Json<SetupProfileRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users SET
            age = COALESCE($2, age),
            education_level = COALESCE($3, education_level),
            interests = COALESCE($4, interests),
            preferred_industries = COALESCE($5, preferred_industries),
            linkedin_profile = COALESCE($6, linkedin_profile),
            location = COALESCE($7, location),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(request.age)
    .bind(request.education_level)
    .bind(request.interests)
    .bind(request.preferred_industries)
    .bind(request.linkedin_profile)
    .bind(request.location)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("User {} not found", request.user_id)))?;

    Ok(Json(UserResponse {
        message: "Profile updated successfully".to_string(),
        user,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_request_with_partial_fields() {
        let json = serde_json::json!({
            "user_id": Uuid::new_v4(),
            "age": 21,
            "interests": ["backend", "databases"]
        });
        let request: SetupProfileRequest = serde_json::from_value(json).unwrap();

        assert_eq!(request.age, Some(21));
        assert_eq!(request.interests.as_deref().map(|i| i.len()), Some(2));
        assert!(request.education_level.is_none());
        assert!(request.location.is_none());
    }

    #[test]
    fn test_register_request_shape() {
        let json = serde_json::json!({"name": "Asha Rao", "email": "asha@example.com"});
        let request: RegisterRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.name, "Asha Rao");
    }
}
