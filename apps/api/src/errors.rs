use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Client-correctable errors (4xx) return their message verbatim; server-side
/// errors (5xx) log the internal detail and return a generic message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resume parse error: {0}")]
    ResumeParse(String),

    #[error("Quiz already completed")]
    QuizCompleted,

    #[error("Quiz not completed")]
    QuizIncomplete,

    #[error("Invalid question index: {0}")]
    QuestionIndex(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Malformed LLM output: {0}")]
    MalformedLlmOutput(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ResumeParse(msg) => {
                (StatusCode::BAD_REQUEST, "RESUME_PARSE_ERROR", msg.clone())
            }
            AppError::QuizCompleted => (
                StatusCode::CONFLICT,
                "QUIZ_ALREADY_COMPLETED",
                "Quiz already completed".to_string(),
            ),
            AppError::QuizIncomplete => (
                StatusCode::CONFLICT,
                "QUIZ_NOT_COMPLETED",
                "Quiz not completed".to_string(),
            ),
            AppError::QuestionIndex(index) => (
                StatusCode::BAD_REQUEST,
                "QUESTION_INDEX_OUT_OF_RANGE",
                format!("Invalid question index: {index}"),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "The AI service is currently unavailable".to_string(),
                )
            }
            AppError::MalformedLlmOutput(msg) => {
                tracing::error!("Malformed LLM output: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MALFORMED_LLM_OUTPUT",
                    "Invalid response format from AI".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_conflicts_map_to_409() {
        assert_eq!(
            AppError::QuizCompleted.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::QuizIncomplete.into_response().status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_question_index_maps_to_400() {
        let response = AppError::QuestionIndex(-1).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_llm_failure_maps_to_502() {
        let response = AppError::Llm("timeout".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_malformed_output_maps_to_500() {
        let response = AppError::MalformedLlmOutput("not json".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_resume_parse_maps_to_400() {
        let response = AppError::ResumeParse("unreadable PDF".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
