//! Axum route handler for the advisor chat.
//!
//! Degrades gracefully: a missing profile or quiz serializes as `null` in
//! the context turn rather than failing the request. Only the account row is
//! required.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::prompts::{ADVISOR_SYSTEM, ADVISOR_TURN_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::ChatMessage;
use crate::quiz::store::get_quiz_by_user;
use crate::resume::store::get_profile;
use crate::state::AppState;
use crate::users::store::get_user;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub text: String,
}

/// POST /api/v1/chat
///
/// One advisor turn: stored context + supplied history + the query, answered
/// with a single LLM call. Free text out.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.input.trim().is_empty() {
        return Err(AppError::Validation("input cannot be empty".to_string()));
    }

    let user = get_user(&state.db, request.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", request.user_id)))?;

    let profile = get_profile(&state.db, request.user_id).await?;
    let quiz = get_quiz_by_user(&state.db, request.user_id).await?;

    let user_value = serde_json::to_value(&user)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize user: {e}")))?;
    let turn = build_advisor_turn(
        &request.input,
        &user_value,
        profile.as_ref().map(|p| &p.data),
        quiz.as_ref().map(|q| &q.questions),
    )?;

    let mut messages = request.history;
    messages.push(ChatMessage::user(turn));

    let text = state
        .llm
        .call_text(ADVISOR_SYSTEM, &messages)
        .await
        .map_err(|e| AppError::Llm(format!("Advisor call failed: {e}")))?;

    Ok(Json(ChatResponse { text }))
}

fn build_advisor_turn(
    input: &str,
    user: &serde_json::Value,
    profile_data: Option<&serde_json::Value>,
    quiz_questions: Option<&serde_json::Value>,
) -> Result<String, AppError> {
    let pretty = |value: &serde_json::Value| {
        serde_json::to_string_pretty(value).map_err(|e| {
            AppError::Internal(anyhow::anyhow!("Failed to serialize chat context: {e}"))
        })
    };

    let null = serde_json::Value::Null;
    Ok(ADVISOR_TURN_TEMPLATE
        .replace("{input}", input)
        .replace("{user_json}", &pretty(user)?)
        .replace("{profile_json}", &pretty(profile_data.unwrap_or(&null))?)
        .replace("{quiz_json}", &pretty(quiz_questions.unwrap_or(&null))?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisor_turn_embeds_query_and_context() {
        let user = serde_json::json!({"name": "Asha Rao"});
        let profile = serde_json::json!({"skills": ["Rust"]});

        let turn =
            build_advisor_turn("Should I learn Go?", &user, Some(&profile), None).unwrap();

        assert!(turn.contains("Should I learn Go?"));
        assert!(turn.contains("Asha Rao"));
        assert!(turn.contains("Rust"));
        assert!(!turn.contains("{input}"));
    }

    #[test]
    fn test_missing_documents_serialize_as_null() {
        let user = serde_json::json!({"name": "Asha Rao"});
        let turn = build_advisor_turn("What next?", &user, None, None).unwrap();

        // Both optional context blocks degrade to null, not an error
        assert_eq!(turn.matches(":\nnull").count(), 2);
        assert!(!turn.contains("{profile_json}"));
        assert!(!turn.contains("{quiz_json}"));
    }

    #[test]
    fn test_chat_request_requires_input() {
        let json = serde_json::json!({"user_id": Uuid::new_v4(), "history": []});
        let result: Result<ChatRequest, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }
}
