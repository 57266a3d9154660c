//! Axum route handlers for the Quiz API.
//!
//! State-machine validation (completed gate, index bounds) runs entirely
//! before any storage write, and never involves the LLM. The only LLM call
//! in this module is next-question generation, which is free text by design.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::ChatMessage;
use crate::models::quiz::QuizRow;
use crate::quiz::machine::{questions_from_value, record_answer, Questions};
use crate::quiz::prompts::{INTERVIEWER_SYSTEM_TEMPLATE, NEXT_QUESTION_TURN};
use crate::quiz::store::{get_quiz, get_quiz_by_user, replace_quiz, save_answers};
use crate::resume::store::get_profile;
use crate::state::AppState;
use crate::users::store::get_user;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateQuizRequest {
    pub user_id: Uuid,
}

/// Index is signed so a negative value reports an out-of-range error instead
/// of failing body deserialization.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub question_index: i64,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct IndexedSlot {
    pub question: String,
    pub answer: String,
    pub index: usize,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub quiz_id: Uuid,
    pub completed: bool,
    pub questions: Vec<IndexedSlot>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct NextQuestionRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct GeneratedText {
    pub text: String,
}

fn quiz_response(row: &QuizRow, questions: &Questions, message: &str) -> QuizResponse {
    QuizResponse {
        quiz_id: row.id,
        completed: row.completed,
        questions: questions
            .iter()
            .enumerate()
            .map(|(index, slot)| IndexedSlot {
                question: slot.question.clone(),
                answer: slot.answer.clone(),
                index,
            })
            .collect(),
        message: message.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/quiz
///
/// Creates a fresh quiz for the user, replacing any existing one in a single
/// atomic statement. Always succeeds with ten empty slots.
pub async fn handle_create_quiz(
    State(state): State<AppState>,
    Json(request): Json<CreateQuizRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    let row = replace_quiz(&state.db, request.user_id).await?;
    let questions = questions_from_value(row.questions.clone())?;

    Ok(Json(quiz_response(
        &row,
        &questions,
        "Quiz created. Ready to start.",
    )))
}

/// POST /api/v1/quiz/:quiz_id/answer
///
/// Records one answer. The completed gate and index bounds are checked before
/// any write; the quiz flips to completed in the same call that fills the
/// last blank slot.
pub async fn handle_answer_question(
    State(state): State<AppState>,
    Path(quiz_id): Path<Uuid>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    let mut row = get_quiz(&state.db, quiz_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Quiz {quiz_id} not found")))?;

    let mut questions = questions_from_value(row.questions.clone())?;
    let completed = record_answer(
        &mut questions,
        row.completed,
        request.question_index,
        &request.question,
        &request.answer,
    )?;

    save_answers(&state.db, quiz_id, &questions, completed).await?;
    row.completed = completed;

    let message = if completed {
        "Quiz completed!"
    } else {
        "Answer recorded."
    };
    Ok(Json(quiz_response(&row, &questions, message)))
}

/// GET /api/v1/quiz/answers?user_id=
///
/// Returns the full answer sheet once the quiz is completed; 409 while it is
/// still in progress.
pub async fn handle_quiz_answers(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<QuizResponse>, AppError> {
    let row = get_quiz_by_user(&state.db, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No quiz found for user {}", params.user_id)))?;

    if !row.completed {
        return Err(AppError::QuizIncomplete);
    }

    let questions = questions_from_value(row.questions.clone())?;
    Ok(Json(quiz_response(&row, &questions, "Quiz completed!")))
}

/// POST /api/v1/quiz/next-question
///
/// Generates the next personality question from the chat history plus the
/// stored account and profile. Free text out; nothing here is parsed.
pub async fn handle_next_question(
    State(state): State<AppState>,
    Json(request): Json<NextQuestionRequest>,
) -> Result<Json<GeneratedText>, AppError> {
    let user = get_user(&state.db, request.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", request.user_id)))?;

    let profile = get_profile(&state.db, request.user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No profile found for user {}. Upload a resume first.",
                request.user_id
            ))
        })?;

    let system = INTERVIEWER_SYSTEM_TEMPLATE
        .replace("{user_json}", &to_pretty_json(&user)?)
        .replace("{profile_json}", &to_pretty_json(&profile.data)?);

    let mut messages = request.history;
    messages.push(ChatMessage::user(NEXT_QUESTION_TURN));

    let text = state
        .llm
        .call_text(&system, &messages)
        .await
        .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))?;

    Ok(Json(GeneratedText { text }))
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize prompt input: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::machine::empty_questions;

    #[test]
    fn test_answer_request_accepts_negative_index() {
        let json = serde_json::json!({
            "question_index": -3,
            "question": "Q?",
            "answer": "A"
        });
        let request: AnswerRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.question_index, -3);
    }

    #[test]
    fn test_next_question_request_defaults_history() {
        let json = serde_json::json!({"user_id": Uuid::new_v4()});
        let request: NextQuestionRequest = serde_json::from_value(json).unwrap();
        assert!(request.history.is_empty());
    }

    #[test]
    fn test_quiz_response_indexes_all_slots() {
        let row = QuizRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            questions: serde_json::Value::Null,
            completed: false,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let questions = empty_questions();

        let response = quiz_response(&row, &questions, "Quiz created. Ready to start.");
        assert_eq!(response.questions.len(), 10);
        assert_eq!(response.questions[9].index, 9);
        assert_eq!(response.message, "Quiz created. Ready to start.");
    }

    #[test]
    fn test_interviewer_template_has_placeholders() {
        assert!(INTERVIEWER_SYSTEM_TEMPLATE.contains("{user_json}"));
        assert!(INTERVIEWER_SYSTEM_TEMPLATE.contains("{profile_json}"));
    }
}
