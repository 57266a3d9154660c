//! Quiz persistence. One quiz per user, enforced by a UNIQUE key on
//! `user_id`; creation is a single-statement replace so no window exists in
//! which a user has zero or two quizzes.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::quiz::QuizRow;
use crate::quiz::machine::{empty_questions, Questions};

/// Creates a fresh quiz for the user, atomically replacing any existing one.
/// The previous quiz's answers are unrecoverable afterwards.
pub async fn replace_quiz(pool: &PgPool, user_id: Uuid) -> Result<QuizRow, AppError> {
    let questions = serde_json::to_value(empty_questions())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize quiz slots: {e}")))?;

    let row = sqlx::query_as::<_, QuizRow>(
        r#"
        INSERT INTO quizzes (id, user_id, questions, completed)
        VALUES ($1, $2, $3, false)
        ON CONFLICT (user_id) DO UPDATE
        SET id = EXCLUDED.id,
            questions = EXCLUDED.questions,
            completed = EXCLUDED.completed,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&questions)
    .fetch_one(pool)
    .await?;

    info!("Created quiz {} for user {user_id}", row.id);
    Ok(row)
}

/// Persists the arena and completed flag for an existing quiz.
pub async fn save_answers(
    pool: &PgPool,
    quiz_id: Uuid,
    questions: &Questions,
    completed: bool,
) -> Result<(), AppError> {
    let questions = serde_json::to_value(questions)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize quiz slots: {e}")))?;

    sqlx::query(
        "UPDATE quizzes SET questions = $1, completed = $2, updated_at = now() WHERE id = $3",
    )
    .bind(&questions)
    .bind(completed)
    .bind(quiz_id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_quiz(pool: &PgPool, quiz_id: Uuid) -> Result<Option<QuizRow>, AppError> {
    Ok(sqlx::query_as::<_, QuizRow>("SELECT * FROM quizzes WHERE id = $1")
        .bind(quiz_id)
        .fetch_optional(pool)
        .await?)
}

pub async fn get_quiz_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<QuizRow>, AppError> {
    Ok(
        sqlx::query_as::<_, QuizRow>("SELECT * FROM quizzes WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?,
    )
}
