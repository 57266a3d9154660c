//! Profile persistence. One document per user behind a UNIQUE key; writes
//! replace the whole document, so re-uploading a resume overwrites every
//! field with the fresh extraction.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{ProfileDoc, ProfileRow};

/// Stores the document as the user's profile. Single-statement upsert:
/// last write wins, and a concurrent reader sees either the old document or
/// the new one, never a blend.
pub async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    doc: &ProfileDoc,
) -> Result<ProfileRow, AppError> {
    let data = serde_json::to_value(doc).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Failed to serialize profile document: {e}"))
    })?;

    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles (id, user_id, data)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id) DO UPDATE
        SET data = EXCLUDED.data,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&data)
    .fetch_one(pool)
    .await?;

    info!("Stored profile document for user {user_id}");
    Ok(row)
}

pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<ProfileRow>, AppError> {
    Ok(
        sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?,
    )
}
