//! Career recommendation generation: orchestrates the recommendation
//! pipeline.
//!
//! Flow: load user → load profile → load completed quiz → one LLM call →
//!       normalize + strict parse → sanitize scores → upsert → return row.
//!
//! Every input is loaded and validated before the LLM is involved, so an
//! incomplete quiz or a missing profile never costs a generation call.

use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{ChatMessage, LlmClient};
use crate::models::quiz::QuizRow;
use crate::models::recommendation::{RecommendationDoc, RecommendationRow};
use crate::models::user::UserRow;
use crate::normalize::parse_generated;
use crate::quiz::store::get_quiz_by_user;
use crate::recommendation::prompts::{RECOMMENDATION_PROMPT_TEMPLATE, RECOMMENDATION_SYSTEM};
use crate::resume::store::get_profile;
use crate::state::AppState;
use crate::users::store::get_user;

/// Fewer careers than this draws a warning; the prompt demands at least 3.
const MIN_CAREERS: usize = 3;

/// Runs the full recommendation pipeline and returns the stored row.
pub async fn generate_recommendation(
    state: &AppState,
    user_id: Uuid,
) -> Result<RecommendationRow, AppError> {
    // Step 1: load and validate every input up front
    let user = get_user(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

    let profile = get_profile(&state.db, user_id).await?.ok_or_else(|| {
        AppError::NotFound(format!("No profile found for user {user_id}. Upload a resume first."))
    })?;

    let quiz = get_quiz_by_user(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No quiz found for user {user_id}")))?;

    if !quiz.completed {
        return Err(AppError::QuizIncomplete);
    }

    // Step 2: one generation call
    info!("Generating career recommendation for user {user_id}");
    let doc = call_recommendation_llm(&state.llm, &user, &profile.data, &quiz).await?;

    // Step 3: replace the stored document
    let row = upsert_recommendation(&state.db, user_id, &doc).await?;
    info!(
        "Stored recommendation with {} careers for user {user_id}",
        doc.recommended_careers.len()
    );

    Ok(row)
}

/// Builds the prompt, makes exactly one LLM call, and normalizes the result
/// into a sanitized document.
async fn call_recommendation_llm(
    llm: &LlmClient,
    user: &UserRow,
    profile_data: &serde_json::Value,
    quiz: &QuizRow,
) -> Result<RecommendationDoc, AppError> {
    let prompt = build_recommendation_prompt(user, profile_data, quiz)?;

    let raw = llm
        .call_text(RECOMMENDATION_SYSTEM, &[ChatMessage::user(prompt)])
        .await
        .map_err(|e| AppError::Llm(format!("Recommendation call failed: {e}")))?;

    let mut doc: RecommendationDoc = parse_generated(&raw)?;
    sanitize(&mut doc);
    Ok(doc)
}

/// Fills the prompt template with the serialized inputs.
fn build_recommendation_prompt(
    user: &UserRow,
    profile_data: &serde_json::Value,
    quiz: &QuizRow,
) -> Result<String, AppError> {
    let user_json = serde_json::to_string_pretty(user)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize user: {e}")))?;
    let profile_json = serde_json::to_string_pretty(profile_data)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize profile: {e}")))?;
    let quiz_json = serde_json::to_string_pretty(&quiz.questions)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize quiz: {e}")))?;

    Ok(RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{user_json}", &user_json)
        .replace("{profile_json}", &profile_json)
        .replace("{quiz_json}", &quiz_json))
}

/// Post-parse sanitation. Scores are clamped into 0-100; a short career list
/// is logged but kept. The strict parse already guaranteed the shape, and a
/// model quality miss should not fail the user's request.
fn sanitize(doc: &mut RecommendationDoc) {
    if doc.recommended_careers.len() < MIN_CAREERS {
        warn!(
            "Model returned {} careers (minimum asked: {MIN_CAREERS})",
            doc.recommended_careers.len()
        );
    }

    for career in &mut doc.recommended_careers {
        if !(0.0..=100.0).contains(&career.match_score) {
            warn!(
                "Clamping out-of-range matchScore {} for '{}'",
                career.match_score, career.title
            );
            career.match_score = career.match_score.clamp(0.0, 100.0);
        }
    }
}

/// Atomic create-or-replace of the user's recommendation document.
/// Idempotent under retry: one row per user, last submission wins.
async fn upsert_recommendation(
    pool: &PgPool,
    user_id: Uuid,
    doc: &RecommendationDoc,
) -> Result<RecommendationRow, AppError> {
    let data = serde_json::to_value(doc).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Failed to serialize recommendation: {e}"))
    })?;

    Ok(sqlx::query_as::<_, RecommendationRow>(
        r#"
        INSERT INTO recommendations (id, user_id, data)
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
    .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recommendation::RecommendedCareer;

    fn make_career(title: &str, match_score: f64) -> RecommendedCareer {
        RecommendedCareer {
            title: title.to_string(),
            industry: "Software".to_string(),
            match_score,
            why_recommended: "Fits the profile".to_string(),
            required_skills: vec!["Rust".to_string()],
            average_package: "8-14 LPA".to_string(),
            future_scope: "Growing".to_string(),
            learning_resources: vec![],
            roadmap: vec![],
        }
    }

    fn make_user() -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            age: Some(21),
            education_level: Some("Undergraduate".to_string()),
            interests: vec!["backend".to_string()],
            preferred_industries: vec![],
            linkedin_profile: None,
            location: Some("Pune".to_string()),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_sanitize_clamps_out_of_range_scores() {
        let mut doc = RecommendationDoc {
            recommended_careers: vec![
                make_career("A", 120.0),
                make_career("B", -5.0),
                make_career("C", 88.0),
            ],
            summary: String::new(),
        };

        sanitize(&mut doc);

        assert_eq!(doc.recommended_careers[0].match_score, 100.0);
        assert_eq!(doc.recommended_careers[1].match_score, 0.0);
        assert_eq!(doc.recommended_careers[2].match_score, 88.0);
    }

    #[test]
    fn test_sanitize_keeps_short_career_lists() {
        let mut doc = RecommendationDoc {
            recommended_careers: vec![make_career("Solo", 70.0)],
            summary: "short".to_string(),
        };

        sanitize(&mut doc);

        // Logged, not rejected
        assert_eq!(doc.recommended_careers.len(), 1);
        assert_eq!(doc.summary, "short");
    }

    #[test]
    fn test_prompt_embeds_all_three_inputs() {
        let user = make_user();
        let profile_data = serde_json::json!({"skills": ["Rust"]});
        let quiz = QuizRow {
            id: Uuid::new_v4(),
            user_id: user.id,
            questions: serde_json::json!([{"question": "Q1?", "answer": "A1"}]),
            completed: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let prompt = build_recommendation_prompt(&user, &profile_data, &quiz).unwrap();

        assert!(prompt.contains("Asha Rao"));
        assert!(prompt.contains("Rust"));
        assert!(prompt.contains("A1"));
        assert!(!prompt.contains("{user_json}"));
        assert!(!prompt.contains("{profile_json}"));
        assert!(!prompt.contains("{quiz_json}"));
    }

    #[test]
    fn test_fenced_recommendation_payload_parses_and_sanitizes() {
        let raw = r#"```json
        {
          "recommendedCareers": [
            {
              "title": "Data Engineer",
              "industry": "Software",
              "matchScore": 250,
              "whyRecommended": "Strong SQL background",
              "requiredSkills": ["SQL"],
              "averagePackage": "10 LPA",
              "futureScope": "High demand",
              "learningResources": [],
              "roadmap": []
            }
          ],
          "summary": "Data-leaning profile."
        }
        ```"#;

        let mut doc: RecommendationDoc = parse_generated(raw).unwrap();
        sanitize(&mut doc);
        assert_eq!(doc.recommended_careers[0].match_score, 100.0);
    }
}
