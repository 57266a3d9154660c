//! Structured profile extraction from flattened resume text.
//!
//! One extraction equals one LLM call: the raw response is normalized and
//! strictly parsed into `ProfileDoc`, with per-field defaults covering
//! anything the model nulled out or omitted. Capability failures and
//! malformed output both abandon the attempt; nothing partial is stored.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{ChatMessage, LlmClient};
use crate::models::profile::ProfileDoc;
use crate::normalize::parse_generated;
use crate::resume::prompts::PROFILE_EXTRACTION_SYSTEM;

/// Runs one extraction call over the flattened resume text and returns the
/// typed document with defaults applied.
pub async fn extract_profile(llm: &LlmClient, resume_text: &str) -> Result<ProfileDoc, AppError> {
    let messages = [ChatMessage::user(resume_text)];
    let raw = llm
        .call_text(PROFILE_EXTRACTION_SYSTEM, &messages)
        .await
        .map_err(|e| AppError::Llm(format!("Profile extraction call failed: {e}")))?;

    let doc: ProfileDoc = parse_generated(&raw)?;
    info!(
        "Extracted profile: {} education, {} experience, {} skills",
        doc.education.len(),
        doc.experience.len(),
        doc.skills.len()
    );
    Ok(doc)
}
