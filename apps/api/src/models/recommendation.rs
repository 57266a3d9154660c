#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::normalize::null_to_default;

/// Stored recommendation row. `data` holds the generated document as JSONB.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecommendationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The career recommendation document the model is instructed to produce.
///
/// Core career fields are required: a response missing any of them fails the
/// strict parse and the request errors rather than storing a partial document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationDoc {
    #[serde(default, deserialize_with = "null_to_default")]
    pub recommended_careers: Vec<RecommendedCareer>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedCareer {
    pub title: String,
    pub industry: String,
    /// 0-100 fit score. Out-of-range values are clamped after parsing.
    pub match_score: f64,
    pub why_recommended: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub required_skills: Vec<String>,
    pub average_package: String,
    pub future_scope: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub learning_resources: Vec<LearningResource>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub roadmap: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResource {
    pub name: String,
    pub link: String,
    /// Resource kind, e.g. "Online Course", "Book", "Project".
    #[serde(rename = "type")]
    pub resource_type: String,
}
