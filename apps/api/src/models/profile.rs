#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::normalize::null_to_default;

/// Stored profile row. `data` holds the canonical profile document as JSONB.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The canonical profile document persisted in `profiles.data`.
///
/// Keys are camelCase: this is both the schema the extraction model is
/// instructed to produce and the shape clients consume. Top-level sections
/// default to empty when the extraction returns `null` or omits them; leaf
/// fields stay `Option` so unknown values persist as `null` rather than `""`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDoc {
    #[serde(default, deserialize_with = "null_to_default")]
    pub personal_info: PersonalInfo,
    #[serde(default, deserialize_with = "null_to_default")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub certifications: Vec<Certification>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub languages: Vec<Language>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub social_profiles: SocialProfiles,
    #[serde(default, deserialize_with = "null_to_default")]
    pub awards: Vec<Award>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub interests: Vec<String>,
    /// Flattened source text the document was extracted from.
    /// Never produced by the model; attached by `into_stored`.
    #[serde(default)]
    pub raw_resume_text: String,
    /// Opaque imported blob. Kept as raw JSON so external importers can stash
    /// whatever shape they have.
    #[serde(
        rename = "rawLinkedInData",
        default = "empty_object",
        deserialize_with = "null_to_empty_object"
    )]
    pub raw_linkedin_data: Value,
}

impl ProfileDoc {
    /// Finalizes an extracted document for storage by attaching the flattened
    /// source text. The stored document replaces any previous one wholesale.
    pub fn into_stored(mut self, raw_resume_text: String) -> ProfileDoc {
        self.raw_resume_text = raw_resume_text;
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub issue_date: Option<String>,
    pub expiration_date: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub name: Option<String>,
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfiles {
    pub linked_in: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub title: Option<String>,
    pub date: Option<String>,
    pub issuer: Option<String>,
    pub description: Option<String>,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

fn null_to_empty_object<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.unwrap_or_else(empty_object))
}
