#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Account row with the self-reported setup fields.
/// Credential auth and session issuance live in an external service; this API
/// always receives an already-resolved user id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub education_level: Option<String>,
    pub interests: Vec<String>,
    pub preferred_industries: Vec<String>,
    pub linkedin_profile: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
