use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct UserProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub location: Option<String>,
    pub school: Option<String>,
    pub current_class: Option<String>,
    /// Academic stream identifier, e.g. `science-pcm` or `commerce`.
    pub stream: Option<String>,
    pub interests: Vec<String>,
    pub career_goals: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `PUT /api/me/profile`. Replaces every field on upsert.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub location: Option<String>,
    pub school: Option<String>,
    pub current_class: Option<String>,
    pub stream: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub career_goals: Option<String>,
}
