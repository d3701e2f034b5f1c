use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const SAVED_STATUS: &str = "saved";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedCollegeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub college_name: String,
    pub college_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSavedCollege {
    pub college_name: String,
    pub college_id: String,
}
