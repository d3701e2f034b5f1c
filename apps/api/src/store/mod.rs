//! User-scoped persistence: profile, quiz results, saved colleges, personal timeline.
//!
//! `AppState` holds an `Arc<dyn GuidanceStore>`; `PgStore` backs it when a
//! database is configured, `MemoryStore` otherwise (and in tests).
//! Single-row lookups that find nothing return `Ok(None)`.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::college::{NewSavedCollege, SavedCollegeRow};
use crate::models::profile::{ProfileUpdate, UserProfileRow};
use crate::models::quiz_result::{NewQuizResult, QuizResultRow};
use crate::models::timeline::{NewTimelineEvent, TimelineEventRow};

#[async_trait]
pub trait GuidanceStore: Send + Sync {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<UserProfileRow>, AppError>;

    async fn upsert_profile(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<UserProfileRow, AppError>;

    async fn save_quiz_result(
        &self,
        user_id: Uuid,
        result: NewQuizResult,
    ) -> Result<QuizResultRow, AppError>;

    /// Newest first.
    async fn list_quiz_results(&self, user_id: Uuid) -> Result<Vec<QuizResultRow>, AppError>;

    async fn save_college(
        &self,
        user_id: Uuid,
        college: &NewSavedCollege,
    ) -> Result<SavedCollegeRow, AppError>;

    /// Newest first.
    async fn list_saved_colleges(&self, user_id: Uuid) -> Result<Vec<SavedCollegeRow>, AppError>;

    async fn add_timeline_event(
        &self,
        user_id: Uuid,
        event: &NewTimelineEvent,
    ) -> Result<TimelineEventRow, AppError>;

    /// Ascending by event date.
    async fn list_timeline_events(&self, user_id: Uuid)
        -> Result<Vec<TimelineEventRow>, AppError>;
}
