use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::college::{NewSavedCollege, SavedCollegeRow, SAVED_STATUS};
use crate::models::profile::{ProfileUpdate, UserProfileRow};
use crate::models::quiz_result::{NewQuizResult, QuizResultRow};
use crate::models::timeline::{NewTimelineEvent, TimelineEventRow};
use crate::store::GuidanceStore;

/// Postgres-backed store. Schema lives in `migrations/`.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuidanceStore for PgStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<UserProfileRow>, AppError> {
        Ok(
            sqlx::query_as::<_, UserProfileRow>("SELECT * FROM user_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn upsert_profile(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<UserProfileRow, AppError> {
        let row = sqlx::query_as::<_, UserProfileRow>(
            r#"
            INSERT INTO user_profiles
                (user_id, full_name, phone, date_of_birth, location, school,
                 current_class, stream, interests, career_goals)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (user_id) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                phone = EXCLUDED.phone,
                date_of_birth = EXCLUDED.date_of_birth,
                location = EXCLUDED.location,
                school = EXCLUDED.school,
                current_class = EXCLUDED.current_class,
                stream = EXCLUDED.stream,
                interests = EXCLUDED.interests,
                career_goals = EXCLUDED.career_goals,
                updated_at = now()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&update.full_name)
        .bind(&update.phone)
        .bind(update.date_of_birth)
        .bind(&update.location)
        .bind(&update.school)
        .bind(&update.current_class)
        .bind(&update.stream)
        .bind(&update.interests)
        .bind(&update.career_goals)
        .fetch_one(&self.pool)
        .await?;

        info!("Upserted profile for user {user_id}");
        Ok(row)
    }

    async fn save_quiz_result(
        &self,
        user_id: Uuid,
        result: NewQuizResult,
    ) -> Result<QuizResultRow, AppError> {
        let row = sqlx::query_as::<_, QuizResultRow>(
            r#"
            INSERT INTO quiz_results (user_id, quiz_type, answers, results)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&result.quiz_type)
        .bind(&result.answers)
        .bind(&result.results)
        .fetch_one(&self.pool)
        .await?;

        info!("Stored {} quiz result {} for user {user_id}", row.quiz_type, row.id);
        Ok(row)
    }

    async fn list_quiz_results(&self, user_id: Uuid) -> Result<Vec<QuizResultRow>, AppError> {
        Ok(sqlx::query_as::<_, QuizResultRow>(
            "SELECT * FROM quiz_results WHERE user_id = $1 ORDER BY completed_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn save_college(
        &self,
        user_id: Uuid,
        college: &NewSavedCollege,
    ) -> Result<SavedCollegeRow, AppError> {
        Ok(sqlx::query_as::<_, SavedCollegeRow>(
            r#"
            INSERT INTO user_colleges (user_id, college_name, college_id, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&college.college_name)
        .bind(&college.college_id)
        .bind(SAVED_STATUS)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_saved_colleges(&self, user_id: Uuid) -> Result<Vec<SavedCollegeRow>, AppError> {
        Ok(sqlx::query_as::<_, SavedCollegeRow>(
            "SELECT * FROM user_colleges WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn add_timeline_event(
        &self,
        user_id: Uuid,
        event: &NewTimelineEvent,
    ) -> Result<TimelineEventRow, AppError> {
        Ok(sqlx::query_as::<_, TimelineEventRow>(
            r#"
            INSERT INTO timeline_events
                (user_id, title, description, event_date, category, status, reminder_set)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.event_date)
        .bind(&event.category)
        .bind(&event.status)
        .bind(event.reminder_set)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_timeline_events(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<TimelineEventRow>, AppError> {
        Ok(sqlx::query_as::<_, TimelineEventRow>(
            "SELECT * FROM timeline_events WHERE user_id = $1 ORDER BY event_date ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
