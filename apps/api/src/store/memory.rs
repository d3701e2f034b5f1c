use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::college::{NewSavedCollege, SavedCollegeRow, SAVED_STATUS};
use crate::models::profile::{ProfileUpdate, UserProfileRow};
use crate::models::quiz_result::{NewQuizResult, QuizResultRow};
use crate::models::timeline::{NewTimelineEvent, TimelineEventRow};
use crate::store::GuidanceStore;

#[derive(Default)]
struct Tables {
    profiles: HashMap<Uuid, UserProfileRow>,
    quiz_results: Vec<QuizResultRow>,
    colleges: Vec<SavedCollegeRow>,
    events: Vec<TimelineEventRow>,
}

/// Process-local store. Rows live until the process exits.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GuidanceStore for MemoryStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<UserProfileRow>, AppError> {
        Ok(self.tables.read().await.profiles.get(&user_id).cloned())
    }

    async fn upsert_profile(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<UserProfileRow, AppError> {
        let mut tables = self.tables.write().await;
        let id = tables
            .profiles
            .get(&user_id)
            .map(|p| p.id)
            .unwrap_or_else(Uuid::new_v4);
        let row = UserProfileRow {
            id,
            user_id,
            full_name: update.full_name.clone(),
            phone: update.phone.clone(),
            date_of_birth: update.date_of_birth,
            location: update.location.clone(),
            school: update.school.clone(),
            current_class: update.current_class.clone(),
            stream: update.stream.clone(),
            interests: update.interests.clone(),
            career_goals: update.career_goals.clone(),
            updated_at: Utc::now(),
        };
        tables.profiles.insert(user_id, row.clone());
        Ok(row)
    }

    async fn save_quiz_result(
        &self,
        user_id: Uuid,
        result: NewQuizResult,
    ) -> Result<QuizResultRow, AppError> {
        let row = QuizResultRow {
            id: Uuid::new_v4(),
            user_id,
            quiz_type: result.quiz_type,
            answers: result.answers,
            results: result.results,
            completed_at: Utc::now(),
        };
        self.tables.write().await.quiz_results.push(row.clone());
        Ok(row)
    }

    async fn list_quiz_results(&self, user_id: Uuid) -> Result<Vec<QuizResultRow>, AppError> {
        // insertion order is chronological
        Ok(self
            .tables
            .read()
            .await
            .quiz_results
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn save_college(
        &self,
        user_id: Uuid,
        college: &NewSavedCollege,
    ) -> Result<SavedCollegeRow, AppError> {
        let row = SavedCollegeRow {
            id: Uuid::new_v4(),
            user_id,
            college_name: college.college_name.clone(),
            college_id: college.college_id.clone(),
            status: SAVED_STATUS.to_string(),
            created_at: Utc::now(),
        };
        self.tables.write().await.colleges.push(row.clone());
        Ok(row)
    }

    async fn list_saved_colleges(&self, user_id: Uuid) -> Result<Vec<SavedCollegeRow>, AppError> {
        Ok(self
            .tables
            .read()
            .await
            .colleges
            .iter()
            .rev()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn add_timeline_event(
        &self,
        user_id: Uuid,
        event: &NewTimelineEvent,
    ) -> Result<TimelineEventRow, AppError> {
        let row = TimelineEventRow {
            id: Uuid::new_v4(),
            user_id,
            title: event.title.clone(),
            description: event.description.clone(),
            event_date: event.event_date,
            category: event.category.clone(),
            status: event.status.clone(),
            reminder_set: event.reminder_set,
            created_at: Utc::now(),
        };
        self.tables.write().await.events.push(row.clone());
        Ok(row)
    }

    async fn list_timeline_events(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<TimelineEventRow>, AppError> {
        let mut events: Vec<_> = self
            .tables
            .read()
            .await
            .events
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.event_date);
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn profile(name: &str) -> ProfileUpdate {
        ProfileUpdate {
            full_name: name.to_string(),
            phone: None,
            date_of_birth: None,
            location: Some("Delhi".to_string()),
            school: None,
            current_class: Some("12".to_string()),
            stream: Some("science-pcm".to_string()),
            interests: vec!["robotics".to_string()],
            career_goals: None,
        }
    }

    fn event(title: &str, date: (i32, u32, u32)) -> NewTimelineEvent {
        NewTimelineEvent {
            title: title.to_string(),
            description: String::new(),
            event_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            category: "exam".to_string(),
            status: "upcoming".to_string(),
            reminder_set: false,
        }
    }

    #[tokio::test]
    async fn test_missing_profile_is_none() {
        let store = MemoryStore::new();
        assert!(store.get_profile(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_keeps_profile_id() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        let first = store.upsert_profile(user, &profile("Asha")).await.unwrap();
        let second = store.upsert_profile(user, &profile("Asha K")).await.unwrap();
        assert_eq!(first.id, second.id);
        let fetched = store.get_profile(user).await.unwrap().unwrap();
        assert_eq!(fetched.full_name, "Asha K");
    }

    #[tokio::test]
    async fn test_quiz_results_newest_first_and_scoped() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        let other = Uuid::new_v4();
        for quiz_type in ["first", "second"] {
            store
                .save_quiz_result(
                    user,
                    NewQuizResult {
                        quiz_type: quiz_type.to_string(),
                        answers: json!({}),
                        results: json!({}),
                    },
                )
                .await
                .unwrap();
        }
        store
            .save_quiz_result(
                other,
                NewQuizResult {
                    quiz_type: "foreign".to_string(),
                    answers: json!({}),
                    results: json!({}),
                },
            )
            .await
            .unwrap();

        let results = store.list_quiz_results(user).await.unwrap();
        let types: Vec<_> = results.iter().map(|r| r.quiz_type.as_str()).collect();
        assert_eq!(types, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_saved_college_status() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        let row = store
            .save_college(
                user,
                &NewSavedCollege {
                    college_name: "NMIMS Mumbai".to_string(),
                    college_id: "3".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(row.status, SAVED_STATUS);
        assert_eq!(store.list_saved_colleges(user).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_timeline_sorted_by_date() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        store
            .add_timeline_event(user, &event("later", (2024, 5, 1)))
            .await
            .unwrap();
        store
            .add_timeline_event(user, &event("sooner", (2024, 2, 1)))
            .await
            .unwrap();
        let titles: Vec<_> = store
            .list_timeline_events(user)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["sooner", "later"]);
    }
}
