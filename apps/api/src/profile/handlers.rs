//! Axum route handlers for the signed-in user's own records.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::models::college::{NewSavedCollege, SavedCollegeRow};
use crate::models::profile::{ProfileUpdate, UserProfileRow};
use crate::models::quiz_result::{NewQuizResult, QuizResultRow};
use crate::models::timeline::{NewTimelineEvent, TimelineEventRow};
use crate::quiz::analysis::analyze_answers;
use crate::quiz::models::AnswerSet;
use crate::state::AppState;

const DEFAULT_QUIZ_TYPE: &str = "aptitude";

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(v)| v)
        .map_err(|e| AppError::Validation(e.body_text()))
}

fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    /// `null` when the user has not created a profile yet.
    pub profile: Option<UserProfileRow>,
}

#[derive(Debug, Deserialize)]
pub struct SaveQuizResultRequest {
    pub quiz_type: Option<String>,
    pub answers: AnswerSet,
}

#[derive(Debug, Serialize)]
pub struct QuizResultResponse {
    pub success: bool,
    pub result: QuizResultRow,
}

#[derive(Debug, Serialize)]
pub struct QuizResultsResponse {
    pub success: bool,
    pub results: Vec<QuizResultRow>,
}

#[derive(Debug, Serialize)]
pub struct SavedCollegeResponse {
    pub success: bool,
    pub college: SavedCollegeRow,
}

#[derive(Debug, Serialize)]
pub struct SavedCollegesResponse {
    pub success: bool,
    pub colleges: Vec<SavedCollegeRow>,
}

#[derive(Debug, Serialize)]
pub struct TimelineEventResponse {
    pub success: bool,
    pub event: TimelineEventRow,
}

#[derive(Debug, Serialize)]
pub struct TimelineEventsResponse {
    pub success: bool,
    pub events: Vec<TimelineEventRow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/me/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = state.store.get_profile(user_id).await?;
    Ok(Json(ProfileResponse {
        success: true,
        profile,
    }))
}

/// PUT /api/me/profile
pub async fn handle_put_profile(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<ProfileUpdate>, JsonRejection>,
) -> Result<Json<ProfileResponse>, AppError> {
    let update = body(payload)?;
    require_non_empty("full_name", &update.full_name)?;

    let profile = state.store.upsert_profile(user_id, &update).await?;
    Ok(Json(ProfileResponse {
        success: true,
        profile: Some(profile),
    }))
}

/// POST /api/me/quiz-results
///
/// Scores the submitted answers and stores answers and analysis together.
pub async fn handle_save_quiz_result(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<SaveQuizResultRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<QuizResultResponse>), AppError> {
    let request = body(payload)?;
    let analysis = analyze_answers(&request.answers, &state.questions);

    let new_result = NewQuizResult {
        quiz_type: request
            .quiz_type
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_QUIZ_TYPE.to_string()),
        answers: serde_json::to_value(&request.answers).map_err(|e| AppError::Internal(e.into()))?,
        results: serde_json::to_value(&analysis).map_err(|e| AppError::Internal(e.into()))?,
    };
    let result = state.store.save_quiz_result(user_id, new_result).await?;
    info!(
        "Saved quiz result {} (dominant {}) for user {user_id}",
        result.id, analysis.dominant_skill
    );

    Ok((
        StatusCode::CREATED,
        Json(QuizResultResponse {
            success: true,
            result,
        }),
    ))
}

/// GET /api/me/quiz-results
pub async fn handle_list_quiz_results(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<QuizResultsResponse>, AppError> {
    let results = state.store.list_quiz_results(user_id).await?;
    Ok(Json(QuizResultsResponse {
        success: true,
        results,
    }))
}

/// POST /api/me/colleges
pub async fn handle_save_college(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<NewSavedCollege>, JsonRejection>,
) -> Result<(StatusCode, Json<SavedCollegeResponse>), AppError> {
    let college = body(payload)?;
    require_non_empty("college_name", &college.college_name)?;
    require_non_empty("college_id", &college.college_id)?;

    let college = state.store.save_college(user_id, &college).await?;
    Ok((
        StatusCode::CREATED,
        Json(SavedCollegeResponse {
            success: true,
            college,
        }),
    ))
}

/// GET /api/me/colleges
pub async fn handle_list_colleges(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<SavedCollegesResponse>, AppError> {
    let colleges = state.store.list_saved_colleges(user_id).await?;
    Ok(Json(SavedCollegesResponse {
        success: true,
        colleges,
    }))
}

/// POST /api/me/timeline
pub async fn handle_add_event(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<NewTimelineEvent>, JsonRejection>,
) -> Result<(StatusCode, Json<TimelineEventResponse>), AppError> {
    let event = body(payload)?;
    require_non_empty("title", &event.title)?;
    require_non_empty("category", &event.category)?;

    let event = state.store.add_timeline_event(user_id, &event).await?;
    Ok((
        StatusCode::CREATED,
        Json(TimelineEventResponse {
            success: true,
            event,
        }),
    ))
}

/// GET /api/me/timeline
pub async fn handle_list_events(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<TimelineEventsResponse>, AppError> {
    let events = state.store.list_timeline_events(user_id).await?;
    Ok(Json(TimelineEventsResponse {
        success: true,
        events,
    }))
}
