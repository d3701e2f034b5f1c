//! Axum route handlers for recommendations and quiz analysis.
//!
//! Failures on the recommendation and analysis routes, including an unreadable
//! body, render as a 500 carrying the route's static message.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::quiz::analysis::{analyze_answers, QuizAnalysis};
use crate::quiz::models::{AnswerSet, Question, RecommendationRecord};
use crate::quiz::recommendation::{
    careers_for_stream, lookup_recommendation, CareerMatch, RecommendationKey, Stream,
};
use crate::state::AppState;

const RECOMMENDATIONS_FAILED: &str = "Failed to generate recommendations";
const ANALYSIS_FAILED: &str = "Failed to analyze quiz results";

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    #[serde(rename = "userProfile")]
    pub user_profile: Option<ProfileSignals>,
}

/// The part of a user profile the stream table keys on. Other fields are ignored.
/// `stream` stays untyped so a non-string value resolves to the fallback stream.
#[derive(Debug, Deserialize)]
pub struct ProfileSignals {
    pub stream: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    pub recommendations: &'static [CareerMatch],
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub answers: Option<AnswerSet>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: QuizAnalysis,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryRecommendationResponse {
    pub success: bool,
    /// `false` when the key was not a known category and the fallback was served.
    pub matched: bool,
    pub recommendation: RecommendationRecord,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/recommendations
pub async fn handle_recommendations(
    payload: Result<Json<RecommendationsRequest>, JsonRejection>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected recommendations body: {e}");
        AppError::Endpoint(RECOMMENDATIONS_FAILED)
    })?;
    let profile = request
        .user_profile
        .ok_or(AppError::Endpoint(RECOMMENDATIONS_FAILED))?;

    let stream = Stream::resolve(profile.stream.as_ref().and_then(|v| v.as_str()));
    info!("Recommendations requested for stream {}", stream.as_str());

    Ok(Json(RecommendationsResponse {
        success: true,
        recommendations: careers_for_stream(stream),
        timestamp: timestamp(),
    }))
}

/// POST /api/quiz/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected quiz analysis body: {e}");
        AppError::Endpoint(ANALYSIS_FAILED)
    })?;
    let answers = request.answers.ok_or(AppError::Endpoint(ANALYSIS_FAILED))?;

    let analysis = analyze_answers(&answers, &state.questions);
    info!(
        "Analyzed {} answers, dominant skill {}",
        answers.len(),
        analysis.dominant_skill
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
        timestamp: timestamp(),
    }))
}

/// GET /api/quiz/questions
pub async fn handle_questions(State(state): State<AppState>) -> Json<QuestionsResponse> {
    let questions = state.questions.questions().to_vec();
    Json(QuestionsResponse {
        success: true,
        total: questions.len(),
        questions,
    })
}

/// GET /api/quiz/recommendations/:category
pub async fn handle_category_recommendation(
    Path(raw): Path<String>,
) -> Json<CategoryRecommendationResponse> {
    let key = RecommendationKey::from_raw(&raw);
    Json(CategoryRecommendationResponse {
        success: true,
        matched: matches!(key, RecommendationKey::Category(_)),
        recommendation: lookup_recommendation(&key),
    })
}
