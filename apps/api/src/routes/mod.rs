pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::errors::AppError;
use crate::profile::handlers as me;
use crate::quiz::handlers as quiz;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation & quiz
        .route("/api/recommendations", post(quiz::handle_recommendations))
        .route("/api/quiz/analyze", post(quiz::handle_analyze))
        .route("/api/quiz/questions", get(quiz::handle_questions))
        .route(
            "/api/quiz/recommendations/:category",
            get(quiz::handle_category_recommendation),
        )
        // Reference catalog
        .route("/api/colleges", get(catalog::handle_colleges))
        .route("/api/timeline", get(catalog::handle_timeline))
        .route("/api/resources", get(catalog::handle_resources))
        .route("/api/careers", get(catalog::handle_streams))
        .route("/api/careers/:stream", get(catalog::handle_stream))
        // Signed-in user
        .route(
            "/api/me/profile",
            get(me::handle_get_profile).put(me::handle_put_profile),
        )
        .route(
            "/api/me/quiz-results",
            get(me::handle_list_quiz_results).post(me::handle_save_quiz_result),
        )
        .route(
            "/api/me/colleges",
            get(me::handle_list_colleges).post(me::handle_save_college),
        )
        .route(
            "/api/me/timeline",
            get(me::handle_list_events).post(me::handle_add_event),
        )
        .fallback(not_found)
        .with_state(state)
}
