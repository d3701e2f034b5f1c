use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::filters::{CollegeFilter, ResourceFilter, TimelineFilter};
use crate::catalog::{CareerStream, CatalogEvent, College, Resource};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CollegesResponse {
    pub success: bool,
    pub colleges: Vec<College>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub success: bool,
    pub events: Vec<CatalogEvent>,
    /// Events not yet completed.
    pub upcoming: usize,
    pub urgent: usize,
}

#[derive(Debug, Serialize)]
pub struct ResourcesResponse {
    pub success: bool,
    pub resources: Vec<Resource>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct StreamsResponse {
    pub success: bool,
    pub streams: Vec<CareerStream>,
}

#[derive(Debug, Serialize)]
pub struct StreamResponse {
    pub success: bool,
    pub stream: CareerStream,
}

fn query_or<T>(
    query: Result<Query<T>, QueryRejection>,
    message: &'static str,
) -> Result<T, AppError> {
    query.map(|Query(q)| q).map_err(|e| {
        warn!("Rejected query string: {e}");
        AppError::Endpoint(message)
    })
}

/// GET /api/colleges
pub async fn handle_colleges(
    State(state): State<AppState>,
    query: Result<Query<CollegeFilter>, QueryRejection>,
) -> Result<Json<CollegesResponse>, AppError> {
    let filter = query_or(query, "Failed to fetch colleges")?;
    let colleges: Vec<College> = filter
        .apply(&state.catalog.colleges)
        .into_iter()
        .cloned()
        .collect();
    debug!("College filter {filter:?} matched {}", colleges.len());

    Ok(Json(CollegesResponse {
        success: true,
        total: colleges.len(),
        colleges,
    }))
}

/// GET /api/timeline
pub async fn handle_timeline(
    State(state): State<AppState>,
    query: Result<Query<TimelineFilter>, QueryRejection>,
) -> Result<Json<TimelineResponse>, AppError> {
    let filter = query_or(query, "Failed to fetch timeline events")?;
    let events: Vec<CatalogEvent> = filter
        .apply(&state.catalog.timeline)
        .into_iter()
        .cloned()
        .collect();
    let upcoming = events.iter().filter(|e| e.status != "completed").count();
    let urgent = events.iter().filter(|e| e.status == "urgent").count();

    Ok(Json(TimelineResponse {
        success: true,
        events,
        upcoming,
        urgent,
    }))
}

/// GET /api/resources
pub async fn handle_resources(
    State(state): State<AppState>,
    query: Result<Query<ResourceFilter>, QueryRejection>,
) -> Result<Json<ResourcesResponse>, AppError> {
    let filter = query_or(query, "Failed to fetch resources")?;
    let resources: Vec<Resource> = filter
        .apply(&state.catalog.resources)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ResourcesResponse {
        success: true,
        total: resources.len(),
        resources,
    }))
}

/// GET /api/careers
pub async fn handle_streams(State(state): State<AppState>) -> Json<StreamsResponse> {
    Json(StreamsResponse {
        success: true,
        streams: state.catalog.streams.clone(),
    })
}

/// GET /api/careers/:stream
pub async fn handle_stream(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<StreamResponse>, AppError> {
    let stream = state
        .catalog
        .stream(&key)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Career stream '{key}' not found")))?;

    Ok(Json(StreamResponse {
        success: true,
        stream,
    }))
}
