use std::sync::Arc;

use crate::catalog::Catalog;
use crate::quiz::bank::QuestionBank;
use crate::store::GuidanceStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Reference data is built once at start-up and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub questions: Arc<QuestionBank>,
    /// User-scoped persistence. Postgres when configured, in-memory otherwise.
    pub store: Arc<dyn GuidanceStore>,
}
