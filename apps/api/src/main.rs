mod auth;
mod catalog;
mod config;
mod db;
mod errors;
mod models;
mod profile;
mod quiz;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::db::create_pool;
use crate::quiz::bank::QuestionBank;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{GuidanceStore, MemoryStore, PgStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting EduGuide API v{}", env!("CARGO_PKG_VERSION"));

    // Reference data is read once and shared immutably
    let catalog = Catalog::load(config.catalog_path.as_deref())?;
    let questions = QuestionBank::aptitude();
    info!("Question bank loaded ({} questions)", questions.len());

    let store: Arc<dyn GuidanceStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url, config.database_max_connections).await?;
            Arc::new(PgStore::new(pool))
        }
        None => {
            info!("DATABASE_URL not set; user records are kept in memory");
            Arc::new(MemoryStore::new())
        }
    };

    let state = AppState {
        catalog: Arc::new(catalog),
        questions: Arc::new(questions),
        store,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
