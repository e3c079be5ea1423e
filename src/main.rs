//! Anomaly Detection Mock API Server
//!
//! Simulates a real-time anomaly detection service for demos: synthetic
//! predictions, a static model health record and synthetic incident reports.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  ANOMALY DETECTION MOCK API                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌────────────────┐  ┌────────────────────┐  │
//! │  │  Router   │  │  Schema checks │  │  Model health      │  │
//! │  │  (Axum)   │  │  (validator)   │  │  (static, shared)  │  │
//! │  └─────┬─────┘  └───────┬────────┘  └─────────┬──────────┘  │
//! │        └────────────────┼─────────────────────┘             │
//! │                         ▼                                   │
//! │          ┌───────────────────────────────┐                  │
//! │          │  Mock generators              │                  │
//! │          │  (RandomSource + Clock)       │                  │
//! │          └───────────────────────────────┘                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod models;
mod mock;
mod handlers;
mod error;

use std::sync::Arc;

use anyhow::Context;
use axum::{Router, routing::get};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use validator::Validate;

use config::{Config, LogFormat};
use mock::{Clock, RandomSource, SystemClock, ThreadRandom};
use models::ModelHealthRecord;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging
    init_tracing(config.log_format);

    tracing::info!("Anomaly Detection API starting...");
    tracing::info!(
        "Environment: {}, reports endpoint {}",
        config.environment,
        if config.enable_reports { "enabled" } else { "disabled" }
    );
    if config.is_production() {
        tracing::warn!("CORS allows every origin, method and header");
    }

    // Static health record, checked once before serving
    let health = ModelHealthRecord::mock();
    health.validate().context("Static model health record is invalid")?;

    let state = AppState::new(config.clone(), health);
    let app = create_router(state);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "anomaly_mock_api=debug,tower_http=debug".into()));

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub health: Arc<ModelHealthRecord>,
    pub rng: Arc<dyn RandomSource>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: Config, health: ModelHealthRecord) -> Self {
        Self::with_sources(config, health, Arc::new(ThreadRandom), Arc::new(SystemClock))
    }

    pub fn with_sources(
        config: Config,
        health: ModelHealthRecord,
        rng: Arc<dyn RandomSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            health: Arc::new(health),
            rng,
            clock,
        }
    }
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let mut routes = Router::new()
        .route("/", get(handlers::root::status))
        .route("/predict", get(handlers::predict::predict))
        .route("/health", get(handlers::health::check))
        .route("/openapi.json", get(handlers::openapi::spec));

    if state.config.enable_reports {
        routes = routes.route("/reports", get(handlers::reports::list));
    }

    routes
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
