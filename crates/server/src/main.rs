//! # sensorwatch-server
//!
//! REST API server for the sensorwatch anomaly scoring pipeline.
//! Loads the trained artifacts once at startup and scores uploaded CSV
//! batches against them.

use axum::{
    routing::{get, post},
    Json, Router,
};
use pipeline::ScoringContext;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    context: Arc<ScoringContext>,
}

/// Liveness probe - is the server running?
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - are the scoring artifacts loaded?
async fn readiness(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    // The context is immutable once loaded, so readiness reduces to
    // reporting the parameters the server is scoring with.
    Json(serde_json::json!({
        "status": "ready",
        "version": env!("CARGO_PKG_VERSION"),
        "time_steps": state.context.time_steps(),
    }))
}

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sensorwatch_server=info,tower_http=info".into()),
        )
        .init();

    // Load trained artifacts once; scoring requests never touch disk.
    let artifacts_dir = env::var("ARTIFACTS_DIR").unwrap_or_else(|_| "artifacts".to_string());
    let context = match ScoringContext::load(&artifacts_dir) {
        Ok(context) => context,
        Err(e) => {
            tracing::error!("failed to load artifacts from {}: {}", artifacts_dir, e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "loaded artifacts from {} (time_steps={})",
        artifacts_dir,
        context.time_steps()
    );

    let state = AppState {
        context: Arc::new(context),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with middleware
    let app = Router::new()
        // Health endpoints (Kubernetes-compatible)
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        // Legacy health endpoint
        .route("/health", get(liveness))
        // API endpoints
        .route("/api/v1/score", post(routes::score))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Server configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a valid number");
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid HOST:PORT configuration");

    tracing::info!(
        "sensorwatch-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
