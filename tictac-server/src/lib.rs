//! TicTac Server - HTTP API around the move engine
//!
//! This crate provides the request/response surface:
//! - AI move endpoint (all difficulty tiers)
//! - Full position analysis
//! - Algorithm description
//! - Status endpoint

mod error;
mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tictac_core::{EngineConfig, MoveEngine};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use routes::ai::{EvaluateResponse, MoveRequest, Performance};
pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    /// Seed for per-request randomness; None draws from OS entropy
    pub seed: Option<u64>,
    pub engine: EngineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            seed: None,
            engine: EngineConfig::default(),
        }
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // AI API
        .route("/api/ai/move", post(routes::ai::get_ai_move))
        .route("/api/ai/evaluate", post(routes::ai::evaluate_position))
        .route("/api/ai/algorithm", get(routes::algorithm::get_algorithm))
        // Shared state
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Build shared state from configuration
pub fn build_state(config: &ServerConfig) -> anyhow::Result<Arc<ServerState>> {
    let engine = MoveEngine::new(config.engine.clone())?;
    Ok(Arc::new(ServerState::new(engine, config.seed)))
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = build_state(&config)?;
    let router = create_router(state);

    tracing::info!("TicTac engine server starting on http://0.0.0.0:{}", config.port);
    tracing::info!(
        "Medium tier: depth {}, random rate {}",
        config.engine.medium_depth,
        config.engine.medium_random_rate
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
