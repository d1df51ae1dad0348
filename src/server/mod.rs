// src/server/mod.rs

pub mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use color_eyre::eyre::Result;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use self::state::AppState;

/// Assembles the full route table over the shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/scan", post(routes::scan_handler))
        .route("/task_status/:task_id", get(routes::task_status_handler))
        .route("/events/:task_id", get(routes::events_handler))
        .route("/ai-recommendation", post(routes::ai_recommendation_handler))
        .route("/health", get(routes::health_handler))
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Binds the listener and serves requests until shutdown.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "Listening.");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
