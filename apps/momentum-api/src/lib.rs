//! HTTP surface over the momentum engine.

pub mod error;
pub mod requests;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use error::ApiError;
pub use state::AppState;

/// All routes, open to cross-origin browser clients
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/chart", post(routes::chart))
        .route("/chart/anchors", post(routes::anchors))
        .route("/chart/days", post(routes::days))
        .route("/api/panel", post(routes::panel))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
