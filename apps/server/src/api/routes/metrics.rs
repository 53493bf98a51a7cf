//! Monitoring routes

use crate::api::handlers::metrics_handler;
use crate::state::AppState;
use axum::{routing::get, Router};

/// `GET /metrics` in the Prometheus text format
pub fn metrics_routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics_handler))
}
