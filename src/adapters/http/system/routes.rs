//! HTTP routes for service info and health.

use axum::{routing::get, Router};

use super::handlers::{health, service_info, SystemHandlers};

/// Creates the router for `/` and `/health`.
pub fn system_routes(handlers: SystemHandlers) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .with_state(handlers)
}
