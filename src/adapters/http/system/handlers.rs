//! HTTP handlers for service info and health.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::ports::ReviewRepository;

use super::dto::{HealthResponse, ServiceInfoResponse};

#[derive(Clone)]
pub struct SystemHandlers {
    repository: Arc<dyn ReviewRepository>,
}

impl SystemHandlers {
    pub fn new(repository: Arc<dyn ReviewRepository>) -> Self {
        Self { repository }
    }
}

/// GET / - Service name and endpoint map
pub async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse::current())
}

/// GET /health - Review store connectivity
pub async fn health(State(handlers): State<SystemHandlers>) -> Response {
    match handlers.repository.health_check().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::healthy())).into_response(),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::unhealthy(e.to_string())),
            )
                .into_response()
        }
    }
}
