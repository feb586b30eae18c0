//! Response bodies for the service info and health endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Service description returned from `/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

impl ServiceInfoResponse {
    pub fn current() -> Self {
        let endpoints = [
            ("get_reviews", "GET /api/reviews"),
            ("create_review", "POST /api/reviews"),
            ("whatsapp_webhook", "POST /webhook/whatsapp"),
            ("health", "GET /health"),
        ]
        .into_iter()
        .map(|(name, route)| (name.to_string(), route.to_string()))
        .collect();

        Self {
            message: "WhatsApp Review Collector API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints,
        }
    }
}

/// Health probe result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            database: "connected".to_string(),
            error: None,
        }
    }

    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            status: "unhealthy".to_string(),
            database: "disconnected".to_string(),
            error: Some(error.into()),
        }
    }
}
