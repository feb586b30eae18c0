//! Top-level HTTP router.
//!
//! Mounts every endpoint group and applies the shared layers: request
//! tracing, a request timeout and CORS for the review dashboard.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::application::handlers::conversation::HandleInboundMessageHandler;
use crate::application::handlers::review::{CreateReviewHandler, ListReviewsHandler};
use crate::config::ServerConfig;
use crate::ports::{ConversationStateStore, ReviewRepository};

use super::review::{review_routes, ReviewHandlers};
use super::system::{system_routes, SystemHandlers};
use super::webhook::{webhook_routes, WebhookHandlers};

/// State for every endpoint group.
#[derive(Clone)]
pub struct HttpHandlers {
    pub webhook: WebhookHandlers,
    pub reviews: ReviewHandlers,
    pub system: SystemHandlers,
}

impl HttpHandlers {
    /// Wires the application handlers onto the given ports.
    pub fn from_ports(
        store: Arc<dyn ConversationStateStore>,
        repository: Arc<dyn ReviewRepository>,
        persist_timeout: Duration,
        query_timeout: Duration,
    ) -> Self {
        let message_handler = Arc::new(HandleInboundMessageHandler::new(
            store,
            Arc::clone(&repository),
            persist_timeout,
        ));

        Self {
            webhook: WebhookHandlers::new(message_handler),
            reviews: ReviewHandlers::new(
                Arc::new(CreateReviewHandler::new(
                    Arc::clone(&repository),
                    query_timeout,
                )),
                Arc::new(ListReviewsHandler::new(
                    Arc::clone(&repository),
                    query_timeout,
                )),
            ),
            system: SystemHandlers::new(repository),
        }
    }
}

/// Builds the application router.
pub fn api_router(handlers: HttpHandlers, server: &ServerConfig) -> Router {
    Router::new()
        .merge(system_routes(handlers.system))
        .nest("/api/reviews", review_routes(handlers.reviews))
        .nest("/webhook", webhook_routes(handlers.webhook))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
