//! HTTP routes for review endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_review, list_reviews, ReviewHandlers};

/// Creates the review router, mounted at `/api/reviews`.
pub fn review_routes(handlers: ReviewHandlers) -> Router {
    Router::new()
        .route("/", get(list_reviews).post(create_review))
        .with_state(handlers)
}
