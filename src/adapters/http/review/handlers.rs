//! HTTP handlers for review endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::handlers::review::{
    CreateReviewCommand, CreateReviewHandler, ListReviewsHandler,
};
use crate::domain::review::ReviewError;
use crate::ports::StorageError;

use super::dto::{CreateReviewRequest, ErrorResponse, ReviewResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ReviewHandlers {
    create_handler: Arc<CreateReviewHandler>,
    list_handler: Arc<ListReviewsHandler>,
}

impl ReviewHandlers {
    pub fn new(
        create_handler: Arc<CreateReviewHandler>,
        list_handler: Arc<ListReviewsHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/reviews - List all reviews, newest first
pub async fn list_reviews(State(handlers): State<ReviewHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(reviews) => {
            let response: Vec<ReviewResponse> =
                reviews.into_iter().map(ReviewResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_review_error(e),
    }
}

/// POST /api/reviews - Submit a review directly
pub async fn create_review(
    State(handlers): State<ReviewHandlers>,
    Json(req): Json<CreateReviewRequest>,
) -> Response {
    let cmd = CreateReviewCommand {
        contact_number: req.contact_number,
        user_name: req.user_name,
        product_name: req.product_name,
        review_text: req.review_text,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(review) => {
            let response = ReviewResponse::from(review);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_review_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_review_error(error: ReviewError) -> Response {
    let status = match &error {
        ReviewError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        ReviewError::Storage(StorageError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        ReviewError::Storage(StorageError::Timeout(_) | StorageError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    if status.is_server_error() {
        error!(error = %error, "Review storage failure");
    }

    (
        status,
        Json(ErrorResponse::new(error.code().to_string(), error.message())),
    )
        .into_response()
}
