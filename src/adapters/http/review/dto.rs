//! HTTP DTOs for review endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::review::Review;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to submit a review directly.
///
/// Missing fields deserialize as empty strings and are rejected by domain
/// validation, so every field problem surfaces as the same 400 shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateReviewRequest {
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default, alias = "product_review")]
    pub review_text: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A stored review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewResponse {
    pub id: i64,
    pub contact_number: String,
    pub user_name: String,
    pub product_name: String,
    pub review_text: String,
    pub created_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id().as_i64(),
            contact_number: review.contact_number().to_string(),
            user_name: review.user_name().to_string(),
            product_name: review.product_name().to_string(),
            review_text: review.review_text().to_string(),
            created_at: review.created_at().to_rfc3339(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
