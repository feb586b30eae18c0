//! HTTP adapter for the review endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateReviewRequest, ErrorResponse, ReviewResponse};
pub use handlers::ReviewHandlers;
pub use routes::review_routes;
