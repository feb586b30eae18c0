//! Review command and query handlers.

mod create_review;
mod list_reviews;

pub use create_review::{CreateReviewCommand, CreateReviewHandler};
pub use list_reviews::ListReviewsHandler;
