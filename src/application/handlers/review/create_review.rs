//! CreateReviewHandler - Command handler for submitting a review directly.
//!
//! Bypasses the dialogue entirely; the conversation store is never touched.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::application::handlers::bounded::with_timeout;
use crate::domain::foundation::ContactId;
use crate::domain::review::{Review, ReviewDraft, ReviewError};
use crate::ports::ReviewRepository;

/// Command to create a review.
#[derive(Debug, Clone)]
pub struct CreateReviewCommand {
    pub contact_number: String,
    pub user_name: String,
    pub product_name: String,
    pub review_text: String,
}

/// Handler for creating reviews.
pub struct CreateReviewHandler {
    repository: Arc<dyn ReviewRepository>,
    query_timeout: Duration,
}

impl CreateReviewHandler {
    pub fn new(repository: Arc<dyn ReviewRepository>, query_timeout: Duration) -> Self {
        Self {
            repository,
            query_timeout,
        }
    }

    pub async fn handle(&self, cmd: CreateReviewCommand) -> Result<Review, ReviewError> {
        let contact = ContactId::new(cmd.contact_number)?;
        let draft = ReviewDraft::new(contact, cmd.user_name, cmd.product_name, cmd.review_text)?;

        let review = with_timeout(self.query_timeout, self.repository.create(draft)).await?;
        info!(review_id = %review.id(), product = %review.product_name(), "Review created");

        Ok(review)
    }
}
