//! ListReviewsHandler - Query handler for all stored reviews.

use std::sync::Arc;
use std::time::Duration;

use crate::application::handlers::bounded::with_timeout;
use crate::domain::review::{Review, ReviewError};
use crate::ports::ReviewRepository;

/// Handler for listing reviews, newest first.
pub struct ListReviewsHandler {
    repository: Arc<dyn ReviewRepository>,
    query_timeout: Duration,
}

impl ListReviewsHandler {
    pub fn new(repository: Arc<dyn ReviewRepository>, query_timeout: Duration) -> Self {
        Self {
            repository,
            query_timeout,
        }
    }

    pub async fn handle(&self) -> Result<Vec<Review>, ReviewError> {
        Ok(with_timeout(self.query_timeout, self.repository.list()).await?)
    }
}
