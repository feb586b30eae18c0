//! In-Memory Review Repository Adapter
//!
//! Test double for the review repository. Failures, latency and a pinned
//! clock can be switched on to exercise storage-error handling and ordering.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::foundation::{ReviewId, Timestamp};
use crate::domain::review::{Review, ReviewDraft};
use crate::ports::{ReviewRepository, StorageError};

/// In-memory review storage
#[derive(Debug, Clone, Default)]
pub struct InMemoryReviewRepository {
    reviews: Arc<RwLock<Vec<Review>>>,
    failing: Arc<AtomicBool>,
    delay_ms: Arc<AtomicU64>,
    pinned_time: Arc<RwLock<Option<Timestamp>>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Delay every subsequent operation by `delay`.
    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms.store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Stamp every subsequent review with `at` instead of the current time.
    pub async fn pin_time(&self, at: Timestamp) {
        *self.pinned_time.write().await = Some(at);
    }

    /// Number of stored reviews
    pub async fn count(&self) -> usize {
        self.reviews.read().await.len()
    }

    async fn check_available(&self) -> Result<(), StorageError> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(
                "in-memory repository set to fail".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn create(&self, draft: ReviewDraft) -> Result<Review, StorageError> {
        self.check_available().await?;

        let mut reviews = self.reviews.write().await;
        let id = ReviewId::from_i64(reviews.len() as i64 + 1);
        let pinned = *self.pinned_time.read().await;
        let created_at = pinned.unwrap_or_else(Timestamp::now);
        let review = Review::from_draft(id, draft, created_at);
        reviews.push(review.clone());
        Ok(review)
    }

    async fn list(&self) -> Result<Vec<Review>, StorageError> {
        self.check_available().await?;

        let mut reviews = self.reviews.read().await.clone();
        reviews.sort_by(|a, b| {
            b.created_at()
                .cmp(a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(reviews)
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        self.check_available().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ContactId;

    fn draft(n: usize) -> ReviewDraft {
        ReviewDraft::new(
            ContactId::new(format!("+1{:09}", n)).unwrap(),
            format!("User {}", n),
            "Widget",
            format!("Review number {}", n),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = InMemoryReviewRepository::new();

        let first = repo.create(draft(1)).await.unwrap();
        let second = repo.create(draft(2)).await.unwrap();

        assert!(first.id() < second.id());
        assert!(!second.created_at().is_before(first.created_at()));
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let repo = InMemoryReviewRepository::new();
        for n in 1..=5 {
            repo.create(draft(n)).await.unwrap();
        }

        let reviews = repo.list().await.unwrap();

        assert_eq!(reviews.len(), 5);
        for pair in reviews.windows(2) {
            assert!(!pair[0].created_at().is_before(pair[1].created_at()));
            assert!(pair[0].id() > pair[1].id());
        }
        assert_eq!(reviews[0].review_text(), "Review number 5");
    }

    #[tokio::test]
    async fn equal_timestamps_list_higher_id_first() {
        let repo = InMemoryReviewRepository::new();
        repo.pin_time(Timestamp::now()).await;
        let first = repo.create(draft(1)).await.unwrap();
        let second = repo.create(draft(2)).await.unwrap();
        assert_eq!(first.created_at(), second.created_at());

        let reviews = repo.list().await.unwrap();

        assert_eq!(reviews[0].id(), second.id());
        assert_eq!(reviews[1].id(), first.id());
    }

    #[tokio::test]
    async fn list_orders_by_time_before_id() {
        let repo = InMemoryReviewRepository::new();
        let later = Timestamp::now();
        let earlier = Timestamp::from_datetime(*later.as_datetime() - chrono::Duration::seconds(60));
        repo.pin_time(later).await;
        repo.create(draft(1)).await.unwrap();
        repo.pin_time(earlier).await;
        repo.create(draft(2)).await.unwrap();

        let reviews = repo.list().await.unwrap();

        assert_eq!(reviews[0].review_text(), "Review number 1");
    }

    #[tokio::test]
    async fn delayed_repository_is_slow() {
        let repo = InMemoryReviewRepository::new();
        repo.set_delay(Duration::from_millis(200));

        let result =
            tokio::time::timeout(Duration::from_millis(20), repo.create(draft(1))).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn failing_repository_rejects_operations() {
        let repo = InMemoryReviewRepository::new();
        repo.set_failing(true);

        assert!(matches!(
            repo.create(draft(1)).await,
            Err(StorageError::Unavailable(_))
        ));
        assert!(repo.list().await.is_err());
        assert!(repo.health_check().await.is_err());
        assert_eq!(repo.count().await, 0);

        repo.set_failing(false);
        assert!(repo.create(draft(1)).await.is_ok());
    }
}
