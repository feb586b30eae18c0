//! Review repository port.
//!
//! Defines the contract for persisting and listing Review records.
//!
//! # Design
//!
//! - **Append-only**: reviews are immutable; there is no update or delete
//! - **Store-assigned identity**: `create` assigns the id and `created_at`
//! - **Materialised reads**: `list` returns a fresh `Vec` on every call

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::review::{Review, ReviewDraft};

/// Errors that can occur during review storage operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Repository port for Review persistence.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Persist a draft, assigning its id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write cannot be completed.
    async fn create(&self, draft: ReviewDraft) -> Result<Review, StorageError>;

    /// All reviews, newest first.
    ///
    /// Ordered by `created_at` descending; reviews sharing a timestamp are
    /// ordered by `id` descending.
    async fn list(&self) -> Result<Vec<Review>, StorageError>;

    /// Cheap round-trip to the underlying store.
    async fn health_check(&self) -> Result<(), StorageError>;
}
