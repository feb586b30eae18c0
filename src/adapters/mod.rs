//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum endpoints (webhook, reviews, health)
//! - `sqlite` - SQLite review repository
//! - `storage` - in-memory conversation store and review repository

pub mod http;
pub mod sqlite;
pub mod storage;

pub use sqlite::SqliteReviewRepository;
pub use storage::{InMemoryConversationStore, InMemoryReviewRepository};
