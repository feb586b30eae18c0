//! Storage Adapters
//!
//! In-memory implementations of the storage ports.
//!
//! - **InMemoryConversationStore** - per-contact dialogue state (production and tests)
//! - **InMemoryReviewRepository** - review records (tests/development)

mod in_memory_review_repository;
mod in_memory_state_store;

pub use in_memory_review_repository::InMemoryReviewRepository;
pub use in_memory_state_store::InMemoryConversationStore;
