//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ReviewRepository` - durable review records
//! - `ConversationStateStore` - transient per-contact dialogue state

mod conversation_state_store;
mod review_repository;

pub use conversation_state_store::ConversationStateStore;
pub use review_repository::{ReviewRepository, StorageError};
