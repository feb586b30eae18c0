//! In-Memory Conversation State Store Adapter
//!
//! Keeps every contact's dialogue state in process memory. State does not
//! survive a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::ConversationState;
use crate::domain::foundation::ContactId;
use crate::ports::ConversationStateStore;

/// In-memory storage for conversation state
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationStore {
    states: Arc<RwLock<HashMap<ContactId, ConversationState>>>,
}

impl InMemoryConversationStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of contacts with a stored state
    pub async fn len(&self) -> usize {
        self.states.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.states.read().await.is_empty()
    }

    /// Check whether a contact currently has a stored state
    pub async fn contains(&self, contact: &ContactId) -> bool {
        self.states.read().await.contains_key(contact)
    }

    /// Read a contact's state without creating one
    pub async fn peek(&self, contact: &ContactId) -> Option<ConversationState> {
        self.states.read().await.get(contact).cloned()
    }
}

#[async_trait]
impl ConversationStateStore for InMemoryConversationStore {
    async fn get_or_create(&self, contact: &ContactId) -> ConversationState {
        if let Some(state) = self.states.read().await.get(contact) {
            return state.clone();
        }

        let mut states = self.states.write().await;
        states.entry(contact.clone()).or_default().clone()
    }

    async fn save(&self, contact: &ContactId, state: ConversationState) {
        self.states.write().await.insert(contact.clone(), state);
    }

    async fn clear(&self, contact: &ContactId) {
        self.states.write().await.remove(contact);
    }
}
