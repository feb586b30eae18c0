//! Conversation State Store Port - Interface for per-contact dialogue state.
//!
//! The store exclusively owns every contact's `ConversationState`. Callers
//! get copies out and put replacements back; the backing map is never
//! exposed. None of the operations can fail.
//!
//! The store makes each call atomic on its own. Serialising a whole
//! read-modify-write for one contact is the caller's job (see
//! `ContactLocks`).

use async_trait::async_trait;

use crate::domain::conversation::ConversationState;
use crate::domain::foundation::ContactId;

/// Port for keeping per-contact dialogue state
#[async_trait]
pub trait ConversationStateStore: Send + Sync {
    /// Returns the contact's state, storing a fresh `Initial` state first if
    /// the contact is unseen.
    async fn get_or_create(&self, contact: &ContactId) -> ConversationState;

    /// Replaces the contact's state.
    async fn save(&self, contact: &ContactId, state: ConversationState);

    /// Removes the contact's state. Clearing an absent contact is a no-op.
    async fn clear(&self, contact: &ContactId);
}
