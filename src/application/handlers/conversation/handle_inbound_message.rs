//! HandleInboundMessage command handler.
//!
//! Runs one inbound message through the review dialogue for its contact:
//! load state, apply the transition, then save, clear or persist. Storage
//! failures at the terminal step become a retry reply and the contact's
//! state is left as it was.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::application::handlers::bounded::with_timeout;
use crate::domain::conversation::{self, DialogueError, Transition};
use crate::domain::foundation::ContactId;
use crate::domain::review::{Review, ReviewDraft};
use crate::ports::{ConversationStateStore, ReviewRepository};

use super::contact_locks::ContactLocks;

/// Command carrying one inbound message.
#[derive(Debug, Clone)]
pub struct HandleInboundMessageCommand {
    /// Sender of the message.
    pub contact: ContactId,
    /// Raw message text, untrimmed.
    pub body: String,
}

impl HandleInboundMessageCommand {
    pub fn new(contact: ContactId, body: impl Into<String>) -> Self {
        Self {
            contact,
            body: body.into(),
        }
    }
}

/// Result of handling an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueReply {
    /// Text to send back to the contact.
    pub reply: String,
    /// The review persisted by this message, if it finished the dialogue.
    pub review: Option<Review>,
}

impl DialogueReply {
    fn text(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            review: None,
        }
    }
}

/// Handler driving the review dialogue.
pub struct HandleInboundMessageHandler {
    store: Arc<dyn ConversationStateStore>,
    repository: Arc<dyn ReviewRepository>,
    locks: ContactLocks,
    persist_timeout: Duration,
}

impl HandleInboundMessageHandler {
    pub fn new(
        store: Arc<dyn ConversationStateStore>,
        repository: Arc<dyn ReviewRepository>,
        persist_timeout: Duration,
    ) -> Self {
        Self {
            store,
            repository,
            locks: ContactLocks::new(),
            persist_timeout,
        }
    }

    /// Handles one message. Never fails; every outcome is a reply.
    pub async fn handle(&self, cmd: HandleInboundMessageCommand) -> DialogueReply {
        let contact = &cmd.contact;
        let _guard = self.locks.acquire(contact).await;

        let state = self.store.get_or_create(contact).await;
        let from = state.step();

        match conversation::next(&state, contact, &cmd.body) {
            Transition::Stay { reply } => {
                debug!(contact = %contact, step = %from, "Dialogue step unchanged");
                DialogueReply::text(reply)
            }
            Transition::Advance { next, reply } => {
                debug!(contact = %contact, from = %from, to = %next.step(), "Dialogue advanced");
                self.store.save(contact, next).await;
                DialogueReply::text(reply)
            }
            Transition::Complete { draft, reply } => match self.persist(draft).await {
                Ok(review) => {
                    self.store.clear(contact).await;
                    info!(
                        contact = %contact,
                        review_id = %review.id(),
                        product = %review.product_name(),
                        "Review recorded"
                    );
                    DialogueReply {
                        reply,
                        review: Some(review),
                    }
                }
                // State is left untouched so resending the review retries.
                Err(err) => {
                    warn!(contact = %contact, error = %err, "Review not persisted");
                    DialogueReply::text(err.user_message())
                }
            },
        }
    }

    async fn persist(&self, draft: ReviewDraft) -> Result<Review, DialogueError> {
        Ok(with_timeout(self.persist_timeout, self.repository.create(draft)).await?)
    }
}
