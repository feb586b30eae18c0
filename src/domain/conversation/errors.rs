//! Dialogue error policy.
//!
//! Failures inside the dialogue never reach the transport; each one maps to
//! a reply the contact receives instead.

use thiserror::Error;

use crate::ports::StorageError;

use super::dialogue::replies;

/// Errors recovered by the conversation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogueError {
    /// The review could not be persisted at the terminal step. The contact's
    /// state is kept so resending the review retries.
    #[error("Failed to persist review: {0}")]
    Storage(#[from] StorageError),
}

impl DialogueError {
    /// Reply sent to the contact in place of the success message.
    pub fn user_message(&self) -> &'static str {
        match self {
            DialogueError::Storage(_) => replies::SAVE_FAILED,
        }
    }
}
