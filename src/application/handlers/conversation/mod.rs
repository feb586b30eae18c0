//! Conversation command handlers.
//!
//! Drives the review dialogue for inbound messages.

mod contact_locks;
mod handle_inbound_message;

pub use contact_locks::ContactLocks;
pub use handle_inbound_message::{
    DialogueReply, HandleInboundMessageCommand, HandleInboundMessageHandler,
};
