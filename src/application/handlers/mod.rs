//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

mod bounded;
pub mod conversation;
pub mod review;

pub use conversation::{
    ContactLocks, DialogueReply, HandleInboundMessageCommand, HandleInboundMessageHandler,
};
pub use review::{CreateReviewCommand, CreateReviewHandler, ListReviewsHandler};
