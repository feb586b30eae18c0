//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machines)
//! - `conversation` - Review dialogue steps, state and transition rules
//! - `review` - Review records and drafts

pub mod conversation;
pub mod foundation;
pub mod review;
