//! Review domain module.
//!
//! Durable review records and the drafts the dialogue (or the direct
//! create endpoint) assembles before handing them to the repository.

mod errors;
mod review;

pub use errors::ReviewError;
pub use review::{Review, ReviewDraft};
