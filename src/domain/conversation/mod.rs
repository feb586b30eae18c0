//! Conversation domain module.
//!
//! The fixed review dialogue: greeting → product → name → review text.
//!
//! - `step` - closed enumeration of dialogue positions
//! - `state` - per-contact state carrying the captured fields
//! - `dialogue` - pure transition rules and reply texts
//! - `errors` - recovery policy for failures during the dialogue

pub mod dialogue;
mod errors;
mod state;
mod step;

pub use dialogue::{is_greeting, next, prompt_for, replies, Transition, GREETINGS};
pub use errors::DialogueError;
pub use state::ConversationState;
pub use step::ConversationStep;
