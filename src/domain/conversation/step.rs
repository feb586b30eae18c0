//! Dialogue steps.
//!
//! A contact's dialogue moves strictly forward through these steps; the
//! terminal step ends with a persisted review and the state being cleared.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Position of a contact's dialogue in the fixed four-stage sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStep {
    /// Waiting for a greeting.
    #[default]
    Initial,

    /// Greeted; the next message names the product.
    AwaitingProduct,

    /// Product captured; the next message is the reviewer's name.
    AwaitingName,

    /// Name captured; the next message is the review itself.
    AwaitingReview,
}

impl ConversationStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::AwaitingProduct => "awaiting_product",
            Self::AwaitingName => "awaiting_name",
            Self::AwaitingReview => "awaiting_review",
        }
    }
}

impl fmt::Display for ConversationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for ConversationStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ConversationStep::*;
        matches!(
            (self, target),
            (Initial, AwaitingProduct) | (AwaitingProduct, AwaitingName) | (AwaitingName, AwaitingReview)
        )
    }

    // AwaitingReview has no successor: completing it removes the state.
    fn valid_transitions(&self) -> Vec<Self> {
        use ConversationStep::*;
        match self {
            Initial => vec![AwaitingProduct],
            AwaitingProduct => vec![AwaitingName],
            AwaitingName => vec![AwaitingReview],
            AwaitingReview => vec![],
        }
    }
}
