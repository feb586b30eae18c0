//! Per-contact conversation state.

use super::step::ConversationStep;

/// Where one contact stands in the review dialogue, with the fields
/// captured so far.
///
/// Each variant owns exactly the fields collected before it, so a product
/// name is present from `AwaitingName` on and a user name only at
/// `AwaitingReview`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConversationState {
    #[default]
    Initial,
    AwaitingProduct,
    AwaitingName {
        product_name: String,
    },
    AwaitingReview {
        product_name: String,
        user_name: String,
    },
}

impl ConversationState {
    pub fn step(&self) -> ConversationStep {
        match self {
            Self::Initial => ConversationStep::Initial,
            Self::AwaitingProduct => ConversationStep::AwaitingProduct,
            Self::AwaitingName { .. } => ConversationStep::AwaitingName,
            Self::AwaitingReview { .. } => ConversationStep::AwaitingReview,
        }
    }

    pub fn product_name(&self) -> Option<&str> {
        match self {
            Self::AwaitingName { product_name } | Self::AwaitingReview { product_name, .. } => {
                Some(product_name)
            }
            Self::Initial | Self::AwaitingProduct => None,
        }
    }

    pub fn user_name(&self) -> Option<&str> {
        match self {
            Self::AwaitingReview { user_name, .. } => Some(user_name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_initial_with_no_fields() {
        let state = ConversationState::default();
        assert_eq!(state.step(), ConversationStep::Initial);
        assert_eq!(state.product_name(), None);
        assert_eq!(state.user_name(), None);
    }

    #[test]
    fn awaiting_name_exposes_product_only() {
        let state = ConversationState::AwaitingName {
            product_name: "Widget".to_string(),
        };
        assert_eq!(state.step(), ConversationStep::AwaitingName);
        assert_eq!(state.product_name(), Some("Widget"));
        assert_eq!(state.user_name(), None);
    }

    #[test]
    fn awaiting_review_exposes_both_fields() {
        let state = ConversationState::AwaitingReview {
            product_name: "Widget".to_string(),
            user_name: "Alice".to_string(),
        };
        assert_eq!(state.step(), ConversationStep::AwaitingReview);
        assert_eq!(state.product_name(), Some("Widget"));
        assert_eq!(state.user_name(), Some("Alice"));
    }
}
