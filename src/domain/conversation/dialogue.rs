//! Review dialogue transition rules.
//!
//! Pure function from (current state, inbound text) to the next state, the
//! reply to send and, on the final step, the review draft to persist. No
//! I/O happens here; the application handler applies the outcome.

use crate::domain::foundation::ContactId;
use crate::domain::review::ReviewDraft;

use super::state::ConversationState;

/// Messages that open a dialogue from the initial step.
pub const GREETINGS: [&str; 3] = ["hi", "hello", "hey"];

/// Fixed reply texts.
pub mod replies {
    pub const START_HINT: &str = "Hello! To start a review, please send 'Hi'";
    pub const PRODUCT_PROMPT: &str = "Which product is this review for?";
    pub const NAME_PROMPT: &str = "What's your name?";
    pub const SAVE_FAILED: &str =
        "Sorry, there was an error saving your review. Please try again.";

    pub fn review_prompt(product_name: &str) -> String {
        format!("Please send your review for {}.", product_name)
    }

    pub fn recorded(user_name: &str, product_name: &str) -> String {
        format!(
            "Thanks {} -- your review for {} has been recorded.",
            user_name, product_name
        )
    }
}

/// Outcome of applying one inbound message to a contact's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// State is unchanged; nothing to save.
    Stay { reply: String },
    /// State moves forward and must be saved.
    Advance {
        next: ConversationState,
        reply: String,
    },
    /// Dialogue finished; persist the draft, then clear the state.
    Complete {
        draft: ReviewDraft,
        reply: String,
    },
}

impl Transition {
    pub fn reply(&self) -> &str {
        match self {
            Transition::Stay { reply }
            | Transition::Advance { reply, .. }
            | Transition::Complete { reply, .. } => reply,
        }
    }
}

/// Case-insensitive match against [`GREETINGS`].
pub fn is_greeting(message: &str) -> bool {
    let message = message.trim();
    GREETINGS.iter().any(|g| message.eq_ignore_ascii_case(g))
}

/// The question a contact is currently expected to answer.
pub fn prompt_for(state: &ConversationState) -> String {
    match state {
        ConversationState::Initial => replies::START_HINT.to_string(),
        ConversationState::AwaitingProduct => replies::PRODUCT_PROMPT.to_string(),
        ConversationState::AwaitingName { .. } => replies::NAME_PROMPT.to_string(),
        ConversationState::AwaitingReview { product_name, .. } => {
            replies::review_prompt(product_name)
        }
    }
}

/// Applies `message` to `state`.
///
/// The message is trimmed first. Only the initial step looks at the content;
/// every later step captures whatever non-empty text arrives.
///
/// Empty or whitespace-only text is never captured: it repeats the current
/// step's prompt and leaves the state as it was. Accepting it would produce a
/// review with a blank product, name or text, which the review store rejects.
pub fn next(state: &ConversationState, contact: &ContactId, message: &str) -> Transition {
    let message = message.trim();

    if message.is_empty() {
        return Transition::Stay {
            reply: prompt_for(state),
        };
    }

    match state {
        ConversationState::Initial => {
            if is_greeting(message) {
                Transition::Advance {
                    next: ConversationState::AwaitingProduct,
                    reply: replies::PRODUCT_PROMPT.to_string(),
                }
            } else {
                Transition::Stay {
                    reply: replies::START_HINT.to_string(),
                }
            }
        }
        ConversationState::AwaitingProduct => Transition::Advance {
            next: ConversationState::AwaitingName {
                product_name: message.to_string(),
            },
            reply: replies::NAME_PROMPT.to_string(),
        },
        ConversationState::AwaitingName { product_name } => Transition::Advance {
            reply: replies::review_prompt(product_name),
            next: ConversationState::AwaitingReview {
                product_name: product_name.clone(),
                user_name: message.to_string(),
            },
        },
        ConversationState::AwaitingReview {
            product_name,
            user_name,
        } => match ReviewDraft::new(contact.clone(), user_name, product_name, message) {
            Ok(draft) => Transition::Complete {
                reply: replies::recorded(user_name, product_name),
                draft,
            },
            Err(_) => Transition::Stay {
                reply: replies::review_prompt(product_name),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::ConversationStep;
    use crate::domain::foundation::StateMachine;
    use proptest::prelude::*;

    fn contact() -> ContactId {
        ContactId::new("+1111111111").unwrap()
    }

    fn awaiting_name() -> ConversationState {
        ConversationState::AwaitingName {
            product_name: "Widget".to_string(),
        }
    }

    fn awaiting_review() -> ConversationState {
        ConversationState::AwaitingReview {
            product_name: "Widget".to_string(),
            user_name: "Alice".to_string(),
        }
    }

    mod greetings {
        use super::*;

        #[test]
        fn greetings_match_case_insensitively() {
            assert!(is_greeting("Hi"));
            assert!(is_greeting("HELLO"));
            assert!(is_greeting("  hey "));
        }

        #[test]
        fn other_text_is_not_a_greeting() {
            assert!(!is_greeting("hi there"));
            assert!(!is_greeting(""));
            assert!(!is_greeting("howdy"));
        }
    }

    mod initial_step {
        use super::*;

        #[test]
        fn greeting_asks_for_product() {
            let t = next(&ConversationState::Initial, &contact(), "Hi");
            assert_eq!(
                t,
                Transition::Advance {
                    next: ConversationState::AwaitingProduct,
                    reply: "Which product is this review for?".to_string(),
                }
            );
        }

        #[test]
        fn anything_else_gets_start_hint() {
            let t = next(&ConversationState::Initial, &contact(), "Widget");
            assert_eq!(
                t,
                Transition::Stay {
                    reply: "Hello! To start a review, please send 'Hi'".to_string(),
                }
            );
        }

        #[test]
        fn empty_message_gets_start_hint() {
            let t = next(&ConversationState::Initial, &contact(), "   ");
            assert_eq!(t.reply(), replies::START_HINT);
        }
    }

    mod capturing_steps {
        use super::*;

        #[test]
        fn product_is_captured_trimmed() {
            let t = next(&ConversationState::AwaitingProduct, &contact(), "  Widget \n");
            assert_eq!(
                t,
                Transition::Advance {
                    next: awaiting_name(),
                    reply: "What's your name?".to_string(),
                }
            );
        }

        #[test]
        fn name_is_captured_and_review_requested() {
            let t = next(&awaiting_name(), &contact(), "Alice");
            assert_eq!(
                t,
                Transition::Advance {
                    next: awaiting_review(),
                    reply: "Please send your review for Widget.".to_string(),
                }
            );
        }

        #[test]
        fn greeting_in_later_step_is_captured_as_text() {
            let t = next(&ConversationState::AwaitingProduct, &contact(), "hello");
            assert_eq!(
                t,
                Transition::Advance {
                    next: ConversationState::AwaitingName {
                        product_name: "hello".to_string(),
                    },
                    reply: replies::NAME_PROMPT.to_string(),
                }
            );
        }

        #[test]
        fn blank_text_repeats_current_prompt() {
            assert_eq!(
                next(&ConversationState::AwaitingProduct, &contact(), "").reply(),
                replies::PRODUCT_PROMPT
            );
            assert_eq!(next(&awaiting_name(), &contact(), " ").reply(), replies::NAME_PROMPT);
            assert_eq!(
                next(&awaiting_review(), &contact(), "\t").reply(),
                "Please send your review for Widget."
            );
            assert!(matches!(
                next(&awaiting_review(), &contact(), "   "),
                Transition::Stay { .. }
            ));
        }
    }

    mod terminal_step {
        use super::*;

        #[test]
        fn review_text_completes_the_dialogue() {
            let t = next(&awaiting_review(), &contact(), "Great product!");
            match t {
                Transition::Complete { draft, reply } => {
                    assert_eq!(reply, "Thanks Alice -- your review for Widget has been recorded.");
                    assert_eq!(draft.contact_number(), &contact());
                    assert_eq!(draft.user_name(), "Alice");
                    assert_eq!(draft.product_name(), "Widget");
                    assert_eq!(draft.review_text(), "Great product!");
                }
                other => panic!("Expected Complete, got {:?}", other),
            }
        }
    }

    fn arb_state() -> impl Strategy<Value = ConversationState> {
        prop_oneof![
            Just(ConversationState::Initial),
            Just(ConversationState::AwaitingProduct),
            "[A-Za-z0-9 ]{1,20}".prop_map(|p| ConversationState::AwaitingName {
                product_name: p.trim().to_string() + "x",
            }),
            ("[A-Za-z0-9 ]{1,20}", "[A-Za-z ]{1,20}").prop_map(|(p, u)| {
                ConversationState::AwaitingReview {
                    product_name: p.trim().to_string() + "x",
                    user_name: u.trim().to_string() + "y",
                }
            }),
        ]
    }

    proptest! {
        /// Property: every Advance obeys the step machine.
        #[test]
        fn advances_follow_step_machine(state in arb_state(), message in "\\PC{0,30}") {
            if let Transition::Advance { next: new_state, .. } = next(&state, &contact(), &message) {
                prop_assert!(state.step().can_transition_to(&new_state.step()));
            }
        }

        /// Property: only Complete is produced from the terminal step, and
        /// it never comes from anywhere else.
        #[test]
        fn complete_only_from_awaiting_review(state in arb_state(), message in "\\PC{0,30}") {
            let t = next(&state, &contact(), &message);
            if matches!(t, Transition::Complete { .. }) {
                prop_assert_eq!(state.step(), ConversationStep::AwaitingReview);
            }
        }

        /// Property: greetings never reset a dialogue already in progress.
        #[test]
        fn greetings_do_not_reset_later_steps(
            state in arb_state().prop_filter("past initial", |s| s.step() != ConversationStep::Initial),
            greeting in prop::sample::select(GREETINGS.to_vec()),
        ) {
            let t = next(&state, &contact(), greeting);
            if let Transition::Advance { next: new_state, .. } = &t {
                prop_assert_ne!(new_state.step(), ConversationStep::AwaitingProduct);
            }
            prop_assert_ne!(t.reply(), replies::PRODUCT_PROMPT);
        }

        /// Property: captured text reaches the draft unchanged apart from trimming.
        #[test]
        fn review_text_reaches_draft(text in "[A-Za-z0-9!?.,' ]{0,40}") {
            let t = next(&awaiting_review(), &contact(), &text);
            match t {
                Transition::Complete { draft, .. } => prop_assert_eq!(draft.review_text(), text.trim()),
                Transition::Stay { .. } => prop_assert!(text.trim().is_empty()),
                Transition::Advance { .. } => prop_assert!(false, "terminal step cannot advance"),
            }
        }
    }
}
