//! State machine trait for step enums.
//!
//! Gives closed step enumerations a uniform way to declare and check their
//! allowed transitions.

/// Trait for enums that represent state machines.
///
/// Implementors list their valid transitions; `is_terminal` follows from
/// that list.
///
/// ```ignore
/// assert!(ConversationStep::Initial.can_transition_to(&ConversationStep::AwaitingProduct));
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
