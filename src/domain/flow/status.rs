//! Flow lifecycle state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The lifecycle state of a flow session.
///
/// A session is `Active` from the opening message until a terminal
/// transition (navigation side effect or explicit wrap-up) moves it to
/// `Ended`, after which it is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlowStatus {
    /// Conversation in progress, accepting user input.
    #[default]
    Active,

    /// Flow reached a terminal state; no further input is accepted.
    Ended,
}

impl FlowStatus {
    /// Returns true if user input is accepted in this state.
    pub fn accepts_user_input(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl StateMachine for FlowStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (FlowStatus::Active, FlowStatus::Ended))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            FlowStatus::Active => vec![FlowStatus::Ended],
            FlowStatus::Ended => vec![],
        }
    }
}
