//! # State Change Events
//!
//! Published by the store after every transition that was not a no-op.
//!
//! View collaborators subscribe to these instead of polling the store.

use crate::domain::{ActionKind, ContractState, Phase};
use serde::{Deserialize, Serialize};

/// The slice changed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateChanged {
    /// Position of the transition in dispatch order, starting at 1.
    pub sequence: u64,
    /// Kind of the action that produced the transition.
    pub action: ActionKind,
    /// Phase before the transition.
    pub previous_phase: Phase,
    /// Phase after the transition.
    pub phase: Phase,
    /// Snapshot of the slice after the transition.
    pub state: ContractState,
}

impl StateChanged {
    /// A transaction finished with an error.
    pub fn is_failure(&self) -> bool {
        self.action == ActionKind::TransactionError
    }

    /// The session ended and the slice was reset.
    pub fn is_logout(&self) -> bool {
        self.action == ActionKind::Logout
    }
}
