//! # Transaction State Reducer
//!
//! Pure fold of an [`Action`] into the contract slice.
//!
//! | Action | Result |
//! |--------|--------|
//! | `TRANSACTION_STARTED` | slice with `inProgress: true` |
//! | `TRANSACTION_DONE` | slice with `inProgress: false` |
//! | `TRANSACTION_CLEAN` | `{ role, inProgress: false }` |
//! | `TRANSACTION_ERROR` | `{ role, inProgress: false, error }` |
//! | `TRANSACTION_RESULT` | slice with `inProgress: false` and the payload merged over it |
//! | `LOGOUT` | `{}` |
//! | anything else | slice unchanged |
//!
//! START, DONE and RESULT merge over the existing slice, so a stale `error` or
//! stale result fields survive them. Dispatch CLEAN first for a fresh cycle.

use super::{Action, ContractState, TYPE_KEY};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a result transition treats the action discriminant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultMerge {
    /// Write `type: "TRANSACTION_RESULT"` into the slice along with the
    /// payload. Views written against the record-spreading store read it back.
    #[default]
    Legacy,
    /// Merge the payload only.
    StripDiscriminant,
}

impl ResultMerge {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "legacy" => Some(ResultMerge::Legacy),
            "strip" | "strip_discriminant" => Some(ResultMerge::StripDiscriminant),
            _ => None,
        }
    }
}

/// Reducer for the contract slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reducer {
    result_merge: ResultMerge,
}

impl Reducer {
    pub fn new(result_merge: ResultMerge) -> Self {
        Self { result_merge }
    }

    pub fn result_merge(&self) -> ResultMerge {
        self.result_merge
    }

    /// Compute the next slice. Never fails.
    pub fn reduce(&self, state: ContractState, action: &Action) -> ContractState {
        match action {
            Action::TransactionStarted => ContractState {
                in_progress: Some(true),
                ..state
            },
            Action::TransactionDone => ContractState {
                in_progress: Some(false),
                ..state
            },
            Action::TransactionClean => ContractState {
                role: state.role,
                in_progress: Some(false),
                ..ContractState::default()
            },
            Action::TransactionError { error } => ContractState {
                role: state.role,
                in_progress: Some(false),
                error: error.clone(),
                ..ContractState::default()
            },
            Action::TransactionResult { payload } => {
                let mut next = ContractState {
                    in_progress: Some(false),
                    ..state
                };
                payload.merge_into(&mut next);
                if self.result_merge == ResultMerge::Legacy {
                    next.fields.insert(
                        TYPE_KEY.to_string(),
                        Value::String(action.kind().as_str().to_string()),
                    );
                }
                next
            }
            Action::Logout => ContractState::default(),
            Action::Unknown => state,
        }
    }
}

/// Fold `action` into `state` with the default reducer.
///
/// `None` is the first invocation and starts from the empty slice.
pub fn reduce(state: Option<ContractState>, action: &Action) -> ContractState {
    Reducer::default().reduce(state.unwrap_or_default(), action)
}
