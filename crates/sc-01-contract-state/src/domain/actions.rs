//! # Actions
//!
//! Tagged records dispatched into the contract slice.
//!
//! The JSON form carries the kind in a `type` field:
//!
//! ```text
//! { "type": "TRANSACTION_STARTED" }
//! { "type": "TRANSACTION_DONE" }
//! { "type": "TRANSACTION_CLEAN" }
//! { "type": "TRANSACTION_ERROR", "error": <value> }
//! { "type": "TRANSACTION_RESULT", ...<fields> }
//! { "type": "LOGOUT" }
//! ```
//!
//! Any other `type` parses as [`Action::Unknown`] and leaves the slice as is.

use super::entities::stringify;
use super::{ContractStateError, ResultPayload};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    TransactionStarted,
    TransactionDone,
    TransactionClean,
    TransactionError {
        #[serde(default, deserialize_with = "stringified")]
        error: Option<String>,
    },
    TransactionResult {
        #[serde(flatten)]
        payload: ResultPayload,
    },
    Logout,
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Parse a JSON action record.
    pub fn from_json(raw: &str) -> Result<Self, ContractStateError> {
        serde_json::from_str(raw).map_err(|e| ContractStateError::InvalidAction(e.to_string()))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Action::TransactionError {
            error: Some(message.into()),
        }
    }

    pub fn result(payload: ResultPayload) -> Self {
        Action::TransactionResult { payload }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::TransactionStarted => ActionKind::TransactionStarted,
            Action::TransactionDone => ActionKind::TransactionDone,
            Action::TransactionClean => ActionKind::TransactionClean,
            Action::TransactionError { .. } => ActionKind::TransactionError,
            Action::TransactionResult { .. } => ActionKind::TransactionResult,
            Action::Logout => ActionKind::Logout,
            Action::Unknown => ActionKind::Unknown,
        }
    }
}

fn stringified<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(stringify)
}

/// Discriminant of an [`Action`], for logs and change events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    TransactionStarted,
    TransactionDone,
    TransactionClean,
    TransactionError,
    TransactionResult,
    Logout,
    Unknown,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::TransactionStarted => "TRANSACTION_STARTED",
            ActionKind::TransactionDone => "TRANSACTION_DONE",
            ActionKind::TransactionClean => "TRANSACTION_CLEAN",
            ActionKind::TransactionError => "TRANSACTION_ERROR",
            ActionKind::TransactionResult => "TRANSACTION_RESULT",
            ActionKind::Logout => "LOGOUT",
            ActionKind::Unknown => "UNKNOWN",
        }
    }

    /// Whether this kind ends an in-flight transaction.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ActionKind::TransactionDone
                | ActionKind::TransactionClean
                | ActionKind::TransactionError
                | ActionKind::TransactionResult
        )
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
