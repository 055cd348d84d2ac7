use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContractStateError {
    #[error("Invalid action record: {0}")]
    InvalidAction(String),

    #[error("Result field `{key}` must be {expected}")]
    ReservedField { key: String, expected: &'static str },

    #[error("Result payload must not carry the `type` discriminant")]
    DiscriminantInPayload,

    #[error("State lock poisoned")]
    LockPoisoned,

    #[error("Invalid configuration: {0}")]
    Config(String),
}
