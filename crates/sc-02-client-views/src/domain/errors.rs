use super::IdField;
use thiserror::Error;

/// Why a lookup id was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    #[error("cannot be 0")]
    Zero,

    #[error("must be greater than 0")]
    NotPositive,

    #[error("is not a number")]
    NotANumber,
}

/// Validation failure for one form field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{field} {kind}")]
pub struct FieldError {
    pub field: IdField,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: IdField, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("A contract transaction is still in progress")]
    TransactionInProgress,

    #[error("Invalid lookup: {}", join(.0))]
    InvalidFields(Vec<FieldError>),
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
