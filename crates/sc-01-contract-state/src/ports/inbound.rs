//! # Inbound Port - ContractStateApi
//!
//! Driving port for the collaborators that dispatch actions (transaction
//! submission, role lookup, session teardown) and the views that read the
//! slice back.

use crate::domain::{Action, ContractState, ContractStateError};

/// State container for the contract slice.
///
/// Implementations must apply dispatched actions one at a time: a reduction
/// completes before the next begins and readers never observe a partial
/// transition.
///
/// # Example
///
/// ```rust,ignore
/// use sc_01_contract_state::{Action, ContractStateApi};
///
/// fn submit(store: &impl ContractStateApi) -> Result<(), ContractStateError> {
///     store.dispatch(Action::TransactionClean)?;
///     store.dispatch(Action::TransactionStarted)?;
///     // ... contract call ...
///     store.dispatch(Action::TransactionDone)?;
///     Ok(())
/// }
/// ```
pub trait ContractStateApi: Send + Sync {
    /// Fold an action into the slice and return the new slice.
    ///
    /// # Errors
    /// - `LockPoisoned`: a previous dispatch panicked while holding the slice
    fn dispatch(&self, action: Action) -> Result<ContractState, ContractStateError>;

    /// Parse a JSON action record and dispatch it.
    ///
    /// # Errors
    /// - `InvalidAction`: the record is not a well-formed action
    /// - `LockPoisoned`
    fn dispatch_json(&self, raw: &str) -> Result<ContractState, ContractStateError> {
        let action = Action::from_json(raw)?;
        self.dispatch(action)
    }

    /// Snapshot of the current slice.
    fn state(&self) -> Result<ContractState, ContractStateError>;

    /// Number of transitions applied so far (no-ops excluded).
    fn sequence(&self) -> u64;
}
