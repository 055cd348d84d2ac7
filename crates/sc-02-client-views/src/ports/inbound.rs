//! # Inbound Port - TransactionStatus
//!
//! The part of the contract slice that views read.

use sc_01_contract_state::{ContractState, Role};

/// Read access to the transaction status a view depends on.
pub trait TransactionStatus {
    /// A contract transaction is in flight.
    fn in_progress(&self) -> bool;

    /// Role of the signed-in user, if known.
    fn role(&self) -> Option<&Role>;
}

impl TransactionStatus for ContractState {
    fn in_progress(&self) -> bool {
        self.is_in_progress()
    }

    fn role(&self) -> Option<&Role> {
        ContractState::role(self)
    }
}
