//! # Contract Store
//!
//! State container for the contract slice. Owns the current slice, folds
//! dispatched actions through the [`Reducer`] one at a time and publishes a
//! [`StateChanged`] for every transition that was not a no-op.

use crate::config::StoreConfig;
use crate::domain::{Action, ActionKind, ContractState, ContractStateError, Reducer};
use crate::events::StateChanged;
use crate::ports::{ContractStateApi, StateChangePublisher};
use crate::BroadcastPublisher;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::{debug, info, warn};

pub struct ContractStore<P: StateChangePublisher> {
    state: Mutex<ContractState>,
    reducer: Reducer,
    publisher: P,
    sequence: AtomicU64,
}

impl<P: StateChangePublisher> ContractStore<P> {
    /// Create a store starting from the empty slice.
    pub fn new(reducer: Reducer, publisher: P) -> Self {
        Self::with_state(ContractState::empty(), reducer, publisher)
    }

    /// Create a store starting from an existing slice.
    pub fn with_state(initial: ContractState, reducer: Reducer, publisher: P) -> Self {
        Self {
            state: Mutex::new(initial),
            reducer,
            publisher,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    pub fn reducer(&self) -> Reducer {
        self.reducer
    }
}

impl ContractStore<BroadcastPublisher> {
    /// Create a broadcasting store from configuration.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(
            Reducer::new(config.result_merge),
            BroadcastPublisher::with_capacity(config.event_capacity),
        )
    }
}

impl<P: StateChangePublisher> ContractStateApi for ContractStore<P> {
    fn dispatch(&self, action: Action) -> Result<ContractState, ContractStateError> {
        let kind = action.kind();
        let mut current = self
            .state
            .lock()
            .map_err(|_| ContractStateError::LockPoisoned)?;

        let previous_phase = current.phase();
        let next = self.reducer.reduce(std::mem::take(&mut *current), &action);
        *current = next;

        if kind == ActionKind::Unknown {
            debug!("Ignoring unrecognized action");
            return Ok(current.clone());
        }

        // Sequence and publish under the lock so events keep dispatch order.
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let phase = current.phase();

        match &action {
            Action::TransactionError { error } => warn!(
                sequence,
                error = error.as_deref().unwrap_or("<none>"),
                "Contract transaction failed"
            ),
            Action::Logout => info!(sequence, "Contract state reset on logout"),
            _ => debug!(
                sequence,
                action = %kind,
                from = %previous_phase,
                to = %phase,
                "Contract state transition"
            ),
        }

        let snapshot = current.clone();
        let receivers = self.publisher.publish(StateChanged {
            sequence,
            action: kind,
            previous_phase,
            phase,
            state: snapshot.clone(),
        });
        debug!(sequence, receivers, "State change published");

        Ok(snapshot)
    }

    fn state(&self) -> Result<ContractState, ContractStateError> {
        let current = self
            .state
            .lock()
            .map_err(|_| ContractStateError::LockPoisoned)?;
        Ok(current.clone())
    }

    fn sequence(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }
}
