//! # sc-01-contract-state
//!
//! Contract-state subsystem for the Supply-Chain Tracker client.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: the `contract` slice tracking the lifecycle of
//!   the current smart-contract transaction plus the signed-in user's role
//! - **Pure Reducer**: every transition is a pure function of (slice, action)
//! - **Serialized Dispatch**: `ContractStore` folds one action at a time and
//!   publishes a `StateChanged` event after each transition
//!
//! ## Transaction Lifecycle
//!
//! ```text
//!            TRANSACTION_STARTED
//!   [Idle] ─────────────────────→ [InProgress]
//!     ↑                              │
//!     │           ┌──────────────────┼──────────────────┐
//!     │           ↓                  ↓                  ↓
//!     │   TRANSACTION_DONE   TRANSACTION_RESULT  TRANSACTION_ERROR
//!     │           │                  │                  │
//!     │           └───────→ [Settled] ←──┘          [Failed]
//!     │                          │                      │
//!     └──── LOGOUT ──────────────┴── TRANSACTION_CLEAN ─┘
//! ```
//!
//! `role` survives every transition except `LOGOUT`.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod events;
pub mod ports;

pub use adapters::*;
pub use config::*;
pub use domain::*;
pub use events::*;
pub use ports::*;

/// Default capacity of the state-change broadcast channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;
