//! # sc-02-client-views
//!
//! View-side logic that reads the contract slice.
//!
//! - **Batch Lookup**: the campaign/batch id form. Validates both ids and
//!   refuses to submit while a transaction is in flight.
//! - **Profile**: display name, account and role of the signed-in user.
//!
//! Rendering, navigation and QR decoding stay with the UI layer; this crate
//! only turns raw input and slice snapshots into checked values.

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
