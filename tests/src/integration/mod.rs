//! # Integration Tests
//!
//! - `flows`: a contract store driving the client views through its change
//!   subscription, the way the UI layer wires them
//! - `properties`: reducer laws over randomized slices and action sequences

pub mod flows;
pub mod properties;
