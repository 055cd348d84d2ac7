//! Store configuration from environment variables.

use crate::domain::{ContractStateError, ResultMerge};
use crate::DEFAULT_EVENT_CAPACITY;
use std::env;

/// Environment variable selecting the result merge policy.
pub const RESULT_MERGE_VAR: &str = "SC_RESULT_MERGE";
/// Environment variable for the change broadcast capacity.
pub const EVENT_CAPACITY_VAR: &str = "SC_EVENT_CAPACITY";

/// Configuration for the contract store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Whether result transitions write the action discriminant into the slice
    pub result_merge: ResultMerge,

    /// Capacity of the state change broadcast channel
    pub event_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            result_merge: ResultMerge::Legacy,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// Create configuration from environment variables, falling back to
    /// defaults for anything unset or malformed.
    ///
    /// # Environment Variables
    ///
    /// - `SC_RESULT_MERGE`: `legacy` or `strip` (default: legacy)
    /// - `SC_EVENT_CAPACITY`: broadcast capacity (default: 256)
    pub fn from_env() -> Self {
        Self::from_lookup_lossy(|key| env::var(key).ok())
    }

    /// Like [`StoreConfig::from_env`] but rejects malformed values.
    pub fn try_from_env() -> Result<Self, ContractStateError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContractStateError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(RESULT_MERGE_VAR) {
            config.result_merge = parse_result_merge(&raw)?;
        }
        if let Some(raw) = lookup(EVENT_CAPACITY_VAR) {
            config.event_capacity = parse_event_capacity(&raw)?;
        }
        Ok(config)
    }

    /// Build a configuration from a key lookup, keeping the default for each
    /// value that is missing or malformed.
    pub fn from_lookup_lossy<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            result_merge: lookup(RESULT_MERGE_VAR)
                .and_then(|raw| parse_result_merge(&raw).ok())
                .unwrap_or(defaults.result_merge),

            event_capacity: lookup(EVENT_CAPACITY_VAR)
                .and_then(|raw| parse_event_capacity(&raw).ok())
                .unwrap_or(defaults.event_capacity),
        }
    }

    /// Builder method to set the result merge policy.
    pub fn with_result_merge(mut self, result_merge: ResultMerge) -> Self {
        self.result_merge = result_merge;
        self
    }
}

fn parse_result_merge(raw: &str) -> Result<ResultMerge, ContractStateError> {
    ResultMerge::parse(raw).ok_or_else(|| {
        ContractStateError::Config(format!("{RESULT_MERGE_VAR}: unknown policy `{raw}`"))
    })
}

fn parse_event_capacity(raw: &str) -> Result<usize, ContractStateError> {
    let capacity: usize = raw.trim().parse().map_err(|_| {
        ContractStateError::Config(format!("{EVENT_CAPACITY_VAR}: `{raw}` is not a number"))
    })?;
    if capacity == 0 {
        return Err(ContractStateError::Config(format!(
            "{EVENT_CAPACITY_VAR}: capacity must be positive"
        )));
    }
    Ok(capacity)
}
