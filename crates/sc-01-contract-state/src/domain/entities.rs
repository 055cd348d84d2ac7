//! # Domain Entities for Contract State
//!
//! The `contract` slice and the values that flow into it.
//!
//! ## Shape
//!
//! The slice serializes to the same object the view layer reads:
//! `{ role?, inProgress?, error?, ...resultFields }`. Absent values are
//! omitted, so the empty slice is `{}`.
//!
//! ## Type Decisions
//!
//! - `in_progress: Option<bool>` - the empty slice has no flag at all, which is
//!   distinct from an explicit `false` after a terminal transition.
//! - `error: Option<String>` - the failure detail is a message or nothing.
//! - `fields` - result payloads are open-ended, so they stay as JSON values.

use super::ContractStateError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Key of the discriminant field in action records.
pub const TYPE_KEY: &str = "type";
/// Key of the role field in the serialized slice.
pub const ROLE_KEY: &str = "role";
/// Key of the in-progress flag in the serialized slice.
pub const IN_PROGRESS_KEY: &str = "inProgress";
/// Key of the failure detail in the serialized slice.
pub const ERROR_KEY: &str = "error";

/// Authorization level of the signed-in user.
///
/// Opaque to this subsystem: it is produced by the role lookup and only read
/// back by views.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(role: &str) -> Self {
        Self::new(role)
    }
}

/// Lifecycle phase derived from a slice. Never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No transaction has run since the slice was created or reset.
    Idle,
    /// A transaction is in flight.
    InProgress,
    /// The last transaction ended with an error.
    Failed,
    /// The last transaction ended without an error.
    Settled,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::InProgress => "in-progress",
            Phase::Failed => "failed",
            Phase::Settled => "settled",
        };
        f.write_str(name)
    }
}

/// The `contract` state slice.
///
/// ## Invariants
///
/// - `in_progress == Some(true)` only between a start and the next terminal
///   transition.
/// - `role` is replaced only by a result payload that names it, and wiped only
///   by logout.
/// - `error` is set only by an error transition (or a result payload naming it).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_progress: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Result fields merged in by result transitions.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ContractState {
    /// The empty slice, as after logout.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder method to set the role.
    pub fn with_role(mut self, role: impl Into<Role>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Builder method to add a result field.
    ///
    /// `role`, `inProgress` and `error` set the typed fields instead, so the
    /// serialized slice and the accessors always agree.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.set_field(key, value);
        self
    }

    /// Set one key of the slice by its serialized name.
    ///
    /// Role and error values that are not strings are stringified; a
    /// non-boolean `inProgress` clears the flag.
    pub fn set_field(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match key.as_str() {
            ROLE_KEY => self.role = stringify(value).map(Role),
            IN_PROGRESS_KEY => self.in_progress = value.as_bool(),
            ERROR_KEY => self.error = stringify(value),
            _ => {
                self.fields.insert(key, value);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.role.is_none()
            && self.in_progress.is_none()
            && self.error.is_none()
            && self.fields.is_empty()
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress.unwrap_or(false)
    }

    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn phase(&self) -> Phase {
        match (self.in_progress, &self.error) {
            (None, _) => Phase::Idle,
            (Some(true), _) => Phase::InProgress,
            (Some(false), Some(_)) => Phase::Failed,
            (Some(false), None) => Phase::Settled,
        }
    }

    pub fn to_json(&self) -> Value {
        // Map keys are strings and every value is already JSON.
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Map::new()))
    }
}

/// Result of a transaction, merged into the slice by `TRANSACTION_RESULT`.
///
/// Keys naming typed slice fields are checked on construction:
///
/// | Key | Accepted values |
/// |-----|-----------------|
/// | `role` | any; non-strings are stringified, null clears |
/// | `inProgress` | boolean |
/// | `error` | any; non-strings are stringified, null clears |
/// | `type` | rejected |
///
/// Everything else is kept verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ResultPayload {
    role: Option<Option<Role>>,
    in_progress: Option<bool>,
    error: Option<Option<String>>,
    fields: Map<String, Value>,
}

impl ResultPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a payload from a JSON object.
    pub fn from_value(value: Value) -> Result<Self, ContractStateError> {
        match value {
            Value::Object(map) => Self::try_from(map),
            other => Err(ContractStateError::InvalidAction(format!(
                "result payload must be an object, got {other}"
            ))),
        }
    }

    /// Builder method adding one field.
    pub fn with(
        mut self,
        key: impl Into<String>,
        value: Value,
    ) -> Result<Self, ContractStateError> {
        self.insert(key, value)?;
        Ok(self)
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: Value,
    ) -> Result<(), ContractStateError> {
        let key = key.into();
        match key.as_str() {
            TYPE_KEY => return Err(ContractStateError::DiscriminantInPayload),
            ROLE_KEY => self.role = Some(stringify(value).map(Role)),
            IN_PROGRESS_KEY => {
                let in_progress = value
                    .as_bool()
                    .ok_or_else(|| reserved(IN_PROGRESS_KEY, "a boolean"))?;
                self.in_progress = Some(in_progress);
            }
            ERROR_KEY => self.error = Some(stringify(value)),
            _ => {
                self.fields.insert(key, value);
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.role.is_none()
            && self.in_progress.is_none()
            && self.error.is_none()
            && self.fields.is_empty()
    }

    /// Number of keys the payload carries.
    pub fn len(&self) -> usize {
        usize::from(self.role.is_some())
            + usize::from(self.in_progress.is_some())
            + usize::from(self.error.is_some())
            + self.fields.len()
    }

    /// Overwrite `state` with every key this payload carries.
    pub(crate) fn merge_into(&self, state: &mut ContractState) {
        if let Some(role) = &self.role {
            state.role = role.clone();
        }
        if let Some(in_progress) = self.in_progress {
            state.in_progress = Some(in_progress);
        }
        if let Some(error) = &self.error {
            state.error = error.clone();
        }
        for (key, value) in &self.fields {
            state.fields.insert(key.clone(), value.clone());
        }
    }
}

/// Opaque values arrive as whatever the contract or RPC layer produced; keep
/// strings as is and stringify anything else. Null means absent.
pub(crate) fn stringify(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn reserved(key: &str, expected: &'static str) -> ContractStateError {
    ContractStateError::ReservedField {
        key: key.to_string(),
        expected,
    }
}

impl TryFrom<Map<String, Value>> for ResultPayload {
    type Error = ContractStateError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut payload = Self::new();
        for (key, value) in map {
            payload.insert(key, value)?;
        }
        Ok(payload)
    }
}

impl From<ResultPayload> for Map<String, Value> {
    fn from(payload: ResultPayload) -> Self {
        let mut map = Map::new();
        if let Some(role) = payload.role {
            map.insert(
                ROLE_KEY.to_string(),
                role.map_or(Value::Null, |r| Value::String(r.0)),
            );
        }
        if let Some(in_progress) = payload.in_progress {
            map.insert(IN_PROGRESS_KEY.to_string(), Value::Bool(in_progress));
        }
        if let Some(error) = payload.error {
            map.insert(ERROR_KEY.to_string(), error.map_or(Value::Null, Value::String));
        }
        map.extend(payload.fields);
        map
    }
}
