//! # Lookup Identifiers
//!
//! Campaign and batch ids as entered in the lookup form.
//!
//! Ids are positive integers. Raw input is trimmed; an empty field counts as
//! zero, the same as the form's initial value.

use super::{FieldError, FieldErrorKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

/// The two inputs of the lookup form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdField {
    Campaign,
    Batch,
}

impl IdField {
    /// Input name used by the form.
    pub fn input_name(&self) -> &'static str {
        match self {
            IdField::Campaign => "campaignId",
            IdField::Batch => "batchId",
        }
    }

    pub fn from_input_name(name: &str) -> Option<Self> {
        match name {
            "campaignId" => Some(IdField::Campaign),
            "batchId" => Some(IdField::Batch),
            _ => None,
        }
    }
}

impl fmt::Display for IdField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IdField::Campaign => "CampaignId",
            IdField::Batch => "BatchId",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CampaignId(pub(crate) NonZeroU64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BatchId(pub(crate) NonZeroU64);

impl CampaignId {
    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl BatchId {
    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

/// A validated campaign/batch pair, ready for the batch details lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRef {
    pub campaign_id: CampaignId,
    pub batch_id: BatchId,
}

impl BatchRef {
    pub fn new(campaign_id: CampaignId, batch_id: BatchId) -> Self {
        Self {
            campaign_id,
            batch_id,
        }
    }
}

/// Parse one raw form value into a positive id.
pub fn parse_id(field: IdField, raw: &str) -> Result<NonZeroU64, FieldError> {
    let raw = raw.trim();
    let fail = |kind| Err(FieldError::new(field, kind));

    if raw.is_empty() {
        return fail(FieldErrorKind::Zero);
    }

    if let Ok(value) = raw.parse::<i128>() {
        return match u64::try_from(value) {
            Ok(id) => NonZeroU64::new(id).map_or_else(|| fail(FieldErrorKind::Zero), Ok),
            Err(_) if value < 0 => fail(FieldErrorKind::NotPositive),
            Err(_) => fail(FieldErrorKind::NotANumber),
        };
    }

    // Number inputs can still produce "0.0" or "-1e3".
    match raw.parse::<f64>() {
        Ok(value) if value == 0.0 => fail(FieldErrorKind::Zero),
        Ok(value) if value < 0.0 => fail(FieldErrorKind::NotPositive),
        _ => fail(FieldErrorKind::NotANumber),
    }
}
