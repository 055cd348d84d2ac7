//! # Batch Lookup Form
//!
//! State of the "get batch details" form.
//!
//! ```text
//! [Editing] ──submit (idle)──→ [Submitted] ──set_field / clear / apply_scan──→ [Editing]
//!     │
//!     └──submit (transaction in flight)──→ [Editing]   (ignored)
//! ```
//!
//! Validation messages are only shown once the user has tried to submit.

use super::{parse_id, BatchId, BatchRef, CampaignId, FieldError, IdField, LookupError};
use crate::ports::TransactionStatus;
use serde::{Deserialize, Serialize};
use tracing::debug;

const INITIAL_VALUE: &str = "0";

/// Outcome of a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Both ids are valid.
    Ready(BatchRef),
    /// At least one id is invalid.
    Rejected(Vec<FieldError>),
    /// A transaction is in flight; the submit was ignored.
    Blocked,
}

impl Submission {
    pub fn into_result(self) -> Result<BatchRef, LookupError> {
        match self {
            Submission::Ready(batch) => Ok(batch),
            Submission::Rejected(errors) => Err(LookupError::InvalidFields(errors)),
            Submission::Blocked => Err(LookupError::TransactionInProgress),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchLookupForm {
    campaign_id: String,
    batch_id: String,
    submitted: bool,
}

impl Default for BatchLookupForm {
    fn default() -> Self {
        Self {
            campaign_id: INITIAL_VALUE.to_string(),
            batch_id: INITIAL_VALUE.to_string(),
            submitted: false,
        }
    }
}

impl BatchLookupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: IdField) -> &str {
        match field {
            IdField::Campaign => &self.campaign_id,
            IdField::Batch => &self.batch_id,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Store raw input for one field. Surrounding whitespace is dropped.
    pub fn set_field(&mut self, field: IdField, raw: &str) {
        let value = raw.trim().to_string();
        match field {
            IdField::Campaign => self.campaign_id = value,
            IdField::Batch => self.batch_id = value,
        }
    }

    /// Store raw input addressed by input name. Unknown names are ignored.
    pub fn set_input(&mut self, name: &str, raw: &str) -> bool {
        match IdField::from_input_name(name) {
            Some(field) => {
                self.set_field(field, raw);
                true
            }
            None => false,
        }
    }

    /// Reset both ids to their initial value and hide validation messages.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fill the form from a decoded QR code.
    pub fn apply_scan(&mut self, campaign_id: u64, batch_id: u64) {
        self.campaign_id = campaign_id.to_string();
        self.batch_id = batch_id.to_string();
        self.submitted = false;
    }

    /// Validate both ids without touching the form.
    pub fn validate(&self) -> Result<BatchRef, Vec<FieldError>> {
        let campaign = parse_id(IdField::Campaign, &self.campaign_id);
        let batch = parse_id(IdField::Batch, &self.batch_id);

        match (campaign, batch) {
            (Ok(campaign), Ok(batch)) => Ok(BatchRef::new(CampaignId(campaign), BatchId(batch))),
            (campaign, batch) => Err(campaign.err().into_iter().chain(batch.err()).collect()),
        }
    }

    /// Attempt to submit the form.
    pub fn submit(&mut self, status: &impl TransactionStatus) -> Submission {
        if status.in_progress() {
            debug!("Batch lookup ignored while a transaction is in progress");
            return Submission::Blocked;
        }

        self.submitted = true;
        match self.validate() {
            Ok(batch) => {
                debug!(
                    campaign_id = batch.campaign_id.get(),
                    batch_id = batch.batch_id.get(),
                    "Batch lookup submitted"
                );
                Submission::Ready(batch)
            }
            Err(errors) => {
                debug!(errors = errors.len(), "Batch lookup rejected");
                Submission::Rejected(errors)
            }
        }
    }

    /// Validation messages to show next to the inputs.
    ///
    /// Empty until the first submit.
    pub fn field_errors(&self) -> Vec<FieldError> {
        if !self.submitted {
            return Vec::new();
        }
        self.validate().err().unwrap_or_default()
    }
}
