//! # Profile View
//!
//! What the profile page shows: the user's display name, wallet account and
//! role. The role comes from the contract slice; the other two come from the
//! authentication and wallet collaborators.

use crate::ports::TransactionStatus;
use sc_01_contract_state::Role;
use serde::{Deserialize, Serialize};

/// Signed-in user as reported by authentication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub display_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub display_name: String,
    pub account: Option<String>,
    pub role: Option<Role>,
}

impl ProfileView {
    /// Assemble the profile from the collaborators' data and the contract slice.
    pub fn project(
        user: &UserProfile,
        account: Option<&str>,
        status: &impl TransactionStatus,
    ) -> Self {
        Self {
            display_name: user.display_name.clone(),
            account: account.map(str::to_string),
            role: status.role().cloned(),
        }
    }

    /// The role lookup has completed for this session.
    pub fn has_role(&self) -> bool {
        self.role.is_some()
    }
}
