//! Review and approval states attached to a case.

use super::{ParseApprovalStatusError, ParseManualStatusError};
use serde::{Deserialize, Serialize};

/// Manual review status set by office staff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManualStatus {
    /// Not yet reviewed.
    #[default]
    Pending,
    /// Reviewed by a lawyer.
    Reviewed,
    /// Closed without a useful outcome.
    Frustrated,
}

impl ManualStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Frustrated => "frustrated",
        }
    }
}

impl TryFrom<&str> for ManualStatus {
    type Error = ParseManualStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "reviewed" => Ok(Self::Reviewed),
            "frustrated" => Ok(Self::Frustrated),
            _ => Err(ParseManualStatusError(value.to_owned())),
        }
    }
}

/// Approval state of a case created by automated ingestion.
///
/// Rows written before approvals existed carry no value and count as
/// approved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Explicitly approved.
    Approved,
    /// Awaiting approval.
    Pending,
    /// No approval recorded; treated as approved.
    #[default]
    Legacy,
}

impl ApprovalStatus {
    /// Parses an optional stored value, mapping absence to [`Self::Legacy`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseApprovalStatusError`] for unrecognised values.
    pub fn from_stored(value: Option<&str>) -> Result<Self, ParseApprovalStatusError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::Legacy),
            Some(raw) => Self::try_from(raw),
        }
    }

    /// Returns whether the case counts as approved.
    #[must_use]
    pub const fn is_approved(self) -> bool {
        matches!(self, Self::Approved | Self::Legacy)
    }
}

impl TryFrom<&str> for ApprovalStatus {
    type Error = ParseApprovalStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "approved" => Ok(Self::Approved),
            "pending" => Ok(Self::Pending),
            _ => Err(ParseApprovalStatusError(value.to_owned())),
        }
    }
}
