//! Case record and its movement history.

use super::{ApprovalStatus, ManualStatus};
use crate::calendar::{format_date, normalize_date};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A dated narrative update on a case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Narrative summary of the update.
    pub summary: String,
    /// Date of the update as stored, if any.
    pub date: Option<String>,
}

impl Movement {
    /// Creates a movement record.
    #[must_use]
    pub fn new(summary: impl Into<String>, date: Option<String>) -> Self {
        Self {
            summary: summary.into(),
            date,
        }
    }
}

/// A tracked legal process.
///
/// Fields mirror the canonical record produced by
/// [`crate::case::adapters::raw::case_from_row`]. An explicit
/// [`Case::deadline`] always takes precedence over the free-text
/// [`Case::deadline_hint`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// Internal row identifier.
    pub id: String,
    /// Court-assigned case number.
    pub case_number: String,
    /// Name of the represented party.
    pub party_name: String,
    /// Court handling the case.
    pub court: String,
    /// Jurisdiction code (state or region).
    pub jurisdiction: String,
    /// Responsible user, if assigned.
    pub owner_id: Option<String>,
    /// Manual review status.
    pub manual_status: ManualStatus,
    /// Approval status of automatically created cases.
    pub approval: ApprovalStatus,
    /// Authoritative deadline date.
    pub deadline: Option<String>,
    /// Free-text, possibly AI-generated, deadline description.
    pub deadline_hint: Option<String>,
    /// Free-text risk label.
    pub risk_label: Option<String>,
    /// Explanation accompanying the risk label.
    pub risk_rationale: String,
    /// Summary of the latest movement.
    pub latest_movement: String,
    /// Date of the latest movement as stored.
    pub latest_movement_date: Option<String>,
    /// Row creation timestamp in the offset it was stored with.
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Prior movements, oldest first.
    pub movements: Vec<Movement>,
}

impl Case {
    /// Returns whether a responsible user is assigned.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.owner_id
            .as_deref()
            .is_some_and(|owner| !owner.trim().is_empty())
    }

    /// Returns the risk label lowercased, or an empty string.
    #[must_use]
    pub fn risk_label_lower(&self) -> String {
        self.risk_label
            .as_deref()
            .map(|label| label.trim().to_lowercase())
            .unwrap_or_default()
    }

    /// Returns the creation date in `YYYY-MM-DD` form, or an empty string.
    ///
    /// No timezone conversion is applied.
    #[must_use]
    pub fn created_date(&self) -> String {
        self.created_at
            .map(|created| format_date(created.date_naive()))
            .unwrap_or_default()
    }

    /// Returns the date of last activity: the latest movement date, falling
    /// back to the creation date.
    #[must_use]
    pub fn activity_date(&self) -> String {
        let movement_date = normalize_date(self.latest_movement_date.as_deref());
        if movement_date.trim().is_empty() {
            self.created_date()
        } else {
            movement_date
        }
    }

    /// Returns every narrative text attached to the case, joined by spaces.
    ///
    /// Used as the classification input for risk terms.
    #[must_use]
    pub fn narrative(&self) -> String {
        let parts = [
            self.latest_movement.as_str(),
            self.risk_rationale.as_str(),
            self.deadline_hint.as_deref().unwrap_or_default(),
        ];
        parts
            .iter()
            .filter(|part| !part.trim().is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
