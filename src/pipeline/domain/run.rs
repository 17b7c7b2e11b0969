//! Pipeline run record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Run status reported by successful ingestions.
pub const SUCCESS_STATUS: &str = "success";

/// Run statuses reported by failed ingestions.
pub const FAILURE_STATUSES: &[&str] = &["error", "failed"];

/// Movement extracted by an ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunPayload {
    /// Case detected in the source document.
    pub detected_case_id: Option<String>,
    /// Summary of the extracted movement.
    pub movement_summary: Option<String>,
    /// Date of the extracted movement.
    pub movement_date: Option<String>,
}

/// One stored ingestion attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineRun {
    /// Row identifier.
    pub id: String,
    /// Identifier of the source document in the upstream drive.
    pub source_id: Option<String>,
    /// File name of the source document.
    pub file_name: Option<String>,
    /// Reported status tag.
    pub status: Option<String>,
    /// Extracted movement payload.
    pub payload: RunPayload,
    /// Number of cases detected.
    pub cases_detected: Option<u64>,
    /// Number of movements inserted.
    pub movements_inserted: Option<u64>,
    /// Number of duplicate movements skipped.
    pub duplicates_avoided: Option<u64>,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: Option<u64>,
    /// Short error code or text.
    pub error: Option<String>,
    /// Long-form error message.
    pub error_message: Option<String>,
    /// Whether a person must review the result.
    pub needs_review: bool,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl PipelineRun {
    /// Returns the lowercased status tag, or an empty string.
    #[must_use]
    pub fn status_lower(&self) -> String {
        self.status
            .as_deref()
            .map(|status| status.trim().to_lowercase())
            .unwrap_or_default()
    }

    /// Returns whether either error field is populated.
    #[must_use]
    pub fn has_error(&self) -> bool {
        [&self.error, &self.error_message]
            .into_iter()
            .flatten()
            .any(|text| !text.trim().is_empty())
    }

    /// Returns the first populated error text.
    #[must_use]
    pub fn error_text(&self) -> Option<&str> {
        [&self.error, &self.error_message]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|text| !text.trim().is_empty())
    }

    /// Counts as a success: status `success`, or no error field populated.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status_lower() == SUCCESS_STATUS || !self.has_error()
    }

    /// Counts as a failure: status `error`/`failed`, or an error field
    /// populated.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        FAILURE_STATUSES.contains(&self.status_lower().as_str()) || self.has_error()
    }

    /// Creation time in epoch milliseconds; missing timestamps sort as zero.
    #[must_use]
    pub fn created_millis(&self) -> i64 {
        self.created_at
            .map_or(0, |created| created.timestamp_millis())
    }
}
