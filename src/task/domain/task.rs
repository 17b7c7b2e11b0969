//! Task record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A unit of work logged against a case.
///
/// Three deadline columns coexist for historical reasons; see
/// [`Task::due_date`] for the precedence between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Internal row identifier.
    pub id: String,
    /// Owning case identifier.
    pub case_id: String,
    /// Author of the task; empty when unknown.
    pub author_id: String,
    /// Free-text status tag.
    pub status: String,
    /// Narrative report.
    pub report: String,
    /// Suggested next action.
    pub suggestion: Option<String>,
    /// Attachment reference in file storage.
    pub attachment: Option<String>,
    /// Explicit limit date.
    pub limit_date: Option<String>,
    /// Generic deadline column.
    pub deadline: Option<String>,
    /// Alternate deadline column.
    pub alt_deadline: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Latest update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Hours between creation and the latest update.
    ///
    /// Returns `None` unless both timestamps are present and the difference
    /// is strictly positive.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "fractional hours are reported as floating point"
    )]
    pub fn hours_to_update(&self) -> Option<f64> {
        let created = self.created_at?;
        let updated = self.updated_at?;
        let millis = (updated - created).num_milliseconds();
        (millis > 0).then(|| millis as f64 / 3_600_000.0)
    }
}
