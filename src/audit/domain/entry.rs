//! Audit log entry record.

use chrono::{DateTime, FixedOffset};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::calendar::format_date;

/// One append-only audit event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Entry identifier.
    pub id: String,
    /// Acting user identifier.
    pub actor_id: Option<String>,
    /// Acting user display name.
    pub actor_name: String,
    /// Action tag, for example `UPDATE_ROLE`.
    pub action: String,
    /// Name of the affected resource.
    pub resource: String,
    /// Identifier of the affected record.
    pub target_id: String,
    /// Snapshot before the change.
    pub before: Option<Value>,
    /// Snapshot after the change.
    pub after: Option<Value>,
    /// Free-form details.
    pub details: Value,
    /// Creation timestamp, carrying the offset it was written with.
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl AuditLogEntry {
    /// Records a new event stamped with the clock's current time.
    #[must_use]
    pub fn record(
        actor_id: impl Into<String>,
        actor_name: impl Into<String>,
        action: impl Into<String>,
        resource: impl Into<String>,
        target_id: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            actor_id: Some(actor_id.into()),
            actor_name: actor_name.into(),
            action: action.into(),
            resource: resource.into(),
            target_id: target_id.into(),
            before: None,
            after: None,
            details: Value::Null,
            created_at: Some(clock.utc().fixed_offset()),
        }
    }

    /// Attaches before and after snapshots.
    #[must_use]
    pub fn with_change(mut self, before: Value, after: Value) -> Self {
        self.before = Some(before);
        self.after = Some(after);
        self
    }

    /// Attaches free-form details.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Returns the creation date in `YYYY-MM-DD` form, or an empty string.
    ///
    /// The date is read in the entry's own offset, so it matches the date
    /// portion of the stored timestamp text.
    #[must_use]
    pub fn created_date(&self) -> String {
        self.created_at
            .map(|created| format_date(created.date_naive()))
            .unwrap_or_default()
    }

    /// Text searched by free-text queries: target, action, resource and
    /// actor name, lowercased.
    #[must_use]
    pub fn haystack(&self) -> String {
        [
            self.target_id.as_str(),
            self.action.as_str(),
            self.resource.as_str(),
            self.actor_name.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}
