//! Multi-criteria filtering of audit entries.
//!
//! Every criterion is optional. An absent value, an empty string and the
//! wildcard `"all"` all mean "no constraint". Criteria combine with AND.

use crate::audit::domain::AuditLogEntry;
use crate::calendar::normalize_date;

/// Wildcard accepted by the exact-match criteria.
pub const ALL: &str = "all";

/// Criteria for [`filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditFilter {
    actor: Option<String>,
    action: Option<String>,
    resource: Option<String>,
    from: Option<String>,
    to: Option<String>,
    search: Option<String>,
}

fn constraint(value: Option<&str>) -> Option<&str> {
    value.filter(|inner| !inner.is_empty() && *inner != ALL)
}

impl AuditFilter {
    /// Creates a filter that accepts every entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts entries to one actor display name.
    #[must_use]
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Restricts entries to one action tag.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Restricts entries to one resource name.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Keeps entries created on or after `from` (date portion only).
    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Keeps entries created on or before `to` (date portion only).
    #[must_use]
    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Keeps entries whose target, action, resource or actor contains
    /// `search`, ignoring case.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Returns whether `entry` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, entry: &AuditLogEntry) -> bool {
        let exact = |wanted: &Option<String>, actual: &str| {
            constraint(wanted.as_deref()).is_none_or(|value| value == actual)
        };
        if !exact(&self.actor, &entry.actor_name)
            || !exact(&self.action, &entry.action)
            || !exact(&self.resource, &entry.resource)
        {
            return false;
        }

        let day = entry.created_date();
        let from = normalize_date(self.from.as_deref());
        let to = normalize_date(self.to.as_deref());
        if day.is_empty() && !(from.is_empty() && to.is_empty()) {
            return false;
        }
        if !from.is_empty() && day.as_str() < from.as_str() {
            return false;
        }
        if !to.is_empty() && day.as_str() > to.as_str() {
            return false;
        }

        self.search
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty())
            .is_none_or(|query| entry.haystack().contains(&query.to_lowercase()))
    }
}

/// Returns the entries satisfying `criteria`, in input order.
///
/// # Examples
///
/// ```rust
/// use jurisdash::audit::{domain::AuditLogEntry, filter::{AuditFilter, filter}};
///
/// let entries = vec![
///     AuditLogEntry { action: "UPDATE_ROLE".to_owned(), ..AuditLogEntry::default() },
///     AuditLogEntry { action: "DELETE_CASE".to_owned(), ..AuditLogEntry::default() },
/// ];
/// let criteria = AuditFilter::new().with_resource("all").with_action("UPDATE_ROLE");
/// assert_eq!(filter(&entries, &criteria).len(), 1);
/// ```
#[must_use]
pub fn filter(entries: &[AuditLogEntry], criteria: &AuditFilter) -> Vec<AuditLogEntry> {
    entries
        .iter()
        .filter(|entry| criteria.matches(entry))
        .cloned()
        .collect()
}
