//! Interactive case search over identifying fields.

use crate::case::domain::{Case, ManualStatus};
use crate::text::normalize_text;

/// Returns whether `case` matches a free-text query.
///
/// The query is folded and searched in the case number, party name, court
/// and jurisdiction. A blank query matches every case.
#[must_use]
pub fn matches_query(case: &Case, query: &str) -> bool {
    let needle = normalize_text(query.trim());
    if needle.is_empty() {
        return true;
    }
    [
        case.case_number.as_str(),
        case.party_name.as_str(),
        case.court.as_str(),
        case.jurisdiction.as_str(),
    ]
    .iter()
    .any(|field| normalize_text(field).contains(&needle))
}

/// Conjunctive filter for case listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseFilter {
    query: String,
    manual_status: Option<ManualStatus>,
    owner_id: Option<String>,
    unassigned_only: bool,
}

impl CaseFilter {
    /// Creates a filter that accepts every case.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to cases matching a free-text query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Restricts results to one manual review status.
    #[must_use]
    pub const fn with_manual_status(mut self, status: ManualStatus) -> Self {
        self.manual_status = Some(status);
        self
    }

    /// Restricts results to cases owned by `owner_id`.
    #[must_use]
    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Restricts results to cases with no responsible user.
    #[must_use]
    pub const fn unassigned_only(mut self) -> Self {
        self.unassigned_only = true;
        self
    }

    /// Returns whether `case` passes every configured criterion.
    #[must_use]
    pub fn matches(&self, case: &Case) -> bool {
        let status_ok = self
            .manual_status
            .is_none_or(|status| case.manual_status == status);
        let owner_ok = self
            .owner_id
            .as_deref()
            .is_none_or(|owner| case.owner_id.as_deref() == Some(owner));
        let assignment_ok = !self.unassigned_only || !case.is_assigned();
        status_ok && owner_ok && assignment_ok && matches_query(case, &self.query)
    }

    /// Returns the matching cases in input order.
    #[must_use]
    pub fn apply(&self, cases: &[Case]) -> Vec<Case> {
        cases
            .iter()
            .filter(|case| self.matches(case))
            .cloned()
            .collect()
    }
}
