//! Deadline pressure counts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::case::{deadline::effective_deadline, domain::Case};

/// Deadline counts over a set of cases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineKpis {
    /// Cases whose effective deadline has passed.
    pub overdue: usize,
    /// Cases due today.
    pub due_today: usize,
    /// Cases due after today but within the alert window.
    pub due_within_window: usize,
    /// Cases without an owner, regardless of deadline.
    pub unassigned: usize,
}

/// Counts overdue, due-today, due-soon and unassigned cases.
///
/// Cases without a resolvable deadline only contribute to `unassigned`.
#[must_use]
pub fn deadline_kpis(cases: &[Case], today: NaiveDate, alert_window_days: u32) -> DeadlineKpis {
    let window = i64::from(alert_window_days);
    cases.iter().fold(DeadlineKpis::default(), |mut kpis, case| {
        if !case.is_assigned() {
            kpis.unassigned += 1;
        }
        match effective_deadline(case).days_to_due(today) {
            Some(days) if days < 0 => kpis.overdue += 1,
            Some(0) => kpis.due_today += 1,
            Some(days) if days <= window => kpis.due_within_window += 1,
            _ => {}
        }
        kpis
    })
}
