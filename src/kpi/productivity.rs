//! Per-user workload and completion figures.
//!
//! Draft tasks hold generated documents and are ignored throughout.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Local, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::days_to_due;
use crate::case::domain::Case;
use crate::kpi::risk::is_high_label;
use crate::task::domain::Task;

/// Productivity figures over a set of tasks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductivityKpis {
    /// Open tasks per author.
    pub open_by_user: BTreeMap<String, usize>,
    /// Open tasks past their due date per author.
    pub overdue_by_user: BTreeMap<String, usize>,
    /// Completed tasks updated within the completion window.
    pub completed_this_week: usize,
    /// Mean hours from creation to last update over completed tasks.
    pub avg_completion_hours: f64,
    /// Identifiers of high-risk cases with no open task.
    pub high_risk_no_open_task: Vec<String>,
}

/// Computes productivity figures.
///
/// Authors appear in the per-user maps only when their count is non-zero.
/// Completed tasks without a positive creation-to-update span are left out
/// of the completion-hours mean, which is `0.0` when nothing qualifies.
#[must_use]
pub fn productivity_kpis(
    cases: &[Case],
    tasks: &[Task],
    now: &DateTime<Local>,
    completed_window_days: u32,
) -> ProductivityKpis {
    let today = now.date_naive();
    let window_start = now.with_timezone(&Utc) - TimeDelta::days(i64::from(completed_window_days));
    let actionable: Vec<&Task> = tasks.iter().filter(|task| !task.is_draft()).collect();

    let mut open_by_user = BTreeMap::new();
    let mut overdue_by_user = BTreeMap::new();
    for task in actionable.iter().filter(|task| task.is_open()) {
        *open_by_user.entry(task.author_id.clone()).or_insert(0) += 1;
        if days_to_due(&task.due_date(), today).is_some_and(|days| days < 0) {
            *overdue_by_user.entry(task.author_id.clone()).or_insert(0) += 1;
        }
    }

    let completed: Vec<&Task> = actionable
        .iter()
        .copied()
        .filter(|task| task.is_completed())
        .collect();
    let completed_this_week = completed
        .iter()
        .filter(|task| task.updated_at.is_some_and(|updated| updated >= window_start))
        .count();
    let hours: Vec<f64> = completed
        .iter()
        .filter_map(|task| task.hours_to_update())
        .collect();

    let cases_with_open_work: HashSet<&str> = actionable
        .iter()
        .filter(|task| task.is_open())
        .map(|task| task.case_id.as_str())
        .collect();
    let high_risk_no_open_task = cases
        .iter()
        .filter(|case| is_high_label(&case.risk_label_lower()))
        .filter(|case| !cases_with_open_work.contains(case.id.as_str()))
        .map(|case| case.id.clone())
        .collect();

    ProductivityKpis {
        open_by_user,
        overdue_by_user,
        completed_this_week,
        avg_completion_hours: mean(&hours),
        high_risk_no_open_task,
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averaging fractional hours"
)]
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
