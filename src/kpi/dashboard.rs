//! The full KPI bundle shown on the dashboard.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::kpi::{
    deadline::{DeadlineKpis, deadline_kpis},
    pipeline::{PipelineKpis, pipeline_kpis},
    productivity::{ProductivityKpis, productivity_kpis},
    risk::{RiskKpis, risk_kpis},
    snapshot::Snapshot,
    upcoming::{DeadlineAlert, upcoming_deadlines},
};
use crate::settings::domain::AnalyticsConfig;

/// Every dashboard aggregate for one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardKpis {
    /// Deadline pressure counts.
    pub deadlines: DeadlineKpis,
    /// Risk distribution.
    pub risk: RiskKpis,
    /// Ingestion health.
    pub pipeline: PipelineKpis,
    /// Workload and completion figures.
    pub productivity: ProductivityKpis,
    /// Cases due within the alert window, soonest first.
    pub upcoming: Vec<DeadlineAlert>,
}

/// Computes every aggregate for `snapshot` as of `now`.
#[must_use]
pub fn compute_dashboard(
    snapshot: &Snapshot,
    now: &DateTime<Local>,
    config: &AnalyticsConfig,
) -> DashboardKpis {
    let today = now.date_naive();
    debug!(
        cases = snapshot.cases.len(),
        tasks = snapshot.tasks.len(),
        runs = snapshot.runs.len(),
        %today,
        "computing dashboard"
    );
    DashboardKpis {
        deadlines: deadline_kpis(&snapshot.cases, today, config.alert_window_days),
        risk: risk_kpis(&snapshot.cases, today, config.stale_after_days),
        pipeline: pipeline_kpis(&snapshot.runs, now),
        productivity: productivity_kpis(
            &snapshot.cases,
            &snapshot.tasks,
            now,
            config.completed_window_days,
        ),
        upcoming: upcoming_deadlines(&snapshot.cases, today, config.alert_window_days),
    }
}
