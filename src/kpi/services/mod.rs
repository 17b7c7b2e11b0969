//! Services resolving clock and settings for KPI computation.

mod dashboard;

pub use dashboard::{DashboardReport, KpiService};
