//! Shared world state for KPI aggregation BDD scenarios.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use jurisdash::case::domain::Case;
use jurisdash::kpi::DashboardKpis;
use jurisdash::pipeline::domain::PipelineRun;
use jurisdash::settings::domain::AnalyticsConfig;
use jurisdash::task::domain::Task;
use rstest::fixture;

/// Scenario world for KPI aggregation behaviour tests.
pub struct KpiWorld {
    pub now: DateTime<Local>,
    pub config: AnalyticsConfig,
    pub cases: Vec<Case>,
    pub tasks: Vec<Task>,
    pub runs: Vec<PipelineRun>,
    pub dashboard: Option<DashboardKpis>,
}

impl KpiWorld {
    /// Creates a world anchored at the current time with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Local::now(),
            config: AnalyticsConfig::default(),
            cases: Vec::new(),
            tasks: Vec::new(),
            runs: Vec::new(),
            dashboard: None,
        }
    }

    /// Returns the computed dashboard.
    ///
    /// # Errors
    ///
    /// Fails when no `When` step has computed it yet.
    pub fn dashboard(&self) -> Result<&DashboardKpis, eyre::Report> {
        self.dashboard
            .as_ref()
            .ok_or_else(|| eyre::eyre!("dashboard has not been computed"))
    }
}

impl Default for KpiWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> KpiWorld {
    KpiWorld::default()
}

/// Resolves local noon on `date`.
///
/// # Errors
///
/// Fails for malformed dates or when noon is ambiguous locally.
pub fn local_noon(date: &str) -> Result<DateTime<Local>, eyre::Report> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
    let naive = day
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| eyre::eyre!("noon is not representable on {date}"))?;
    Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| eyre::eyre!("local noon on {date} is ambiguous"))
}
