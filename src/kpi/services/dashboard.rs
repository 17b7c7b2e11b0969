//! Dashboard service binding the aggregators to a clock and the settings
//! store.

use std::sync::Arc;

use chrono::{DateTime, Local};
use mockable::Clock;
use serde::Serialize;

use crate::case::risk::RiskClassifier;
use crate::kpi::{
    dashboard::{DashboardKpis, compute_dashboard},
    insight::{CaseInsight, case_insights},
    snapshot::Snapshot,
};
use crate::settings::{
    domain::{AnalyticsConfig, OfficeSettings},
    ports::{SettingsStore, SettingsStoreResult},
};
use crate::text::MatchMode;

/// Dashboard and insights computed from one settings read and one clock
/// reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    /// Local time the report was computed for.
    pub generated_at: DateTime<Local>,
    /// Parameters the figures were computed with.
    pub config: AnalyticsConfig,
    /// Aggregated figures.
    pub dashboard: DashboardKpis,
    /// Per-case insights, in snapshot order.
    pub insights: Vec<CaseInsight>,
}

/// KPI orchestration service.
#[derive(Clone)]
pub struct KpiService<S, C>
where
    S: SettingsStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    match_mode: MatchMode,
}

impl<S, C> KpiService<S, C>
where
    S: SettingsStore,
    C: Clock + Send + Sync,
{
    /// Creates a new KPI service using substring risk matching.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            match_mode: MatchMode::Substring,
        }
    }

    /// Selects the risk matching mode written into every derived
    /// [`AnalyticsConfig`].
    #[must_use]
    pub const fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    async fn resolve(&self) -> SettingsStoreResult<(OfficeSettings, AnalyticsConfig)> {
        let settings = self.store.load().await?;
        let config = AnalyticsConfig::from_settings(&settings).with_risk_match_mode(self.match_mode);
        Ok((settings, config))
    }

    /// Derives the analytics parameters from the current settings.
    ///
    /// # Errors
    ///
    /// Propagates settings store failures.
    pub async fn config(&self) -> SettingsStoreResult<AnalyticsConfig> {
        self.resolve().await.map(|(_, config)| config)
    }

    /// Computes the dashboard for `snapshot` as of the clock's local time.
    ///
    /// # Errors
    ///
    /// Propagates settings store failures.
    pub async fn dashboard(&self, snapshot: &Snapshot) -> SettingsStoreResult<DashboardKpis> {
        let config = self.config().await?;
        Ok(compute_dashboard(snapshot, &self.clock.local(), &config))
    }

    /// Builds per-case insights with the current risk vocabularies.
    ///
    /// # Errors
    ///
    /// Propagates settings store failures.
    pub async fn insights(&self, snapshot: &Snapshot) -> SettingsStoreResult<Vec<CaseInsight>> {
        let (settings, config) = self.resolve().await?;
        let classifier = RiskClassifier::from_config(&settings, &config);
        let today = self.clock.local().date_naive();
        Ok(case_insights(&snapshot.cases, today, &classifier))
    }

    /// Computes the dashboard and the insights together.
    ///
    /// Settings are loaded once and the clock is read once; both halves
    /// share the same vocabularies, alert window and date.
    ///
    /// # Errors
    ///
    /// Propagates settings store failures.
    pub async fn report(&self, snapshot: &Snapshot) -> SettingsStoreResult<DashboardReport> {
        let (settings, config) = self.resolve().await?;
        let now = self.clock.local();
        let classifier = RiskClassifier::from_config(&settings, &config);
        Ok(DashboardReport {
            generated_at: now,
            config,
            dashboard: compute_dashboard(snapshot, &now, &config),
            insights: case_insights(&snapshot.cases, now.date_naive(), &classifier),
        })
    }
}
