//! Parameters handed to KPI computations.

use serde::{Deserialize, Serialize};

use super::{DEFAULT_ALERT_WINDOW_DAYS, OfficeSettings};
use crate::text::MatchMode;

/// Explicit configuration for analytics computations.
///
/// # Examples
///
/// ```
/// use jurisdash::settings::domain::AnalyticsConfig;
///
/// let config = AnalyticsConfig::default();
/// assert_eq!(config.alert_window_days, 7);
/// assert_eq!(config.stale_after_days, 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Days ahead within which a deadline counts as upcoming.
    pub alert_window_days: u32,
    /// Days without movement after which a case counts as stale.
    pub stale_after_days: u32,
    /// Days back within which a completed task counts as recent.
    pub completed_window_days: u32,
    /// Matching mode used for risk vocabularies.
    pub risk_match_mode: MatchMode,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            alert_window_days: DEFAULT_ALERT_WINDOW_DAYS,
            stale_after_days: 30,
            completed_window_days: 7,
            risk_match_mode: MatchMode::Substring,
        }
    }
}

impl AnalyticsConfig {
    /// Derives a configuration from the office settings.
    #[must_use]
    pub fn from_settings(settings: &OfficeSettings) -> Self {
        Self {
            alert_window_days: settings.alert_window_days,
            ..Self::default()
        }
    }

    /// Overrides the alert window.
    #[must_use]
    pub const fn with_alert_window(mut self, days: u32) -> Self {
        self.alert_window_days = days;
        self
    }

    /// Overrides the risk matching mode.
    #[must_use]
    pub const fn with_risk_match_mode(mut self, mode: MatchMode) -> Self {
        self.risk_match_mode = mode;
        self
    }
}
