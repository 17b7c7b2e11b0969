//! Office settings record.

use serde::{Deserialize, Serialize};

use super::SettingsError;

/// Alert window applied when none is configured.
pub const DEFAULT_ALERT_WINDOW_DAYS: u32 = 7;

/// Largest alert window accepted on upsert.
pub const MAX_ALERT_WINDOW_DAYS: u32 = 365;

/// High-risk vocabulary applied when none is configured.
pub const DEFAULT_HIGH_RISK_TERMS: &str =
    "liminar, tutela de urgência, penhora, bloqueio, revelia, prazo fatal";

/// Medium-risk vocabulary applied when none is configured.
pub const DEFAULT_MEDIUM_RISK_TERMS: &str = "audiência, perícia, intimação, recurso, sentença";

/// Singleton office configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeSettings {
    /// Days ahead within which a deadline raises an alert.
    pub alert_window_days: u32,
    /// Comma-separated high-risk terms.
    pub high_risk_terms: String,
    /// Comma-separated medium-risk terms.
    pub medium_risk_terms: String,
    /// Template used to render draft documents (minutas).
    pub minuta_template: String,
}

impl Default for OfficeSettings {
    fn default() -> Self {
        Self {
            alert_window_days: DEFAULT_ALERT_WINDOW_DAYS,
            high_risk_terms: DEFAULT_HIGH_RISK_TERMS.to_owned(),
            medium_risk_terms: DEFAULT_MEDIUM_RISK_TERMS.to_owned(),
            minuta_template: String::new(),
        }
    }
}

impl OfficeSettings {
    /// Checks the settings before they are stored.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidAlertWindow`] when the alert window is
    /// zero or exceeds [`MAX_ALERT_WINDOW_DAYS`].
    pub const fn validate(&self) -> Result<(), SettingsError> {
        if self.alert_window_days == 0 || self.alert_window_days > MAX_ALERT_WINDOW_DAYS {
            return Err(SettingsError::InvalidAlertWindow {
                got: self.alert_window_days,
                max: MAX_ALERT_WINDOW_DAYS,
            });
        }
        Ok(())
    }
}
