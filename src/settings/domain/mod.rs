//! Domain model for office settings.

mod config;
mod error;
mod office;

pub use config::AnalyticsConfig;
pub use error::SettingsError;
pub use office::{
    DEFAULT_ALERT_WINDOW_DAYS, DEFAULT_HIGH_RISK_TERMS, DEFAULT_MEDIUM_RISK_TERMS,
    MAX_ALERT_WINDOW_DAYS, OfficeSettings,
};
