//! Application services for office settings administration.

mod office;

pub use office::{RiskTier, SettingsService};
