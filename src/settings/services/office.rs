//! Service layer for editing office settings.
//!
//! Every edit reads the current settings, derives a fresh value and upserts
//! it as a whole, so subscribers always observe complete snapshots.

use std::sync::Arc;

use tracing::debug;

use crate::settings::{
    domain::OfficeSettings,
    ports::{SettingsStore, SettingsStoreResult},
};
use crate::text::toggle_term_in_list;

/// Which risk vocabulary an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    /// The high-risk term list.
    High,
    /// The medium-risk term list.
    Medium,
}

/// Settings administration service.
#[derive(Clone)]
pub struct SettingsService<S>
where
    S: SettingsStore,
{
    store: Arc<S>,
}

impl<S> SettingsService<S>
where
    S: SettingsStore,
{
    /// Creates a new settings service.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the current settings.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn current(&self) -> SettingsStoreResult<OfficeSettings> {
        self.store.load().await
    }

    /// Adds `term` to a risk vocabulary, or removes it when present.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn toggle_risk_term(
        &self,
        tier: RiskTier,
        term: &str,
    ) -> SettingsStoreResult<OfficeSettings> {
        let current = self.store.load().await?;
        let updated = match tier {
            RiskTier::High => OfficeSettings {
                high_risk_terms: toggle_term_in_list(&current.high_risk_terms, term),
                ..current
            },
            RiskTier::Medium => OfficeSettings {
                medium_risk_terms: toggle_term_in_list(&current.medium_risk_terms, term),
                ..current
            },
        };
        debug!(?tier, term, "toggled risk term");
        self.store.upsert(updated.clone()).await?;
        Ok(updated)
    }

    /// Replaces the alert window.
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range windows and propagates
    /// store failures.
    pub async fn set_alert_window(&self, days: u32) -> SettingsStoreResult<OfficeSettings> {
        let updated = OfficeSettings {
            alert_window_days: days,
            ..self.store.load().await?
        };
        self.store.upsert(updated.clone()).await?;
        Ok(updated)
    }

    /// Replaces the minuta template.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn set_minuta_template(
        &self,
        template: impl Into<String>,
    ) -> SettingsStoreResult<OfficeSettings> {
        let updated = OfficeSettings {
            minuta_template: template.into(),
            ..self.store.load().await?
        };
        self.store.upsert(updated.clone()).await?;
        Ok(updated)
    }
}
