//! Store port for the singleton settings row.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::watch;

use crate::settings::domain::{OfficeSettings, SettingsError};

/// Result type for settings store operations.
pub type SettingsStoreResult<T> = Result<T, SettingsStoreError>;

/// Settings persistence and change-notification contract.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Returns the current settings.
    ///
    /// Implementations fall back to [`OfficeSettings::default`] when no row
    /// has been written yet.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsStoreError::Unavailable`] when the backing store
    /// cannot be read.
    async fn load(&self) -> SettingsStoreResult<OfficeSettings>;

    /// Creates or replaces the settings row and notifies subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsStoreError::Invalid`] when validation fails or
    /// [`SettingsStoreError::Unavailable`] when the write fails.
    async fn upsert(&self, settings: OfficeSettings) -> SettingsStoreResult<()>;

    /// Subscribes to settings changes.
    ///
    /// The receiver observes the latest value immediately and every later
    /// upsert.
    fn subscribe(&self) -> watch::Receiver<OfficeSettings>;
}

/// Errors returned by settings store implementations.
#[derive(Debug, Clone, Error)]
pub enum SettingsStoreError {
    /// The settings failed validation.
    #[error(transparent)]
    Invalid(#[from] SettingsError),

    /// The backing store failed.
    #[error("settings store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl SettingsStoreError {
    /// Wraps a backing store error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
