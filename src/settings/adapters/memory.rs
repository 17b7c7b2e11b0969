//! In-memory settings store with change broadcast.
//!
//! The watch channel doubles as the local cache: its current value is what
//! [`SettingsStore::load`] returns, so reads keep working while the remote
//! store is unreachable.

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::info;

use crate::settings::{
    domain::OfficeSettings,
    ports::{SettingsStore, SettingsStoreResult},
};

/// Thread-safe in-memory settings store.
#[derive(Debug, Clone)]
pub struct InMemorySettingsStore {
    sender: watch::Sender<OfficeSettings>,
}

impl InMemorySettingsStore {
    /// Creates a store seeded with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(OfficeSettings::default())
    }

    /// Creates a store seeded with `settings`.
    #[must_use]
    pub fn with_settings(settings: OfficeSettings) -> Self {
        let (sender, _) = watch::channel(settings);
        Self { sender }
    }
}

impl Default for InMemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn load(&self) -> SettingsStoreResult<OfficeSettings> {
        Ok(self.sender.borrow().clone())
    }

    async fn upsert(&self, settings: OfficeSettings) -> SettingsStoreResult<()> {
        settings.validate()?;
        info!(
            alert_window_days = settings.alert_window_days,
            "office settings updated"
        );
        self.sender.send_replace(settings);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<OfficeSettings> {
        self.sender.subscribe()
    }
}
