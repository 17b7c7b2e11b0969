//! Port contracts for office settings.

pub mod store;

pub use store::{SettingsStore, SettingsStoreError, SettingsStoreResult};
