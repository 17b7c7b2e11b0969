//! Adapter implementations for the settings port.

pub mod memory;
pub mod raw;

pub use memory::InMemorySettingsStore;
