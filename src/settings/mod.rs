//! Office-wide settings: alert window, risk vocabularies and the minuta
//! template.
//!
//! Settings form a singleton row upserted by administrators. Engine code
//! never reads them from ambient state: callers load a snapshot through
//! [`ports::SettingsStore`] and pass it, or an [`domain::AnalyticsConfig`]
//! derived from it, into each computation.
//!
//! - Domain types in [`domain`]
//! - Store contract in [`ports`]
//! - In-memory and raw-row adapters in [`adapters`]
//! - Administrative operations in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
