//! Audit log records, interactive filtering and export.
//!
//! Audit entries are append-only: they are written after a classification
//! drives a mutation (status change, role change) and never edited. This
//! module filters snapshots of them for the audit screen and renders CSV
//! exports.
//!
//! - Domain types in [`domain`]
//! - Sink contract in [`ports`]
//! - In-memory and raw-row adapters in [`adapters`]
//! - Filtering and export in [`filter`] and [`export`]

pub mod adapters;
pub mod domain;
pub mod export;
pub mod filter;
pub mod ports;

#[cfg(test)]
mod tests;
