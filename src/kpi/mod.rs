//! Dashboard KPIs computed from a snapshot of cases, tasks and runs.
//!
//! Every aggregate is recomputed from scratch on each call: callers poll by
//! fetching a fresh [`Snapshot`] and invoking the aggregators again. None of
//! the functions here read the clock or the settings store themselves;
//! [`services::KpiService`] resolves both and delegates to
//! [`compute_dashboard`].
//!
//! - Input snapshots in [`snapshot`]
//! - Individual aggregates in [`deadline`], [`risk`], [`pipeline`] and
//!   [`productivity`]
//! - Per-case views in [`upcoming`] and [`insight`]
//! - The bundled result in [`dashboard`]

pub mod dashboard;
pub mod deadline;
pub mod insight;
pub mod pipeline;
pub mod productivity;
pub mod risk;
pub mod services;
pub mod snapshot;
pub mod upcoming;

pub use dashboard::{DashboardKpis, compute_dashboard};
pub use snapshot::{RawSnapshot, Snapshot};

#[cfg(test)]
mod tests;
