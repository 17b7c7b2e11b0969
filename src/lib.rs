//! Jurisdash: case analytics and deadline inference for law offices.
//!
//! This crate turns loosely-typed case, task, ingestion-run and audit rows
//! into inferred deadlines, risk classifications, task status, deduplicated
//! pipeline runs and office-wide KPIs. Every engine computation is a pure
//! function of its input snapshot; storage, transport and presentation stay
//! with the caller.
//!
//! # Architecture
//!
//! Jurisdash follows hexagonal architecture principles:
//!
//! - **Domain**: Canonical records and the pure classifiers over them
//! - **Ports**: Abstract trait interfaces for settings and audit collaborators
//! - **Adapters**: Raw-row normalisation and in-memory port implementations
//!
//! # Modules
//!
//! - [`calendar`]: Date canonicalisation and day arithmetic
//! - [`text`]: Accent-insensitive comparison and term lists
//! - [`case`]: Case records, deadline inference and risk classification
//! - [`task`]: Task records and completion status
//! - [`pipeline`]: Ingestion runs and their deduplication
//! - [`kpi`]: Deadline, risk, pipeline and productivity aggregates
//! - [`audit`]: Audit log records, filtering and export
//! - [`settings`]: Office-wide configuration and its store
//! - [`minuta`]: Draft document rendering from the office template

pub mod audit;
pub mod calendar;
pub mod case;
pub mod kpi;
pub mod minuta;
pub mod pipeline;
pub mod row;
pub mod settings;
pub mod task;
pub mod text;
