//! Step definitions for KPI aggregation scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
