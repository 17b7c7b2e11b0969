//! Legal cases: records, deadline inference, risk classification and search.
//!
//! The module follows hexagonal architecture:
//!
//! - Canonical records in [`domain`]
//! - Raw-row normalisation in [`adapters`]
//! - Pure classifiers in [`deadline`], [`risk`] and [`search`]

pub mod adapters;
pub mod deadline;
pub mod domain;
pub mod risk;
pub mod search;

#[cfg(test)]
mod tests;
