//! Ingestion pipeline runs and their deduplication.
//!
//! Each stored run row records one attempt to ingest a source document.
//! Webhook retries and double deliveries leave several rows for the same
//! logical run; [`dedupe`] collapses them before any counting happens.
//!
//! - Domain types in [`domain`]
//! - Raw-row normalisation in [`adapters`]
//! - Deduplication in [`dedupe`]

pub mod adapters;
pub mod dedupe;
pub mod domain;

pub use dedupe::{dedupe, dedupe_key};

#[cfg(test)]
mod tests;
