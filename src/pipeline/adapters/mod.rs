//! Adapters mapping data-store rows into canonical run records.

pub mod raw;
