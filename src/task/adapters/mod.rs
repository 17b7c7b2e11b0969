//! Adapters mapping data-store rows into canonical task records.

pub mod raw;
