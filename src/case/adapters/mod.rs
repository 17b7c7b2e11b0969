//! Adapters mapping data-store rows into canonical case records.

pub mod raw;
