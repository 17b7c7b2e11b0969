//! Adapter implementations of the audit ports.

pub mod memory;
pub mod raw;

pub use memory::InMemoryAuditSink;
