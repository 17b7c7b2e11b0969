//! Port contracts for the audit log.

pub mod sink;

pub use sink::{AuditSink, AuditSinkError, AuditSinkResult};
