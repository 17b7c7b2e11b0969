//! Append-only sink for audit events.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::audit::domain::AuditLogEntry;

/// Result type for audit sink operations.
pub type AuditSinkResult<T> = Result<T, AuditSinkError>;

/// Audit persistence contract.
///
/// Entries are only ever appended. There is no update or delete.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Appends an entry.
    ///
    /// # Errors
    ///
    /// Returns [`AuditSinkError::DuplicateEntry`] when the identifier is
    /// already recorded or [`AuditSinkError::Persistence`] when the write
    /// fails.
    async fn append(&self, entry: AuditLogEntry) -> AuditSinkResult<()>;

    /// Returns every recorded entry, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AuditSinkError::Persistence`] when the log cannot be read.
    async fn entries(&self) -> AuditSinkResult<Vec<AuditLogEntry>>;
}

/// Errors returned by audit sink implementations.
#[derive(Debug, Clone, Error)]
pub enum AuditSinkError {
    /// An entry with the same identifier already exists.
    #[error("duplicate audit entry: {0}")]
    DuplicateEntry(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuditSinkError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
