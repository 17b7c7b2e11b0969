//! In-memory append-only audit sink.

use std::cmp::Reverse;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::debug;

use crate::audit::{
    domain::AuditLogEntry,
    ports::{AuditSink, AuditSinkError, AuditSinkResult},
};

/// Thread-safe in-memory audit sink.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditSink {
    entries: Arc<RwLock<Vec<AuditLogEntry>>>,
}

impl InMemoryAuditSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: &impl ToString) -> AuditSinkError {
    AuditSinkError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AuditSink for InMemoryAuditSink {
    async fn append(&self, entry: AuditLogEntry) -> AuditSinkResult<()> {
        let mut entries = self.entries.write().map_err(|err| poisoned(&err))?;
        if entries.iter().any(|existing| existing.id == entry.id) {
            return Err(AuditSinkError::DuplicateEntry(entry.id));
        }
        debug!(
            action = %entry.action,
            resource = %entry.resource,
            target_id = %entry.target_id,
            "audit entry appended"
        );
        entries.push(entry);
        Ok(())
    }

    async fn entries(&self) -> AuditSinkResult<Vec<AuditLogEntry>> {
        let entries = self.entries.read().map_err(|err| poisoned(&err))?;
        let mut snapshot = entries.clone();
        snapshot.sort_by_key(|entry| Reverse(entry.created_at));
        Ok(snapshot)
    }
}
