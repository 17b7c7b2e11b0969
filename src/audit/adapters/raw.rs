//! Normalisation of raw audit rows.
//!
//! The actor display name is read from a joined profile relation when the
//! row does not carry it directly.

use serde_json::Value;

use crate::audit::domain::AuditLogEntry;
use crate::row;

const ID: &[&str] = &["id"];
const ACTOR_ID: &[&str] = &["actor_id", "user_id", "usuario_id"];
const ACTOR_NAME: &[&str] = &[
    "actor_name",
    "/profiles/nome",
    "/profiles/full_name",
    "/actor/nome",
    "/actor/full_name",
];
const ACTION: &[&str] = &["action", "acao"];
const RESOURCE: &[&str] = &["resource", "recurso", "entity"];
const TARGET_ID: &[&str] = &["target_id", "entity_id", "alvo_id"];
const BEFORE: &[&str] = &["before", "antes", "old_data"];
const AFTER: &[&str] = &["after", "depois", "new_data"];
const DETAILS: &[&str] = &["details", "detalhes"];
const CREATED_AT: &[&str] = &["created_at", "criado_em"];

/// Maps a raw audit row into an [`AuditLogEntry`].
#[must_use]
pub fn entry_from_row(record: &Value) -> AuditLogEntry {
    AuditLogEntry {
        id: row::text(record, ID).unwrap_or_default(),
        actor_id: row::text(record, ACTOR_ID),
        actor_name: row::text(record, ACTOR_NAME).unwrap_or_default(),
        action: row::text(record, ACTION).unwrap_or_default(),
        resource: row::text(record, RESOURCE).unwrap_or_default(),
        target_id: row::text(record, TARGET_ID).unwrap_or_default(),
        before: row::object(record, BEFORE),
        after: row::object(record, AFTER),
        details: row::object(record, DETAILS).unwrap_or_default(),
        created_at: row::stamped(record, CREATED_AT),
    }
}

/// Maps every raw audit row.
#[must_use]
pub fn entries_from_rows(records: &[Value]) -> Vec<AuditLogEntry> {
    records.iter().map(entry_from_row).collect()
}
