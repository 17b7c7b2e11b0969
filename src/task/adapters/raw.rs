//! Normalisation of raw task rows.

use serde_json::Value;

use crate::row;
use crate::task::domain::Task;

const ID: &[&str] = &["id"];
const CASE_ID: &[&str] = &["processo_id", "case_id"];
const AUTHOR: &[&str] = &["autor_id", "author_id", "user_id", "created_by"];
const STATUS: &[&str] = &["status", "situacao"];
const REPORT: &[&str] = &["relatorio", "report", "descricao"];
const SUGGESTION: &[&str] = &["sugestao", "suggestion", "acao_sugerida"];
const ATTACHMENT: &[&str] = &["anexo_url", "attachment", "arquivo"];
const LIMIT_DATE: &[&str] = &["data_limite", "limit_date"];
const DEADLINE: &[&str] = &["prazo", "deadline"];
const ALT_DEADLINE: &[&str] = &["prazo_final", "due_date"];
const CREATED_AT: &[&str] = &["created_at", "criado_em"];
const UPDATED_AT: &[&str] = &["updated_at", "atualizado_em"];

/// Maps a raw task row into a canonical [`Task`].
#[must_use]
pub fn task_from_row(record: &Value) -> Task {
    let text = |keys: &[&str]| row::text(record, keys).unwrap_or_default();
    Task {
        id: text(ID),
        case_id: text(CASE_ID),
        author_id: text(AUTHOR),
        status: text(STATUS),
        report: text(REPORT),
        suggestion: row::text(record, SUGGESTION),
        attachment: row::text(record, ATTACHMENT),
        limit_date: row::text(record, LIMIT_DATE),
        deadline: row::text(record, DEADLINE),
        alt_deadline: row::text(record, ALT_DEADLINE),
        created_at: row::timestamp(record, CREATED_AT),
        updated_at: row::timestamp(record, UPDATED_AT),
    }
}

/// Maps every row in `rows`, preserving order.
#[must_use]
pub fn tasks_from_rows(rows: &[Value]) -> Vec<Task> {
    rows.iter().map(task_from_row).collect()
}
