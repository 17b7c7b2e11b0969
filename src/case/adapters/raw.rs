//! Normalisation of raw case rows.
//!
//! Case rows were written by several generations of the dashboard and the
//! ingestion webhooks, so most fields have more than one historical name.
//! The first populated candidate wins, left to right.

use serde_json::Value;
use tracing::warn;

use crate::case::domain::{ApprovalStatus, Case, ManualStatus, Movement};
use crate::row;

const ID: &[&str] = &["id"];
const CASE_NUMBER: &[&str] = &["numero_processo", "case_number", "numero"];
const PARTY: &[&str] = &["parte", "party_name", "cliente", "nome_parte"];
const COURT: &[&str] = &["tribunal", "court", "vara"];
const JURISDICTION: &[&str] = &["uf", "jurisdiction", "comarca"];
const OWNER: &[&str] = &["responsavel_id", "owner_id", "assigned_to"];
const MANUAL_STATUS: &[&str] = &["status_manual", "manual_status"];
const APPROVAL: &[&str] = &["approval_status", "status_aprovacao"];
const DEADLINE: &[&str] = &["prazo_final", "deadline", "data_prazo"];
const DEADLINE_HINT: &[&str] = &["prazo_ia", "ai_deadline", "deadline_hint"];
const RISK_LABEL: &[&str] = &["risco", "risk_label", "nivel_risco"];
const RISK_RATIONALE: &[&str] = &["risco_motivo", "risk_rationale", "justificativa_risco"];
const LATEST_MOVEMENT: &[&str] = &["ultima_movimentacao", "latest_movement", "resumo"];
const LATEST_MOVEMENT_DATE: &[&str] = &[
    "data_ultima_movimentacao",
    "latest_movement_date",
    "data_movimentacao",
];
const CREATED_AT: &[&str] = &["created_at", "criado_em"];
const MOVEMENTS: &[&str] = &["movimentacoes", "movements", "historico"];
const MOVEMENT_SUMMARY: &[&str] = &["resumo", "summary", "descricao"];
const MOVEMENT_DATE: &[&str] = &["data", "date", "data_movimentacao"];

/// Maps a raw case row into a canonical [`Case`].
///
/// Unknown manual or approval statuses are logged and replaced by their
/// defaults; absent fields stay empty.
#[must_use]
pub fn case_from_row(record: &Value) -> Case {
    let text = |keys: &[&str]| row::text(record, keys).unwrap_or_default();
    let id = text(ID);

    let manual_status = row::text(record, MANUAL_STATUS).map_or_else(ManualStatus::default, |raw| {
        ManualStatus::try_from(raw.as_str()).unwrap_or_else(|err| {
            warn!(case_id = %id, error = %err, "defaulting manual status");
            ManualStatus::default()
        })
    });
    let approval = ApprovalStatus::from_stored(row::text(record, APPROVAL).as_deref())
        .unwrap_or_else(|err| {
            warn!(case_id = %id, error = %err, "treating approval status as pending");
            ApprovalStatus::Pending
        });

    Case {
        case_number: text(CASE_NUMBER),
        party_name: text(PARTY),
        court: text(COURT),
        jurisdiction: text(JURISDICTION),
        owner_id: row::text(record, OWNER),
        manual_status,
        approval,
        deadline: row::text(record, DEADLINE),
        deadline_hint: row::text(record, DEADLINE_HINT),
        risk_label: row::text(record, RISK_LABEL),
        risk_rationale: text(RISK_RATIONALE),
        latest_movement: text(LATEST_MOVEMENT),
        latest_movement_date: row::text(record, LATEST_MOVEMENT_DATE),
        created_at: row::stamped(record, CREATED_AT),
        movements: row::array(record, MOVEMENTS)
            .iter()
            .map(movement_from_row)
            .collect(),
        id,
    }
}

/// Maps a raw movement entry into a [`Movement`].
#[must_use]
pub fn movement_from_row(record: &Value) -> Movement {
    Movement::new(
        row::text(record, MOVEMENT_SUMMARY).unwrap_or_default(),
        row::text(record, MOVEMENT_DATE),
    )
}

/// Maps every row in `rows`, preserving order.
#[must_use]
pub fn cases_from_rows(rows: &[Value]) -> Vec<Case> {
    rows.iter().map(case_from_row).collect()
}
