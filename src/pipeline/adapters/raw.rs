//! Normalisation of raw pipeline run rows.
//!
//! The payload column holds whatever the ingestion webhook posted: a JSON
//! object, a JSON document serialised as text, or nothing.

use serde_json::Value;

use crate::pipeline::domain::{PipelineRun, RunPayload};
use crate::row;

const ID: &[&str] = &["id"];
const SOURCE_ID: &[&str] = &["source_id", "drive_file_id", "arquivo_id"];
const FILE_NAME: &[&str] = &["file_name", "nome_arquivo", "arquivo"];
const STATUS: &[&str] = &["status"];
const PAYLOAD: &[&str] = &["payload", "raw_payload", "dados"];
const DETECTED_CASE: &[&str] = &["processo_id", "case_id", "detected_case_id"];
const MOVEMENT_SUMMARY: &[&str] = &["resumo", "movement_summary", "summary"];
const MOVEMENT_DATE: &[&str] = &["data", "movement_date", "date"];
const CASES_DETECTED: &[&str] = &["cases_detected", "processos_detectados"];
const MOVEMENTS_INSERTED: &[&str] = &["movements_inserted", "movimentacoes_inseridas"];
const DUPLICATES_AVOIDED: &[&str] = &["duplicates_avoided", "duplicatas_evitadas"];
const DURATION: &[&str] = &["duration_ms", "duracao_ms"];
const ERROR: &[&str] = &["error", "erro"];
const ERROR_MESSAGE: &[&str] = &["error_message", "mensagem_erro"];
const NEEDS_REVIEW: &[&str] = &["needs_review", "requer_revisao"];
const CREATED_AT: &[&str] = &["created_at", "criado_em"];

/// Maps a raw payload object into a [`RunPayload`].
#[must_use]
pub fn payload_from_value(payload: &Value) -> RunPayload {
    RunPayload {
        detected_case_id: row::text(payload, DETECTED_CASE),
        movement_summary: row::text(payload, MOVEMENT_SUMMARY),
        movement_date: row::text(payload, MOVEMENT_DATE),
    }
}

/// Maps a raw run row into a canonical [`PipelineRun`].
#[must_use]
pub fn run_from_row(record: &Value) -> PipelineRun {
    let payload = row::object(record, PAYLOAD)
        .map(|value| payload_from_value(&value))
        .unwrap_or_default();

    PipelineRun {
        id: row::text(record, ID).unwrap_or_default(),
        source_id: row::text(record, SOURCE_ID),
        file_name: row::text(record, FILE_NAME),
        status: row::text(record, STATUS),
        payload,
        cases_detected: row::count(record, CASES_DETECTED),
        movements_inserted: row::count(record, MOVEMENTS_INSERTED),
        duplicates_avoided: row::count(record, DUPLICATES_AVOIDED),
        duration_ms: row::count(record, DURATION),
        error: row::text(record, ERROR),
        error_message: row::text(record, ERROR_MESSAGE),
        needs_review: row::flag(record, NEEDS_REVIEW),
        created_at: row::timestamp(record, CREATED_AT),
    }
}

/// Maps every row in `rows`, preserving order.
#[must_use]
pub fn runs_from_rows(rows: &[Value]) -> Vec<PipelineRun> {
    rows.iter().map(run_from_row).collect()
}
