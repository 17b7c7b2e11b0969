//! Tests for raw case row normalisation.

use crate::case::adapters::raw::{case_from_row, cases_from_rows};
use crate::case::deadline::effective_deadline;
use crate::case::domain::{ApprovalStatus, ManualStatus};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn legacy_portuguese_columns_are_recognised() {
    let row = json!({
        "id": 17,
        "numero_processo": "0001234-55.2024.8.26.0100",
        "parte": "João Silva",
        "tribunal": "TJSP",
        "uf": "SP",
        "responsavel_id": "user-1",
        "status_manual": "Reviewed",
        "prazo_ia": "prazo em 05/08/24",
        "risco": "Alto",
        "ultima_movimentacao": "Decisão publicada",
        "data_ultima_movimentacao": "2024-07-30T12:00:00Z",
        "created_at": "2024-07-01T08:00:00+00:00",
        "movimentacoes": [
            {"resumo": "Distribuído", "data": "2024-07-01"},
            {"summary": "Citação", "date": "2024-07-10"}
        ]
    });

    let case = case_from_row(&row);

    assert_eq!(case.id, "17");
    assert_eq!(case.case_number, "0001234-55.2024.8.26.0100");
    assert_eq!(case.party_name, "João Silva");
    assert_eq!(case.owner_id.as_deref(), Some("user-1"));
    assert_eq!(case.manual_status, ManualStatus::Reviewed);
    assert_eq!(case.approval, ApprovalStatus::Legacy);
    assert_eq!(case.risk_label_lower(), "alto");
    assert_eq!(case.activity_date(), "2024-07-30");
    assert_eq!(case.movements.len(), 2);
    assert_eq!(
        case.movements.get(1).map(|movement| movement.summary.as_str()),
        Some("Citação")
    );
    assert_eq!(effective_deadline(&case).date, "2024-08-05");
}

#[rstest]
fn unknown_statuses_fall_back_to_defaults() {
    let row = json!({
        "id": "c-1",
        "manual_status": "arquivado",
        "approval_status": "talvez"
    });

    let case = case_from_row(&row);

    assert_eq!(case.manual_status, ManualStatus::Pending);
    assert_eq!(case.approval, ApprovalStatus::Pending);
}

#[rstest]
fn blank_owner_counts_as_unassigned() {
    let case = case_from_row(&json!({"owner_id": "   "}));
    assert!(!case.is_assigned());
    assert!(case.owner_id.is_none());
}

#[rstest]
fn mistyped_fields_are_treated_as_absent() {
    let cases = cases_from_rows(&[json!({
        "deadline": {"unexpected": true},
        "created_at": 12,
        "movements": "none"
    })]);
    let case = cases.first().expect("one case mapped");

    assert!(case.deadline.is_none());
    assert!(case.created_at.is_none());
    assert!(case.movements.is_empty());
    assert_eq!(case.activity_date(), "");
}
