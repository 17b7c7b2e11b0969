//! Unit tests for the report binary.

use std::sync::Arc;

use clap::Parser;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

use super::{Args, ReportError, audit_csv, kpi_report, office_settings, parse_snapshot};
use jurisdash::kpi::RawSnapshot;
use jurisdash::settings::domain::SettingsError;

const SNAPSHOT: &str = r#"{
    "processos": [
        {"id": "c1", "numero": "0001", "prazo_final": "2000-01-01", "responsavel_id": "ana", "risco": "Alto"},
        {"id": "c2", "numero": "0002", "ultima_movimentacao": "contestação apresentada"}
    ],
    "tarefas": [
        {"id": "t1", "processo_id": "c2", "autor_id": "ana", "status": "pendente"}
    ],
    "pipeline_runs": [],
    "audit_logs": [
        {"id": "a1", "action": "UPDATE_ROLE", "resource": "profiles", "target_id": "u1", "profiles": {"nome": "Ana"}},
        {"id": "a2", "action": "UPDATE_STATUS", "resource": "processos", "target_id": "c1"}
    ],
    "settings": {"alert_window_days": 10, "high_risk_terms": "testa"}
}"#;

#[fixture]
fn raw() -> RawSnapshot {
    parse_snapshot(SNAPSHOT).expect("snapshot parses")
}

fn args(extra: &[&str]) -> Args {
    let mut argv = vec!["jurisdash_report"];
    argv.extend_from_slice(extra);
    argv.push("snapshot.json");
    Args::try_parse_from(argv).expect("arguments parse")
}

#[rstest]
fn alert_window_flag_overrides_exported_settings(raw: RawSnapshot) {
    let exported = office_settings(&raw, &args(&[])).expect("settings");
    assert_eq!(exported.alert_window_days, 10);
    assert_eq!(exported.high_risk_terms, "testa");

    let overridden = office_settings(&raw, &args(&["--alert-window", "3"])).expect("settings");
    assert_eq!(overridden.alert_window_days, 3);
}

#[rstest]
fn out_of_range_alert_window_is_rejected(raw: RawSnapshot) {
    let result = office_settings(&raw, &args(&["--alert-window", "0"]));
    assert!(matches!(
        result,
        Err(ReportError::Settings(SettingsError::InvalidAlertWindow { got: 0, .. }))
    ));
}

#[rstest]
fn audit_flags_require_csv_mode() {
    let result = Args::try_parse_from(["jurisdash_report", "--audit-action", "X", "s.json"]);
    assert!(result.is_err());
}

#[rstest]
fn audit_csv_applies_the_filter(raw: RawSnapshot) {
    let csv = audit_csv(&raw, &args(&["--audit-csv", "--audit-action", "UPDATE_ROLE"]))
        .expect("csv renders");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines, vec!["created_at,actor,action,resource,target_id", ",Ana,UPDATE_ROLE,profiles,u1"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn kpi_report_is_json_with_dashboard_and_insights(raw: RawSnapshot) {
    let output = kpi_report(&raw, &args(&[]), Arc::new(DefaultClock))
        .await
        .expect("report");
    let report: serde_json::Value = serde_json::from_str(&output).expect("valid json");

    assert_eq!(report["alert_window_days"], 10);
    assert_eq!(report["dashboard"]["deadlines"]["overdue"], 1);
    assert_eq!(report["dashboard"]["deadlines"]["unassigned"], 1);
    assert_eq!(report["dashboard"]["risk"]["high"], 1);
    assert_eq!(report["dashboard"]["productivity"]["open_by_user"]["ana"], 1);
    assert_eq!(report["insights"][1]["suggested_risk"], "alto");
}

#[rstest]
fn malformed_snapshots_are_reported() {
    assert!(matches!(parse_snapshot("[1, 2"), Err(ReportError::Parse(_))));
}
