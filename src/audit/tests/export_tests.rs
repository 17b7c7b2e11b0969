//! Unit tests for CSV export.

use chrono::{TimeZone, Utc};
use rstest::rstest;

use crate::audit::{
    domain::AuditLogEntry,
    export::{CSV_HEADER, export_csv},
};

#[rstest]
fn empty_export_has_only_the_header() {
    let csv = export_csv(&[]).expect("export should render");
    assert_eq!(csv, format!("{CSV_HEADER}\n"));
}

#[rstest]
fn fields_with_separators_are_quoted() {
    let entry = AuditLogEntry {
        actor_name: "Silva, Ana".to_owned(),
        action: "UPDATE_ROLE".to_owned(),
        resource: "profiles".to_owned(),
        target_id: "user \"7\"".to_owned(),
        created_at: Utc
            .with_ymd_and_hms(2024, 8, 1, 9, 0, 0)
            .single()
            .map(|at| at.fixed_offset()),
        ..AuditLogEntry::default()
    };

    let csv = export_csv(&[entry]).expect("export should render");

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            CSV_HEADER,
            "2024-08-01T09:00:00+00:00,\"Silva, Ana\",UPDATE_ROLE,profiles,\"user \"\"7\"\"\"",
        ]
    );
}

#[rstest]
fn missing_timestamps_and_line_breaks_survive_export() {
    let entry = AuditLogEntry {
        actor_name: "Ana".to_owned(),
        action: "NOTE".to_owned(),
        target_id: "linha 1\nlinha 2".to_owned(),
        ..AuditLogEntry::default()
    };

    let csv = export_csv(&[entry]).expect("export should render");

    assert_eq!(
        csv,
        format!("{CSV_HEADER}\n,Ana,NOTE,,\"linha 1\nlinha 2\"\n")
    );
}
