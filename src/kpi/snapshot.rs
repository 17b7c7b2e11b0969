//! Input snapshots for KPI computation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::audit::{adapters::raw::entries_from_rows, domain::AuditLogEntry};
use crate::case::{adapters::raw::cases_from_rows, domain::Case};
use crate::pipeline::{adapters::raw::runs_from_rows, domain::PipelineRun};
use crate::settings::{adapters::raw::settings_from_row, domain::OfficeSettings};
use crate::task::{adapters::raw::tasks_from_rows, domain::Task};

/// Canonical records one computation works on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Cases in the office.
    pub cases: Vec<Case>,
    /// Tasks across all cases.
    pub tasks: Vec<Task>,
    /// Pipeline run rows, possibly with duplicates.
    pub runs: Vec<PipelineRun>,
}

impl Snapshot {
    /// Creates a snapshot from canonical records.
    #[must_use]
    pub const fn new(cases: Vec<Case>, tasks: Vec<Task>, runs: Vec<PipelineRun>) -> Self {
        Self { cases, tasks, runs }
    }

    /// Normalises every raw row of `raw`.
    #[must_use]
    pub fn from_raw(raw: &RawSnapshot) -> Self {
        Self {
            cases: cases_from_rows(&raw.cases),
            tasks: tasks_from_rows(&raw.tasks),
            runs: runs_from_rows(&raw.runs),
        }
    }
}

/// Data-store export as read from disk: one array of raw rows per
/// collection plus the optional settings row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSnapshot {
    /// Raw case rows.
    #[serde(default, alias = "processos")]
    pub cases: Vec<Value>,
    /// Raw task rows.
    #[serde(default, alias = "tarefas")]
    pub tasks: Vec<Value>,
    /// Raw pipeline run rows.
    #[serde(default, alias = "pipeline_runs")]
    pub runs: Vec<Value>,
    /// Raw audit rows.
    #[serde(default, alias = "audit_logs")]
    pub audit: Vec<Value>,
    /// The singleton settings row, when exported.
    #[serde(default)]
    pub settings: Option<Value>,
}

impl RawSnapshot {
    /// Office settings from the exported row, or the defaults.
    #[must_use]
    pub fn office_settings(&self) -> OfficeSettings {
        self.settings
            .as_ref()
            .map_or_else(OfficeSettings::default, settings_from_row)
    }

    /// Normalised audit entries.
    #[must_use]
    pub fn audit_entries(&self) -> Vec<AuditLogEntry> {
        entries_from_rows(&self.audit)
    }
}
