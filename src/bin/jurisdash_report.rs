//! Computes dashboard KPIs from a data-store export.
//!
//! Usage:
//!
//! ```text
//! jurisdash_report [--alert-window <days>] [--token-risk] [--pretty] <snapshot.json>
//! jurisdash_report --audit-csv [--audit-action <tag>] [--audit-search <text>] <snapshot.json>
//! ```
//!
//! The snapshot is a JSON object holding arrays of raw rows under `cases`,
//! `tasks`, `runs` and `audit`, plus an optional `settings` row. Legacy
//! collection names (`processos`, `tarefas`, `pipeline_runs`,
//! `audit_logs`) are accepted. The KPI report is written to stdout as JSON;
//! logs go to stderr and honour `RUST_LOG`.

use std::io::{self, Write};
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use chrono::{DateTime, Local};
use clap::Parser;
use jurisdash::audit::{
    export::{ExportError, export_csv},
    filter::{AuditFilter, filter},
};
use jurisdash::kpi::{
    DashboardKpis, RawSnapshot, Snapshot, insight::CaseInsight, services::KpiService,
};
use jurisdash::settings::{
    adapters::InMemorySettingsStore,
    domain::{OfficeSettings, SettingsError},
    ports::SettingsStoreError,
};
use jurisdash::text::MatchMode;
use mockable::{Clock, DefaultClock};
use serde::Serialize;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "jurisdash_report", version, about = "Case analytics report")]
struct Args {
    /// Path to the JSON snapshot export.
    snapshot: Utf8PathBuf,

    /// Overrides the alert window from the exported settings.
    #[arg(long, env = "JURISDASH_ALERT_WINDOW")]
    alert_window: Option<u32>,

    /// Matches risk terms on whole words instead of substrings.
    #[arg(long)]
    token_risk: bool,

    /// Pretty-prints the JSON report.
    #[arg(long)]
    pretty: bool,

    /// Writes the filtered audit log as CSV instead of the KPI report.
    #[arg(long)]
    audit_csv: bool,

    /// Keeps audit entries with this action tag.
    #[arg(long, requires = "audit_csv")]
    audit_action: Option<String>,

    /// Keeps audit entries whose target, action, resource or actor contains
    /// this text.
    #[arg(long, requires = "audit_csv")]
    audit_search: Option<String>,
}

/// Errors that can occur while producing a report.
#[derive(Debug, Error)]
enum ReportError {
    #[error("failed to read snapshot {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse snapshot: {0}")]
    Parse(#[source] serde_json::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Store(#[from] SettingsStoreError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("failed to serialise report: {0}")]
    Serialise(#[source] serde_json::Error),
    #[error("failed to write report: {0}")]
    Write(#[source] io::Error),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
    #[error("logging init failed: {0}")]
    Logging(String),
}

/// JSON document written to stdout.
#[derive(Debug, Serialize)]
struct Report {
    generated_at: DateTime<Local>,
    alert_window_days: u32,
    dashboard: DashboardKpis,
    insights: Vec<CaseInsight>,
}

fn main() -> Result<(), ReportError> {
    init_logging()?;
    let args = Args::parse();
    let raw = load_snapshot(&args.snapshot)?;
    let output = if args.audit_csv {
        audit_csv(&raw, &args)?
    } else {
        let runtime = Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(ReportError::RuntimeInit)?;
        runtime.block_on(kpi_report(&raw, &args, Arc::new(DefaultClock)))?
    };
    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .map_err(ReportError::Write)
}

fn init_logging() -> Result<(), ReportError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| ReportError::Logging(error.to_string()))
}

fn load_snapshot(path: &Utf8Path) -> Result<RawSnapshot, ReportError> {
    let read_error = |source| ReportError::Read {
        path: path.to_owned(),
        source,
    };
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        read_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "snapshot path has no file name",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(file_name).map_err(read_error)?;
    debug!(path = %path, bytes = contents.len(), "read snapshot");
    parse_snapshot(&contents)
}

fn parse_snapshot(contents: &str) -> Result<RawSnapshot, ReportError> {
    serde_json::from_str(contents).map_err(ReportError::Parse)
}

fn office_settings(raw: &RawSnapshot, args: &Args) -> Result<OfficeSettings, ReportError> {
    let exported = raw.office_settings();
    let settings = OfficeSettings {
        alert_window_days: args.alert_window.unwrap_or(exported.alert_window_days),
        ..exported
    };
    settings.validate()?;
    Ok(settings)
}

async fn kpi_report<C>(raw: &RawSnapshot, args: &Args, clock: Arc<C>) -> Result<String, ReportError>
where
    C: Clock + Send + Sync,
{
    let settings = office_settings(raw, args)?;
    let mode = if args.token_risk {
        MatchMode::Token
    } else {
        MatchMode::Substring
    };
    let store = Arc::new(InMemorySettingsStore::with_settings(settings));
    let service = KpiService::new(store, clock).with_match_mode(mode);

    let snapshot = Snapshot::from_raw(raw);
    let computed = service.report(&snapshot).await?;
    let report = Report {
        generated_at: computed.generated_at,
        alert_window_days: computed.config.alert_window_days,
        dashboard: computed.dashboard,
        insights: computed.insights,
    };
    info!(
        cases = snapshot.cases.len(),
        overdue = report.dashboard.deadlines.overdue,
        "report computed"
    );

    let mut json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .map_err(ReportError::Serialise)?;
    json.push('\n');
    Ok(json)
}

fn audit_csv(raw: &RawSnapshot, args: &Args) -> Result<String, ReportError> {
    let mut criteria = AuditFilter::new();
    if let Some(action) = &args.audit_action {
        criteria = criteria.with_action(action.as_str());
    }
    if let Some(search) = &args.audit_search {
        criteria = criteria.with_search(search.as_str());
    }
    let entries = filter(&raw.audit_entries(), &criteria);
    info!(entries = entries.len(), "exporting audit log");
    Ok(export_csv(&entries)?)
}

#[cfg(test)]
#[path = "jurisdash_report/tests.rs"]
mod tests;
