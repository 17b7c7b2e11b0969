//! Ingestion health over deduplicated pipeline runs.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::calendar::same_local_day;
use crate::pipeline::{dedupe, domain::PipelineRun};

/// Pipeline health figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineKpis {
    /// Successful runs created today.
    pub success_count: usize,
    /// Failed runs created today.
    pub failure_count: usize,
    /// Runs flagged for review, across all days.
    pub needs_review: usize,
    /// Mean of the non-zero run durations across all days, `0.0` when none.
    pub avg_duration_ms: f64,
}

/// Computes pipeline health after collapsing duplicate run rows.
///
/// Success and failure are judged independently, so a run with status
/// `success` and a populated error field counts as both.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the mean duration is reported as floating point"
)]
pub fn pipeline_kpis(runs: &[PipelineRun], now: &DateTime<Local>) -> PipelineKpis {
    let deduped = dedupe(runs);

    let todays: Vec<&PipelineRun> = deduped
        .iter()
        .filter(|run| run.created_at.is_some_and(|created| same_local_day(&created, now)))
        .collect();

    let durations: Vec<u64> = deduped
        .iter()
        .filter_map(|run| run.duration_ms)
        .filter(|duration| *duration > 0)
        .collect();
    let avg_duration_ms = if durations.is_empty() {
        0.0
    } else {
        durations.iter().sum::<u64>() as f64 / durations.len() as f64
    };

    PipelineKpis {
        success_count: todays.iter().filter(|run| run.is_success()).count(),
        failure_count: todays.iter().filter(|run| run.is_failure()).count(),
        needs_review: deduped.iter().filter(|run| run.needs_review).count(),
        avg_duration_ms,
    }
}
