//! Collapsing repeated pipeline run rows into one row per logical run.
//!
//! Identity is not the row id: it is derived from the source document and
//! the run's reported metrics, so a webhook firing twice for the same file
//! with the same outcome yields a single run. The most recent row wins.

use std::collections::HashSet;

use tracing::debug;

use crate::pipeline::domain::PipelineRun;

/// Placeholder rendered for absent key components.
pub const MISSING: &str = "-";

fn part<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_owned(), |inner| inner.to_string())
}

/// Builds the identity key of a run.
///
/// The key is `file::cases|movements|duplicates|error|duration`, where
/// `file` is the first non-empty of source identifier, file name and row
/// id.
#[must_use]
pub fn dedupe_key(run: &PipelineRun) -> String {
    let file = [run.source_id.as_deref(), run.file_name.as_deref(), Some(run.id.as_str())]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(MISSING);

    let metrics = [
        part(run.cases_detected),
        part(run.movements_inserted),
        part(run.duplicates_avoided),
        part(run.error_text().map(str::trim)),
        part(run.duration_ms),
    ]
    .join("|");

    format!("{file}::{metrics}")
}

/// Returns the runs newest first, keeping only the newest run per key.
///
/// Runs are stably sorted by descending creation time (missing timestamps
/// sort as the epoch) and the first run seen for each [`dedupe_key`] is
/// kept. The result is a subsequence of that ordering and applying the
/// function again changes nothing.
///
/// # Examples
///
/// ```rust
/// use jurisdash::pipeline::{dedupe, domain::PipelineRun};
///
/// let run = PipelineRun {
///     id: "a".to_owned(),
///     file_name: Some("intimacao.pdf".to_owned()),
///     ..PipelineRun::default()
/// };
/// let retry = PipelineRun { id: "b".to_owned(), ..run.clone() };
/// assert_eq!(dedupe(&[run, retry]).len(), 1);
/// ```
#[must_use]
pub fn dedupe(runs: &[PipelineRun]) -> Vec<PipelineRun> {
    let mut ordered: Vec<&PipelineRun> = runs.iter().collect();
    ordered.sort_by_key(|run| std::cmp::Reverse(run.created_millis()));

    let mut seen = HashSet::new();
    let kept: Vec<PipelineRun> = ordered
        .into_iter()
        .filter(|run| seen.insert(dedupe_key(run)))
        .cloned()
        .collect();

    if kept.len() < runs.len() {
        debug!(
            total = runs.len(),
            kept = kept.len(),
            "dropped duplicate pipeline runs"
        );
    }
    kept
}
