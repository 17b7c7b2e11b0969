//! Risk label distribution and staleness.
//!
//! Labels are matched literally after lowercasing. Both `médio` and `medio`
//! are listed because stored labels come in either spelling.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::days_since;
use crate::case::domain::Case;

const HIGH_LABEL: &str = "alto";
const MEDIUM_LABELS: &[&str] = &["médio", "medio"];

/// Risk counts over a set of cases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskKpis {
    /// Cases with no risk label.
    pub unclassified: usize,
    /// Cases labelled high risk.
    pub high: usize,
    /// Cases labelled medium risk.
    pub medium: usize,
    /// Cases without activity for at least the staleness threshold.
    pub stale: usize,
}

/// Returns whether a lowercased label denotes high risk.
#[must_use]
pub fn is_high_label(label: &str) -> bool {
    label.contains(HIGH_LABEL)
}

/// Returns whether a lowercased label denotes medium risk.
#[must_use]
pub fn is_medium_label(label: &str) -> bool {
    MEDIUM_LABELS.iter().any(|medium| label.contains(medium))
}

/// Counts cases per risk label and flags stale ones.
///
/// A case is stale when at least `stale_after_days` whole days have passed
/// since its latest movement, or since its creation when it has none.
#[must_use]
pub fn risk_kpis(cases: &[Case], today: NaiveDate, stale_after_days: u32) -> RiskKpis {
    let threshold = i64::from(stale_after_days);
    cases.iter().fold(RiskKpis::default(), |mut kpis, case| {
        let label = case.risk_label_lower();
        if label.is_empty() {
            kpis.unclassified += 1;
        }
        if is_high_label(&label) {
            kpis.high += 1;
        }
        if is_medium_label(&label) {
            kpis.medium += 1;
        }
        if days_since(&case.activity_date(), today).is_some_and(|days| days >= threshold) {
            kpis.stale += 1;
        }
        kpis
    })
}
