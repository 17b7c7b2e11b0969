//! Deadline alert list for the dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::case::{deadline::effective_deadline, domain::Case};

/// A case whose effective deadline falls inside the alert window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineAlert {
    /// Case identifier.
    pub case_id: String,
    /// Court case number.
    pub case_number: String,
    /// Effective deadline in `YYYY-MM-DD` form.
    pub date: String,
    /// Whether the deadline was inferred from a hint.
    pub inferred: bool,
    /// Whole days until the deadline, negative when overdue.
    pub days_to_due: i64,
}

/// Lists cases due within `alert_window_days` of `today`, overdue included.
///
/// The result is sorted by days to due ascending; cases with the same value
/// keep their input order.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use jurisdash::{case::domain::Case, kpi::upcoming::upcoming_deadlines};
///
/// let today = NaiveDate::from_ymd_opt(2024, 8, 1).expect("valid date");
/// let cases = vec![
///     Case { id: "later".to_owned(), deadline: Some("2024-08-06".to_owned()), ..Case::default() },
///     Case { id: "late".to_owned(), deadline: Some("2024-07-30".to_owned()), ..Case::default() },
///     Case { id: "far".to_owned(), deadline: Some("2024-12-01".to_owned()), ..Case::default() },
/// ];
/// let ids: Vec<String> = upcoming_deadlines(&cases, today, 7)
///     .into_iter()
///     .map(|alert| alert.case_id)
///     .collect();
/// assert_eq!(ids, ["late", "later"]);
/// ```
#[must_use]
pub fn upcoming_deadlines(
    cases: &[Case],
    today: NaiveDate,
    alert_window_days: u32,
) -> Vec<DeadlineAlert> {
    let window = i64::from(alert_window_days);
    let mut alerts: Vec<DeadlineAlert> = cases
        .iter()
        .filter_map(|case| {
            let deadline = effective_deadline(case);
            let days_to_due = deadline.days_to_due(today)?;
            (days_to_due <= window).then(|| DeadlineAlert {
                case_id: case.id.clone(),
                case_number: case.case_number.clone(),
                date: deadline.date,
                inferred: deadline.inferred,
                days_to_due,
            })
        })
        .collect();
    alerts.sort_by_key(|alert| alert.days_to_due);
    alerts
}
