//! Date canonicalisation and whole-day arithmetic.
//!
//! Records carry dates as text in several spellings (`YYYY-MM-DD`, full
//! timestamps). [`normalize_date`] reduces them lexically to the date part
//! and the remaining helpers count calendar days between local midnights.
//! None of these functions consult the system clock; callers resolve
//! "today" once through [`local_today`] and pass it down.

use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;

/// Canonical date format produced by [`normalize_date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reduces a date or timestamp string to its date portion.
///
/// Returns the text before the first `T` when present and the value
/// unchanged otherwise. `None` and empty input yield an empty string. No
/// timezone conversion takes place, so the operation is idempotent.
///
/// # Examples
///
/// ```rust
/// use jurisdash::calendar::normalize_date;
///
/// assert_eq!(normalize_date(Some("2024-08-05T13:00:00Z")), "2024-08-05");
/// assert_eq!(normalize_date(Some("2024-08-05")), "2024-08-05");
/// assert_eq!(normalize_date(None), "");
/// ```
#[must_use]
pub fn normalize_date(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return String::new();
    };
    raw.split_once('T')
        .map_or(raw, |(date, _)| date)
        .to_owned()
}

/// Parses a normalised `YYYY-MM-DD` date, returning `None` when malformed.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let normalized = normalize_date(Some(value));
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

/// Formats a date in the canonical `YYYY-MM-DD` form.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Whole days from `today` until `date`.
///
/// Negative values mean overdue, zero means due today and positive values
/// count the days remaining. Both sides are compared as calendar dates, which
/// is the same as comparing their local midnights. Returns `None` when the
/// date is empty or unparseable.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use jurisdash::calendar::days_to_due;
///
/// let today = NaiveDate::from_ymd_opt(2024, 8, 5).expect("valid date");
/// assert_eq!(days_to_due("2024-08-04", today), Some(-1));
/// assert_eq!(days_to_due("2024-08-05T23:59:00", today), Some(0));
/// assert_eq!(days_to_due("", today), None);
/// ```
#[must_use]
pub fn days_to_due(date: &str, today: NaiveDate) -> Option<i64> {
    parse_date(date).map(|due| (due - today).num_days())
}

/// Whole days elapsed from `date` until `today`.
#[must_use]
pub fn days_since(date: &str, today: NaiveDate) -> Option<i64> {
    parse_date(date).map(|past| (today - past).num_days())
}

/// Resolves the current local calendar day from a clock.
#[must_use]
pub fn local_today(clock: &impl Clock) -> NaiveDate {
    clock.local().date_naive()
}

/// Returns whether `instant` falls on the same local calendar day as `now`.
#[must_use]
pub fn same_local_day(instant: &DateTime<Utc>, now: &DateTime<Local>) -> bool {
    instant.with_timezone(&now.timezone()).date_naive() == now.date_naive()
}
